use crowdfund_common::{
    address::Account,
    error::{FundError, Result},
    storage::KeyValueStore,
    utils::{parse_amount, parse_deadline},
};
use crowdfund_ledger::{placeholder_image, Campaign, CampaignDraft};

use super::notice::{Notice, Outcome};
use super::queries::parse_campaign_id;
use super::types::CampaignForm;
use super::App;
use crate::provider::{ProviderError, WalletProvider};

impl<S: KeyValueStore + Clone, P: WalletProvider> App<S, P> {
    /// Connects the injected wallet and remembers the account.
    pub async fn connect_wallet(&mut self) -> Result<Outcome<Account>> {
        let account = self.session.connect(self.provider.as_ref()).await?;
        Ok(Outcome { value: account, notice: Notice::connected() })
    }

    /// Records a provider answer obtained outside the app.
    ///
    /// `None` means no provider is injected.
    pub fn complete_connect(
        &mut self,
        response: Option<std::result::Result<Vec<String>, ProviderError>>,
    ) -> Result<Outcome<Account>> {
        let response = response.ok_or(FundError::WalletUnavailable)?;
        let account = self.session.complete_connect(response)?;
        Ok(Outcome { value: account, notice: Notice::connected() })
    }

    /// Handles the create-campaign form.
    ///
    /// Checks the connection, then the goal, then the deadline. A missing or
    /// blank image becomes a placeholder built from the title.
    pub fn create_campaign(&mut self, form: CampaignForm) -> Result<Outcome<Campaign>> {
        let owner = self.session.current().ok_or(FundError::NotConnected)?;
        parse_amount(&form.goal)?;
        let deadline = parse_deadline(&form.deadline)?;

        let image = match form.image {
            Some(image) if !image.trim().is_empty() => image,
            _ => placeholder_image(&form.title),
        };

        let draft = CampaignDraft {
            title: form.title,
            description: form.description,
            target: form.goal,
            deadline,
            image,
        };

        let campaign = self.ledger.create(Some(owner), draft)?;
        Ok(Outcome { value: campaign, notice: Notice::created() })
    }

    /// Handles the fund button of the details page.
    pub fn fund_campaign(&mut self, id: &str, amount: &str) -> Result<Outcome<Campaign>> {
        let account = self.session.current().ok_or(FundError::NotConnected)?;
        let value = parse_amount(amount)?;
        let id = parse_campaign_id(id)?;

        let campaign = self.ledger.fund(id, Some(account), amount)?;
        Ok(Outcome { value: campaign, notice: Notice::funded(value) })
    }
}
