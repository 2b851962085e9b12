use crowdfund_common::{
    error::{FundError, Result},
    storage::KeyValueStore,
    utils::current_time_ms,
};

use super::types::{BackedCampaign, CampaignCard, CampaignDetails, HeaderView, Profile};
use super::App;
use crate::provider::WalletProvider;

/// Parses the `id` query parameter of the details page.
pub fn parse_campaign_id(raw: &str) -> Result<u64> {
    raw.trim()
        .parse::<u64>()
        .map_err(|_| FundError::InvalidCampaignId(raw.to_string()))
}

impl<S: KeyValueStore + Clone, P: WalletProvider> App<S, P> {
    pub fn header(&self) -> HeaderView {
        let account = self.session.current();
        HeaderView {
            short_address: account.map(|a| a.short()),
            show_profile_link: account.is_some(),
        }
    }

    pub fn campaign_cards(&self) -> Vec<CampaignCard> {
        self.ledger.list().iter().map(CampaignCard::from).collect()
    }

    pub fn campaign_details(&self, id: &str) -> Result<CampaignDetails> {
        self.campaign_details_at(id, current_time_ms())
    }

    /// Same as [`campaign_details`](Self::campaign_details) with an explicit clock.
    pub fn campaign_details_at(&self, id: &str, now_ms: i64) -> Result<CampaignDetails> {
        let id = parse_campaign_id(id)?;
        let campaign = self.ledger.find_by_id(id)?;
        Ok(CampaignDetails::new(campaign, now_ms))
    }

    /// The connected account's created and backed campaigns.
    pub fn profile(&self) -> Result<Profile> {
        let account = self.session.current().ok_or(FundError::NotConnected)?;

        let created = self
            .ledger
            .created_by(account)
            .into_iter()
            .map(CampaignCard::from)
            .collect();
        let backed = self
            .ledger
            .backed_by(account)
            .into_iter()
            .map(|c| BackedCampaign::new(c, account))
            .collect();

        Ok(Profile {
            account: account.to_string(),
            created,
            backed,
        })
    }
}
