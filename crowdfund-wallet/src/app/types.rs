use serde::{Deserialize, Serialize};

use crowdfund_ledger::{Campaign, Donation};

/// Characters of the description shown on a card.
pub const CARD_EXCERPT_CHARS: usize = 80;
/// Characters of the owner address shown on a backed-campaign row.
pub const OWNER_EXCERPT_CHARS: usize = 12;

/// Raw values of the create-campaign form.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CampaignForm {
    pub title: String,
    pub description: String,
    pub goal: String,
    pub deadline: String,
    #[serde(default)]
    pub image: Option<String>,
}

/// Header state: connect button label and profile link visibility.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HeaderView {
    pub short_address: Option<String>,
    pub show_profile_link: bool,
}

/// Grid card on the home and profile pages.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CampaignCard {
    pub id: u64,
    pub title: String,
    pub excerpt: String,
    pub image: String,
    pub amount_collected: f64,
    pub target: f64,
    pub progress: f64,
}

impl From<&Campaign> for CampaignCard {
    fn from(campaign: &Campaign) -> Self {
        Self {
            id: campaign.id,
            title: campaign.title.clone(),
            excerpt: campaign.excerpt(CARD_EXCERPT_CHARS),
            image: campaign.image.clone(),
            amount_collected: campaign.amount_collected,
            target: campaign.target,
            progress: campaign.percent_funded(),
        }
    }
}

/// Everything the details page renders for one campaign.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CampaignDetails {
    pub id: u64,
    pub title: String,
    pub owner: String,
    pub description: String,
    pub image: String,
    pub amount_collected: f64,
    pub target: f64,
    pub progress: f64,
    pub days_left: Option<u64>,
    pub backers: usize,
    pub donators: Vec<Donation>,
}

impl CampaignDetails {
    pub fn new(campaign: &Campaign, now_ms: i64) -> Self {
        Self {
            id: campaign.id,
            title: campaign.title.clone(),
            owner: campaign.owner.clone(),
            description: campaign.description.clone(),
            image: campaign.image.clone(),
            amount_collected: campaign.amount_collected,
            target: campaign.target,
            progress: campaign.percent_funded(),
            days_left: campaign.days_remaining(now_ms),
            backers: campaign.donators.len(),
            donators: campaign.donators.clone(),
        }
    }
}

/// Row in the "Campaigns I've Backed" list.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BackedCampaign {
    pub id: u64,
    pub title: String,
    pub owner_excerpt: String,
    pub contributed: f64,
}

impl BackedCampaign {
    pub fn new(campaign: &Campaign, account: &str) -> Self {
        Self {
            id: campaign.id,
            title: campaign.title.clone(),
            owner_excerpt: campaign.owner.chars().take(OWNER_EXCERPT_CHARS).collect(),
            contributed: campaign.contribution_of(account),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Profile {
    pub account: String,
    pub created: Vec<CampaignCard>,
    pub backed: Vec<BackedCampaign>,
}
