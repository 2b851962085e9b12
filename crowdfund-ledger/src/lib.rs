pub mod core;

pub use crate::core::campaign::{diagnose, placeholder_image, Campaign, CampaignDraft, Donation, LedgerIssue};
pub use crate::core::ledger::{seed_campaigns, CampaignLedger};
