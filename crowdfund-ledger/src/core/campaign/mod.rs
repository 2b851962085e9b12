pub mod diagnostics;
pub mod model;

pub use diagnostics::{diagnose, LedgerIssue};
pub use model::{placeholder_image, Campaign, CampaignDraft, Donation};
