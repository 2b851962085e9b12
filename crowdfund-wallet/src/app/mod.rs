// Declare the submodules
pub mod actions;
pub mod manager;
pub mod notice;
pub mod queries;
pub mod types;

pub use manager::App;
pub use notice::{Notice, Outcome};
pub use types::{BackedCampaign, CampaignCard, CampaignDetails, CampaignForm, HeaderView, Profile};
