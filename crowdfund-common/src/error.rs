use thiserror::Error;

use crate::storage::StoreError;

pub type Result<T> = std::result::Result<T, FundError>;

/// Errors surfaced by the session and campaign model.
///
/// Every variant is recoverable: the presentation layer turns it into a
/// transient notice and keeps running.
#[derive(Debug, Error)]
pub enum FundError {
    /// No wallet provider was injected into the page.
    #[error("wallet provider unavailable")]
    WalletUnavailable,

    /// A provider exists but the account request failed or was rejected.
    #[error("wallet connection failed: {0}")]
    WalletConnectionFailed(String),

    /// A mutation was attempted without a connected account.
    #[error("no connected account")]
    NotConnected,

    /// Amount or target was not a strictly positive number.
    #[error("invalid amount: {0:?}")]
    InvalidAmount(String),

    /// No campaign carries the requested id.
    #[error("campaign {0} not found")]
    NotFound(u64),

    /// The campaign id taken from the page could not be parsed.
    #[error("invalid campaign id: {0:?}")]
    InvalidCampaignId(String),

    /// The deadline entered in the create form is not a date.
    #[error("invalid deadline: {0:?}")]
    InvalidDeadline(String),

    /// Stored ids leave no unused id for a new campaign.
    #[error("no campaign ids left")]
    IdsExhausted,

    #[error("storage error: {0}")]
    Storage(#[from] StoreError),

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl FundError {
    /// Whether the error stems from user input rather than the environment.
    pub fn is_user_error(&self) -> bool {
        matches!(
            self,
            FundError::NotConnected
                | FundError::InvalidAmount(_)
                | FundError::InvalidCampaignId(_)
                | FundError::InvalidDeadline(_)
        )
    }
}
