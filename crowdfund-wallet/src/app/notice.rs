use serde::Serialize;

use crowdfund_common::error::FundError;

/// Transient message shown to the user after an action.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Notice {
    pub message: String,
    pub is_error: bool,
}

/// Result of a successful action together with the notice to display.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Outcome<T> {
    pub value: T,
    pub notice: Notice,
}

impl Notice {
    pub fn success(message: impl Into<String>) -> Self {
        Self { message: message.into(), is_error: false }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self { message: message.into(), is_error: true }
    }

    pub fn connected() -> Self {
        Self::success("Wallet connected successfully!")
    }

    pub fn created() -> Self {
        Self::success("Campaign created successfully!")
    }

    pub fn funded(amount: f64) -> Self {
        Self::success(format!("Successfully funded {} ETH!", amount))
    }
}

impl From<&FundError> for Notice {
    fn from(err: &FundError) -> Self {
        let message = match err {
            FundError::WalletUnavailable => "Please install MetaMask to use this DApp.",
            FundError::WalletConnectionFailed(_) => "Wallet connection failed.",
            FundError::NotConnected => "Please connect your wallet first.",
            FundError::InvalidAmount(_) => "Please enter a valid amount.",
            FundError::NotFound(_) => "Campaign not found.",
            FundError::InvalidCampaignId(_) => "Invalid campaign ID.",
            FundError::InvalidDeadline(_) => "Please enter a valid deadline.",
            FundError::Storage(_) | FundError::Serialization(_) | FundError::IdsExhausted => {
                "Error: Could not save campaign data."
            }
        };
        Notice::error(message)
    }
}

impl From<FundError> for Notice {
    fn from(err: FundError) -> Self {
        Notice::from(&err)
    }
}
