use async_trait::async_trait;
use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ProviderError {
    /// The user dismissed the connection prompt.
    #[error("request rejected: {0}")]
    Rejected(String),

    /// The provider answered with something other than a list of addresses.
    #[error("unexpected provider response: {0}")]
    InvalidResponse(String),

    #[error("provider returned no accounts")]
    NoAccounts,
}

/// Wallet capability injected into the page (e.g. a browser extension).
///
/// Futures are not required to be `Send`: browser providers live on the
/// single UI thread.
#[async_trait(?Send)]
pub trait WalletProvider {
    /// Asks the wallet for the user's accounts, in the wallet's order.
    async fn request_accounts(&self) -> Result<Vec<String>, ProviderError>;
}

