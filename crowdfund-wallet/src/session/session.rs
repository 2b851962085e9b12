use tracing::{info, warn};

use crowdfund_common::{
    address::Account,
    config::StorageKeys,
    error::{FundError, Result},
    storage::KeyValueStore,
};

use crate::provider::{ProviderError, WalletProvider};

/// Tracks the connected wallet account and keeps it across reloads.
///
/// The only transition is "not connected" to "connected".
pub struct SessionStore<S: KeyValueStore> {
    store: S,
    key: String,
    account: Option<Account>,
}

impl<S: KeyValueStore> SessionStore<S> {
    pub fn new(store: S, keys: &StorageKeys) -> Self {
        Self {
            store,
            key: keys.session_key.clone(),
            account: None,
        }
    }

    /// Reads the saved account, if any, and makes it current.
    ///
    /// Missing, blank or unreadable data all mean "not connected".
    pub fn restore(&mut self) -> Option<Account> {
        let raw = match self.store.get(&self.key) {
            Ok(raw) => raw?,
            Err(e) => {
                warn!("⚠️ Could not read saved account: {}", e);
                return None;
            }
        };

        match Account::try_from(raw) {
            Ok(account) => {
                self.account = Some(account.clone());
                Some(account)
            }
            Err(e) => {
                warn!("⚠️ Ignoring saved account: {}", e);
                None
            }
        }
    }

    /// Requests accounts from `provider` and connects the first one.
    ///
    /// `None` means no wallet is injected (`WalletUnavailable`). A rejected
    /// request or an empty answer gives `WalletConnectionFailed`.
    pub async fn connect<P>(&mut self, provider: Option<&P>) -> Result<Account>
    where
        P: WalletProvider + ?Sized,
    {
        let provider = provider.ok_or(FundError::WalletUnavailable)?;
        let response = provider.request_accounts().await;
        self.complete_connect(response)
    }

    /// Second half of [`connect`](Self::connect): records a provider answer.
    ///
    /// Split out so callers that must not hold the session across the
    /// provider call (the browser bindings) can await the provider first.
    pub fn complete_connect(
        &mut self,
        response: std::result::Result<Vec<String>, ProviderError>,
    ) -> Result<Account> {
        let accounts = response.map_err(|e| {
            warn!("⚠️ Wallet request failed: {}", e);
            FundError::WalletConnectionFailed(e.to_string())
        })?;

        let first = accounts
            .into_iter()
            .next()
            .ok_or_else(|| FundError::WalletConnectionFailed(ProviderError::NoAccounts.to_string()))?;

        let account = Account::try_from(first)
            .map_err(|e| FundError::WalletConnectionFailed(e.to_string()))?;

        self.store.set(&self.key, account.as_str())?;
        self.account = Some(account.clone());

        info!("🔐 Wallet connected: {}", account.short());
        Ok(account)
    }

    pub fn current(&self) -> Option<&Account> {
        self.account.as_ref()
    }

    pub fn is_connected(&self) -> bool {
        self.account.is_some()
    }
}
