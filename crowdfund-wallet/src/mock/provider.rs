use std::{fmt, sync::{Arc, Mutex}};

use async_trait::async_trait;

use crate::provider::{ProviderError, WalletProvider};

/// Scripted wallet provider for tests and headless embedding.
///
/// Clones share the call log, so a test can hand one clone to the app and
/// inspect the other.
#[derive(Clone)]
pub struct MockWalletProvider {
    response: Result<Vec<String>, ProviderError>,
    pub calls: Arc<Mutex<usize>>,
}

impl MockWalletProvider {
    /// A wallet that approves the request with `accounts`.
    pub fn approving<I, A>(accounts: I) -> Self
    where
        I: IntoIterator<Item = A>,
        A: Into<String>,
    {
        Self {
            response: Ok(accounts.into_iter().map(Into::into).collect()),
            calls: Arc::new(Mutex::new(0)),
        }
    }

    /// A wallet whose user dismisses the prompt.
    pub fn rejecting(reason: &str) -> Self {
        Self {
            response: Err(ProviderError::Rejected(reason.to_string())),
            calls: Arc::new(Mutex::new(0)),
        }
    }

    pub fn call_count(&self) -> usize {
        self.calls.lock().map(|c| *c).unwrap_or(0)
    }
}

impl fmt::Debug for MockWalletProvider {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MockWalletProvider")
         .field("response", &self.response)
         .field("calls", &self.call_count())
         .finish()
    }
}

#[async_trait(?Send)]
impl WalletProvider for MockWalletProvider {
    async fn request_accounts(&self) -> Result<Vec<String>, ProviderError> {
        if let Ok(mut calls) = self.calls.lock() {
            *calls += 1;
        }
        self.response.clone()
    }
}
