use tracing::debug;

use crowdfund_common::{config::Config, error::Result, storage::KeyValueStore};
#[cfg(not(target_arch = "wasm32"))]
use crowdfund_common::storage::FileStore;
use crowdfund_ledger::CampaignLedger;

use crate::{provider::WalletProvider, session::SessionStore};

/// Everything a page needs: the session, the ledger and the injected wallet.
///
/// Pages own one `App` and pass it to their handlers; there is no global
/// state. Both components share clones of the same store.
pub struct App<S: KeyValueStore + Clone, P: WalletProvider> {
    pub(crate) session: SessionStore<S>,
    pub(crate) ledger: CampaignLedger<S>,
    pub(crate) provider: Option<P>,
    pub(crate) config: Config,
}

impl<S: KeyValueStore + Clone, P: WalletProvider> App<S, P> {
    pub fn new(store: S, provider: Option<P>, config: Config) -> Self {
        Self {
            session: SessionStore::new(store.clone(), &config.storage),
            ledger: CampaignLedger::new(store, config.storage.clone()),
            provider,
            config,
        }
    }

    /// Page load: restores the saved account and loads (or seeds) the ledger.
    pub fn init(&mut self) -> Result<()> {
        let account = self.session.restore();
        let campaigns = self.ledger.load()?.len();
        debug!(
            "Page initialized: {} campaigns, account {:?}",
            campaigns,
            account.as_ref().map(|a| a.short())
        );
        Ok(())
    }

    pub fn session(&self) -> &SessionStore<S> {
        &self.session
    }

    pub fn ledger(&self) -> &CampaignLedger<S> {
        &self.ledger
    }

    pub fn provider(&self) -> Option<&P> {
        self.provider.as_ref()
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// How long the page should keep a notice visible.
    pub fn notice_ttl_ms(&self) -> u64 {
        self.config.notice_ttl_ms
    }
}

#[cfg(not(target_arch = "wasm32"))]
impl<P: WalletProvider> App<FileStore, P> {
    /// Opens a file-backed app under `config.data_dir` and initializes it.
    pub fn open(config: Config, provider: Option<P>) -> Result<Self> {
        let store = FileStore::new(&config.data_dir)?;
        tracing::info!("📂 Opening campaign data in {:?}", store.base_path());
        let mut app = Self::new(store, provider, config);
        app.init()?;
        Ok(app)
    }
}
