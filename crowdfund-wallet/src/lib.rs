pub mod app;
pub mod mock;
pub mod provider;
pub mod session;

#[cfg(target_arch = "wasm32")]
pub mod wasm;

pub use app::{App, Notice, Outcome};
pub use provider::{ProviderError, WalletProvider};
pub use session::SessionStore;
