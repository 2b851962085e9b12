pub mod address;
pub mod config;
pub mod error;
pub mod storage;
pub mod utils;

pub use address::Account;
pub use config::{Config, StorageKeys};
pub use error::{FundError, Result};
pub use storage::{KeyValueStore, MemoryStore, StoreError};

#[cfg(not(target_arch = "wasm32"))]
pub use storage::FileStore;
