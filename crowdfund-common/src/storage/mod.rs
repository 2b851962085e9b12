//! storage
//!
//! Durable string key-value storage shared by the session and the campaign
//! ledger. Values are whole documents: callers read and rewrite a key in one
//! call, there are no partial updates.

pub mod errors;
pub mod memory;

#[cfg(not(target_arch = "wasm32"))]
pub mod file;

pub use errors::StoreError;
pub use memory::MemoryStore;

#[cfg(not(target_arch = "wasm32"))]
pub use file::FileStore;

/// Backend for durable key-value storage.
///
/// Implementations use interior mutability so the session store and the
/// ledger can each hold a clone of the same backend.
pub trait KeyValueStore {
    /// Reads the value stored under `key`, `None` when the key was never set.
    fn get(&self, key: &str) -> Result<Option<String>, StoreError>;

    /// Replaces the value under `key`.
    fn set(&self, key: &str, value: &str) -> Result<(), StoreError>;
}
