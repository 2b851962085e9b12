use thiserror::Error;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// The key cannot be mapped onto the backend (e.g. path separators for the file store).
    #[error("invalid key: {0:?}")]
    InvalidKey(String),

    /// The backend refused the operation (quota, access denied, lock poisoned).
    #[error("backend failure: {0}")]
    Backend(String),
}
