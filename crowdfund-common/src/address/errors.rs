use thiserror::Error;

/// Errors raised while turning provider or storage strings into an [`Account`](super::Account).
#[derive(Debug, Error, PartialEq, Eq)]
pub enum AddressError {
    /// The string was empty or only whitespace.
    #[error("empty account address")]
    Empty,

    /// The string contained whitespace inside the address.
    #[error("malformed account address: {0:?}")]
    Malformed(String),
}
