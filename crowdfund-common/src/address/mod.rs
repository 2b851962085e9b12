pub mod account;
pub mod errors;

pub use account::Account;
pub use errors::AddressError;
