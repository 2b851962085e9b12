use serde::{Deserialize, Serialize};

use super::errors::AddressError;

/// Wallet address of a connected user.
///
/// The value is kept exactly as the provider returned it. Comparisons used
/// for ownership and backing are ASCII case-insensitive, since providers mix
/// checksummed and lower-case hex.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Account(String);

impl TryFrom<String> for Account {
    type Error = AddressError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            return Err(AddressError::Empty);
        }
        if trimmed.chars().any(char::is_whitespace) {
            return Err(AddressError::Malformed(s));
        }
        if trimmed.len() == s.len() {
            Ok(Account(s))
        } else {
            Ok(Account(trimmed.to_string()))
        }
    }
}

impl TryFrom<&str> for Account {
    type Error = AddressError;

    fn try_from(s: &str) -> Result<Self, Self::Error> {
        Account::try_from(s.to_string())
    }
}

impl From<Account> for String {
    fn from(account: Account) -> Self {
        account.0
    }
}

impl std::ops::Deref for Account {
    type Target = str;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl std::fmt::Display for Account {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl Account {
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Case-insensitive match against a raw address string.
    pub fn matches(&self, other: &str) -> bool {
        self.0.eq_ignore_ascii_case(other)
    }

    /// Header form of the address: `0x1234...abcd`.
    ///
    /// Addresses too short to abbreviate are returned unchanged.
    pub fn short(&self) -> String {
        let chars: Vec<char> = self.0.chars().collect();
        if chars.len() <= 10 {
            return self.0.clone();
        }
        let head: String = chars[..6].iter().collect();
        let tail: String = chars[chars.len() - 4..].iter().collect();
        format!("{}...{}", head, tail)
    }
}
