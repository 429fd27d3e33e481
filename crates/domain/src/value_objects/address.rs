//! Free-text address value object

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::errors::DomainError;

/// Longest address accepted from user input, in characters
pub const MAX_ADDRESS_LEN: usize = 200;

/// A free-text postal address as typed by a user
///
/// Surrounding whitespace is trimmed; the remaining text must not be empty.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Address(String);

impl Address {
    /// Parse an address from user input
    ///
    /// # Errors
    ///
    /// Returns `DomainError::InvalidAddress` if the trimmed text is empty or
    /// longer than [`MAX_ADDRESS_LEN`] characters.
    pub fn parse(input: &str) -> Result<Self, DomainError> {
        let trimmed = input.trim();
        if trimmed.is_empty() {
            return Err(DomainError::InvalidAddress(
                "address must not be empty".to_string(),
            ));
        }
        if trimmed.chars().count() > MAX_ADDRESS_LEN {
            return Err(DomainError::InvalidAddress(format!(
                "address must be at most {MAX_ADDRESS_LEN} characters"
            )));
        }
        Ok(Self(trimmed.to_string()))
    }

    /// Get the address text
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for Address {
    type Error = DomainError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl From<Address> for String {
    fn from(address: Address) -> Self {
        address.0
    }
}

impl AsRef<str> for Address {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
