//! Domain-level errors

use thiserror::Error;

/// Errors that can occur in the domain layer
#[derive(Debug, Error)]
pub enum DomainError {
    /// Address text was empty or otherwise unusable
    #[error("Invalid address: {0}")]
    InvalidAddress(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_address_error_message() {
        let err = DomainError::InvalidAddress("address must not be empty".to_string());
        assert_eq!(
            err.to_string(),
            "Invalid address: address must not be empty"
        );
    }
}
