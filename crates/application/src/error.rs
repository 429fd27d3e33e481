//! Application-level errors

use thiserror::Error;

/// Errors that can occur in the application layer
#[derive(Debug, Error)]
pub enum ApplicationError {
    /// Address could not be resolved to a coordinate
    #[error("Not found: {0}")]
    NotFound(String),

    /// Transport or HTTP-level failure talking to a provider
    #[error("Request failed: {0}")]
    RequestFailed(String),

    /// The directions provider returned no usable route
    #[error("No route found: {0}")]
    EmptyRoute(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Configuration(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_messages() {
        assert_eq!(
            ApplicationError::NotFound("x".to_string()).to_string(),
            "Not found: x"
        );
        assert_eq!(
            ApplicationError::RequestFailed("HTTP 500".to_string()).to_string(),
            "Request failed: HTTP 500"
        );
        assert_eq!(
            ApplicationError::EmptyRoute("no routes".to_string()).to_string(),
            "No route found: no routes"
        );
        assert_eq!(
            ApplicationError::Configuration("missing key".to_string()).to_string(),
            "Configuration error: missing key"
        );
    }
}
