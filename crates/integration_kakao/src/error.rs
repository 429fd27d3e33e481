//! Kakao error types

use thiserror::Error;

/// Errors that can occur when calling the Kakao APIs
#[derive(Debug, Error)]
pub enum KakaoError {
    /// Connection to the service failed
    #[error("Connection failed: {0}")]
    ConnectionFailed(String),

    /// Service answered with a non-success status
    #[error("Request failed: {0}")]
    RequestFailed(String),

    /// Failed to parse the response body
    #[error("Parse error: {0}")]
    ParseError(String),

    /// Address search returned no documents
    #[error("Address not found: {0}")]
    AddressNotFound(String),

    /// Directions returned no usable route
    #[error("No route found: {0}")]
    NoRoute(String),

    /// API key was rejected
    #[error("Unauthorized: {0}")]
    Unauthorized(String),

    /// Rate limit exceeded
    #[error("Rate limit exceeded")]
    RateLimitExceeded,

    /// Request timeout
    #[error("Request timed out after {timeout_secs} seconds")]
    Timeout {
        /// The timeout duration in seconds
        timeout_secs: u64,
    },

    /// Configuration error
    #[error("Configuration error: {0}")]
    ConfigurationError(String),
}
