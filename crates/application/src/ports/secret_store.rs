//! Port for secret storage and retrieval
//!
//! This port defines the interface for retrieving secrets such as the
//! mapping provider's API key from a process-wide store.

use async_trait::async_trait;

use crate::error::ApplicationError;

/// Port for secret storage operations
///
/// This trait is object-safe so the configuration layer can take a
/// `&dyn SecretStorePort`.
#[async_trait]
pub trait SecretStorePort: Send + Sync {
    /// Retrieve a secret by its key/path
    ///
    /// # Arguments
    /// * `key` - The key or path to the secret (e.g., "kakao/rest_api_key")
    ///
    /// # Returns
    /// The secret value as a string, or `ApplicationError::NotFound`
    async fn get_secret(&self, key: &str) -> Result<String, ApplicationError>;
}
