//! Environment-based secret store adapter
//!
//! Reads secrets from environment variables. The Kakao REST API key is
//! looked up here at startup (`kakao/rest_api_key` → `KAKAO_REST_API_KEY`).

use application::{error::ApplicationError, ports::SecretStorePort};
use async_trait::async_trait;
use std::env;
use tracing::{debug, instrument, warn};

/// Secret store that reads from environment variables
///
/// Keys are uppercased with slashes and hyphens replaced by underscores,
/// so `kakao/rest_api_key` becomes `KAKAO_REST_API_KEY`.
#[derive(Debug, Clone, Copy, Default)]
pub struct EnvSecretStore;

impl EnvSecretStore {
    /// Create a new environment secret store
    pub const fn new() -> Self {
        Self
    }

    /// Transform a key path to an environment variable name
    fn key_to_env_var(key: &str) -> String {
        key.replace(['/', '-'], "_").to_uppercase()
    }
}

#[async_trait]
impl SecretStorePort for EnvSecretStore {
    #[instrument(skip(self), fields(env_var))]
    async fn get_secret(&self, key: &str) -> Result<String, ApplicationError> {
        let env_var = Self::key_to_env_var(key);
        tracing::Span::current().record("env_var", &env_var);

        match env::var(&env_var) {
            Ok(value) => {
                debug!("Retrieved secret from environment variable");
                Ok(value)
            }
            Err(env::VarError::NotPresent) => {
                warn!(env_var = %env_var, "Secret not found in environment");
                Err(ApplicationError::NotFound(format!(
                    "Secret not found: {key} (env: {env_var})"
                )))
            }
            Err(env::VarError::NotUnicode(_)) => Err(ApplicationError::Configuration(format!(
                "Secret contains invalid UTF-8: {env_var}"
            ))),
        }
    }
}
