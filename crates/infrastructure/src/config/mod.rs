//! Application configuration
//!
//! Split into focused sub-modules:
//! - `server`: HTTP server settings
//! - `kakao`: Kakao Local / Kakao Mobility endpoints, route preferences, API key
//! - `meetup`: home address and page defaults

mod kakao;
mod meetup;
mod server;

use application::error::ApplicationError;
use application::ports::SecretStorePort;
use domain::Address;
use secrecy::{ExposeSecret, SecretString};
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

pub use kakao::KakaoAppConfig;
pub use meetup::MeetupConfig;
pub use server::ServerConfig;

/// Secret store key holding the Kakao REST API key
///
/// [`crate::adapters::EnvSecretStore`] maps it to `KAKAO_REST_API_KEY`.
pub const KAKAO_API_KEY_SECRET: &str = "kakao/rest_api_key";

/// Environment variable prefix for configuration overrides
const ENV_PREFIX: &str = "HALFWAY";

/// Main application configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    /// Server configuration
    #[serde(default)]
    pub server: ServerConfig,

    /// Kakao API configuration
    #[serde(default)]
    pub kakao: KakaoAppConfig,

    /// Meetup search configuration
    #[serde(default)]
    pub meetup: MeetupConfig,
}

impl AppConfig {
    /// Load configuration from `config.toml` (optional) and environment variables
    ///
    /// Environment overrides use the `HALFWAY_` prefix with `__` between
    /// nesting levels, e.g. `HALFWAY_SERVER__PORT=8080`.
    pub fn load() -> Result<Self, config::ConfigError> {
        let builder = config::Config::builder()
            // Load from file if exists
            .add_source(config::File::with_name("config").required(false))
            .add_source(
                config::Environment::with_prefix(ENV_PREFIX)
                    .prefix_separator("_")
                    .separator("__")
                    .try_parsing(true),
            );

        let config = builder.build()?;
        config.try_deserialize()
    }

    /// Parse configuration from a TOML document, without environment overrides
    pub fn from_toml(toml: &str) -> Result<Self, config::ConfigError> {
        config::Config::builder()
            .add_source(config::File::from_str(toml, config::FileFormat::Toml))
            .build()?
            .try_deserialize()
    }

    /// Fill in the Kakao REST API key from a secret store
    ///
    /// A key already present in the configuration wins. The key must end up
    /// present and non-empty; anything else is a configuration error.
    pub async fn resolve_secrets(
        &mut self,
        store: &dyn SecretStorePort,
    ) -> Result<(), ApplicationError> {
        info!("Resolving secrets from secret store");

        let configured = self
            .kakao
            .rest_api_key
            .as_ref()
            .is_some_and(|key| !key.expose_secret().trim().is_empty());

        if configured {
            debug!("kakao.rest_api_key already set in configuration");
        } else {
            let value = store.get_secret(KAKAO_API_KEY_SECRET).await.map_err(|e| {
                ApplicationError::Configuration(format!(
                    "Kakao REST API key is not set ({e})"
                ))
            })?;

            let value = value.trim();
            if value.is_empty() {
                return Err(ApplicationError::Configuration(
                    "Kakao REST API key is empty".to_string(),
                ));
            }

            self.kakao.rest_api_key = Some(SecretString::from(value.to_owned()));
            debug!("Loaded kakao.rest_api_key from secret store");
        }

        info!("Secret resolution completed");
        Ok(())
    }

    /// The resolved Kakao REST API key
    pub fn kakao_api_key(&self) -> Result<&SecretString, ApplicationError> {
        self.kakao.rest_api_key.as_ref().ok_or_else(|| {
            ApplicationError::Configuration("Kakao REST API key has not been resolved".to_string())
        })
    }

    /// The configured home address
    pub fn home_address(&self) -> Result<Address, ApplicationError> {
        Address::parse(&self.meetup.home_address).map_err(|e| {
            ApplicationError::Configuration(format!("meetup.home_address: {e}"))
        })
    }

    /// Validate the configuration
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration is invalid.
    pub fn validate(&self) -> Result<(), String> {
        self.kakao
            .to_client_config()
            .validate()
            .map_err(|e| format!("kakao: {e}"))?;

        if self.meetup.home_address.trim().is_empty() {
            return Err("meetup.home_address must not be empty".to_string());
        }

        if self.meetup.map_zoom == 0 || self.meetup.map_zoom > 19 {
            return Err("meetup.map_zoom must be between 1 and 19".to_string());
        }

        if self.server.port == 0 {
            return Err("server.port must be greater than 0".to_string());
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use std::collections::HashMap;

    #[derive(Debug, Default)]
    struct MapSecretStore(HashMap<String, String>);

    impl MapSecretStore {
        fn with(key: &str, value: &str) -> Self {
            Self(HashMap::from([(key.to_string(), value.to_string())]))
        }
    }

    #[async_trait]
    impl SecretStorePort for MapSecretStore {
        async fn get_secret(&self, key: &str) -> Result<String, ApplicationError> {
            self.0
                .get(key)
                .cloned()
                .ok_or_else(|| ApplicationError::NotFound(format!("Secret not found: {key}")))
        }
    }

    #[test]
    fn defaults_are_valid() {
        let config = AppConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.meetup.home_address, "충남 홍성군 청사로 15");
        assert_eq!(config.meetup.map_zoom, 9);
        assert!(config.kakao.rest_api_key.is_none());
    }

    #[test]
    fn from_toml_overrides_sections() {
        let config = AppConfig::from_toml(
            r#"
            [server]
            port = 8080
            log_format = "json"

            [kakao]
            timeout_secs = 3

            [meetup]
            home_address = "대전 서구 둔산로 100"
            "#,
        )
        .unwrap();

        assert_eq!(config.server.port, 8080);
        assert_eq!(
            crate::LogFormat::from_setting(&config.server.log_format),
            crate::LogFormat::Json
        );
        assert_eq!(config.kakao.timeout_secs, 3);
        assert_eq!(config.kakao.priority, "RECOMMEND");
        assert_eq!(config.meetup.home_address, "대전 서구 둔산로 100");
        assert_eq!(config.meetup.default_address, "서울시 강남구 테헤란로 427");
    }

    #[test]
    fn validate_rejects_empty_home_address() {
        let mut config = AppConfig::default();
        config.meetup.home_address = "  ".to_string();
        assert!(config.validate().is_err());
    }

    #[test]
    fn validate_rejects_zero_timeout() {
        let mut config = AppConfig::default();
        config.kakao.timeout_secs = 0;
        let err = config.validate().unwrap_err();
        assert!(err.starts_with("kakao:"));
    }

    #[test]
    fn validate_rejects_empty_base_url() {
        let mut config = AppConfig::default();
        config.kakao.navi_base_url = String::new();
        assert!(config.validate().is_err());
    }

    #[test]
    fn home_address_parses() {
        let config = AppConfig::default();
        assert_eq!(config.home_address().unwrap().as_str(), "충남 홍성군 청사로 15");
    }

    #[tokio::test]
    async fn resolve_secrets_loads_key() {
        let mut config = AppConfig::default();
        let store = MapSecretStore::with(KAKAO_API_KEY_SECRET, " abc123 ");

        config.resolve_secrets(&store).await.unwrap();

        let key = config.kakao_api_key().unwrap();
        assert_eq!(key.expose_secret(), "abc123");
    }

    #[tokio::test]
    async fn resolve_secrets_missing_key_is_fatal() {
        let mut config = AppConfig::default();
        let store = MapSecretStore::default();

        let result = config.resolve_secrets(&store).await;
        assert!(matches!(result, Err(ApplicationError::Configuration(_))));
        assert!(config.kakao_api_key().is_err());
    }

    #[tokio::test]
    async fn resolve_secrets_empty_key_is_fatal() {
        let mut config = AppConfig::default();
        let store = MapSecretStore::with(KAKAO_API_KEY_SECRET, "   ");

        let result = config.resolve_secrets(&store).await;
        assert!(matches!(result, Err(ApplicationError::Configuration(_))));
    }

    #[tokio::test]
    async fn resolve_secrets_keeps_configured_key() {
        let mut config = AppConfig::default();
        config.kakao.rest_api_key = Some(SecretString::from("from-config"));
        let store = MapSecretStore::with(KAKAO_API_KEY_SECRET, "from-store");

        config.resolve_secrets(&store).await.unwrap();
        assert_eq!(config.kakao_api_key().unwrap().expose_secret(), "from-config");
    }
}
