//! Kakao API configuration.

use integration_kakao::KakaoConfig;
use secrecy::SecretString;
use serde::{Deserialize, Serialize};

/// Kakao Local and Kakao Mobility settings
#[derive(Clone, Serialize, Deserialize)]
pub struct KakaoAppConfig {
    /// Base URL of the Kakao Local API (address search)
    #[serde(default = "default_local_base_url")]
    pub local_base_url: String,

    /// Base URL of the Kakao Mobility API (directions)
    #[serde(default = "default_navi_base_url")]
    pub navi_base_url: String,

    /// Request timeout in seconds
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,

    /// Route priority sent to the directions API
    #[serde(default = "default_priority")]
    pub priority: String,

    /// Road type preference sent to the directions API
    #[serde(default = "default_road_types")]
    pub road_types: String,

    /// Vehicle class sent to the directions API
    #[serde(default = "default_car_type")]
    pub car_type: u8,

    /// REST API key (sensitive - uses SecretString)
    ///
    /// Usually filled in by [`super::AppConfig::resolve_secrets`].
    #[serde(default, skip_serializing)]
    pub rest_api_key: Option<SecretString>,
}

impl std::fmt::Debug for KakaoAppConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("KakaoAppConfig")
            .field("local_base_url", &self.local_base_url)
            .field("navi_base_url", &self.navi_base_url)
            .field("timeout_secs", &self.timeout_secs)
            .field("priority", &self.priority)
            .field("road_types", &self.road_types)
            .field("car_type", &self.car_type)
            .field(
                "rest_api_key",
                &self.rest_api_key.as_ref().map(|_| "[REDACTED]"),
            )
            .finish()
    }
}

fn default_local_base_url() -> String {
    KakaoConfig::default().local_base_url
}

fn default_navi_base_url() -> String {
    KakaoConfig::default().navi_base_url
}

fn default_timeout_secs() -> u64 {
    KakaoConfig::default().timeout_secs
}

fn default_priority() -> String {
    KakaoConfig::default().priority
}

fn default_road_types() -> String {
    KakaoConfig::default().road_types
}

fn default_car_type() -> u8 {
    KakaoConfig::default().car_type
}

impl Default for KakaoAppConfig {
    fn default() -> Self {
        Self {
            local_base_url: default_local_base_url(),
            navi_base_url: default_navi_base_url(),
            timeout_secs: default_timeout_secs(),
            priority: default_priority(),
            road_types: default_road_types(),
            car_type: default_car_type(),
            rest_api_key: None,
        }
    }
}

impl KakaoAppConfig {
    /// Client configuration for the integration crate
    #[must_use]
    pub fn to_client_config(&self) -> KakaoConfig {
        KakaoConfig {
            local_base_url: self.local_base_url.trim_end_matches('/').to_string(),
            navi_base_url: self.navi_base_url.trim_end_matches('/').to_string(),
            timeout_secs: self.timeout_secs,
            priority: self.priority.clone(),
            road_types: self.road_types.clone(),
            car_type: self.car_type,
        }
    }
}
