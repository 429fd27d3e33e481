//! Kakao client configuration

use serde::{Deserialize, Serialize};

/// Configuration shared by the Kakao clients
///
/// The REST API key is not part of this struct; it is passed to the
/// client constructors separately.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct KakaoConfig {
    /// Base URL for the Kakao Local API (address search)
    #[serde(default = "default_local_base_url")]
    pub local_base_url: String,

    /// Base URL for the Kakao Mobility API (directions)
    #[serde(default = "default_navi_base_url")]
    pub navi_base_url: String,

    /// Request timeout in seconds
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,

    /// Route priority sent with every directions request
    #[serde(default = "default_priority")]
    pub priority: String,

    /// Road type preference sent with every directions request
    #[serde(default = "default_road_types")]
    pub road_types: String,

    /// Vehicle class (1 = passenger car)
    #[serde(default = "default_car_type")]
    pub car_type: u8,
}

fn default_local_base_url() -> String {
    "https://dapi.kakao.com".to_string()
}

fn default_navi_base_url() -> String {
    "https://apis-navi.kakaomobility.com".to_string()
}

const fn default_timeout_secs() -> u64 {
    10
}

fn default_priority() -> String {
    "RECOMMEND".to_string()
}

fn default_road_types() -> String {
    "ROUTINE".to_string()
}

const fn default_car_type() -> u8 {
    1
}

impl Default for KakaoConfig {
    fn default() -> Self {
        Self {
            local_base_url: default_local_base_url(),
            navi_base_url: default_navi_base_url(),
            timeout_secs: default_timeout_secs(),
            priority: default_priority(),
            road_types: default_road_types(),
            car_type: default_car_type(),
        }
    }
}

impl KakaoConfig {
    /// Create a configuration pointing both APIs at one base URL (mock servers)
    #[must_use]
    pub fn for_testing(base_url: &str) -> Self {
        Self {
            local_base_url: base_url.to_string(),
            navi_base_url: base_url.to_string(),
            timeout_secs: 5,
            ..Default::default()
        }
    }

    /// Validate the configuration
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration is invalid.
    pub fn validate(&self) -> Result<(), String> {
        if self.local_base_url.is_empty() {
            return Err("local_base_url must not be empty".to_string());
        }

        if self.navi_base_url.is_empty() {
            return Err("navi_base_url must not be empty".to_string());
        }

        if self.timeout_secs == 0 {
            return Err("timeout_secs must be greater than 0".to_string());
        }

        Ok(())
    }
}
