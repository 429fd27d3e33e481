//! Meetup search settings.

use serde::{Deserialize, Serialize};

/// Fixed home address and page defaults
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MeetupConfig {
    /// The fixed origin of every search
    #[serde(default = "default_home_address")]
    pub home_address: String,

    /// Value pre-filled in the address input
    #[serde(default = "default_address")]
    pub default_address: String,

    /// Leaflet zoom level for the result map
    #[serde(default = "default_map_zoom")]
    pub map_zoom: u8,
}

fn default_home_address() -> String {
    "충남 홍성군 청사로 15".to_string()
}

fn default_address() -> String {
    "서울시 강남구 테헤란로 427".to_string()
}

const fn default_map_zoom() -> u8 {
    9
}

impl Default for MeetupConfig {
    fn default() -> Self {
        Self {
            home_address: default_home_address(),
            default_address: default_address(),
            map_zoom: default_map_zoom(),
        }
    }
}
