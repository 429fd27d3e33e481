//! Kakao Mobility directions client
//!
//! Fetches a driving route with `GET /v1/directions`. Only the first
//! returned route is used; its guide points and road distances are
//! collected across all sections.

use async_trait::async_trait;
use domain::Coordinate;
use reqwest::Client;
use secrecy::SecretString;
use serde::Deserialize;
use tracing::{debug, instrument, warn};

use crate::config::KakaoConfig;
use crate::error::KakaoError;
use crate::http::{build_client, format_degrees, send_json};
use crate::models::{DrivingRoute, GuidePoint};

/// Trait for directions clients
#[async_trait]
pub trait DirectionsClient: Send + Sync {
    /// Get a driving route between two (latitude, longitude) coordinates
    async fn directions(
        &self,
        origin: &Coordinate,
        destination: &Coordinate,
    ) -> Result<DrivingRoute, KakaoError>;
}

/// Kakao Mobility directions client
#[derive(Debug)]
pub struct KakaoDirectionsClient {
    client: Client,
    config: KakaoConfig,
}

impl KakaoDirectionsClient {
    /// Create a new directions client
    ///
    /// # Errors
    ///
    /// Returns an error if the API key is empty or the HTTP client cannot be initialized.
    pub fn new(config: &KakaoConfig, api_key: &SecretString) -> Result<Self, KakaoError> {
        Ok(Self {
            client: build_client(config, api_key)?,
            config: config.clone(),
        })
    }

    /// The API takes `lon,lat`; our coordinates are `lat,lon`
    fn lon_lat_param(coordinate: &Coordinate) -> String {
        format!(
            "{},{}",
            format_degrees(coordinate.longitude()),
            format_degrees(coordinate.latitude())
        )
    }

    /// Query parameters for a directions request
    fn query_params(
        &self,
        origin: &Coordinate,
        destination: &Coordinate,
    ) -> Vec<(&'static str, String)> {
        vec![
            ("origin", Self::lon_lat_param(origin)),
            ("destination", Self::lon_lat_param(destination)),
            ("priority", self.config.priority.clone()),
            ("road_types", self.config.road_types.clone()),
            ("car_type", self.config.car_type.to_string()),
        ]
    }

    fn convert_response(raw: RawDirectionsResponse) -> Result<DrivingRoute, KakaoError> {
        let route = raw
            .routes
            .into_iter()
            .next()
            .ok_or_else(|| KakaoError::NoRoute("no routes returned".to_string()))?;

        if route.result_code != 0 {
            return Err(KakaoError::NoRoute(
                route
                    .result_msg
                    .unwrap_or_else(|| format!("result code {}", route.result_code)),
            ));
        }

        let mut guides = Vec::new();
        let mut total_distance_m = 0.0;
        for section in route.sections {
            guides.extend(section.guides.into_iter().map(|g| GuidePoint {
                x: g.x,
                y: g.y,
                name: g.name.filter(|n| !n.is_empty()),
            }));
            total_distance_m += section.roads.iter().map(|r| r.distance).sum::<f64>();
        }

        Ok(DrivingRoute {
            guides,
            total_distance_m,
        })
    }
}

#[async_trait]
impl DirectionsClient for KakaoDirectionsClient {
    #[instrument(skip(self), fields(origin = %origin, destination = %destination))]
    async fn directions(
        &self,
        origin: &Coordinate,
        destination: &Coordinate,
    ) -> Result<DrivingRoute, KakaoError> {
        let url = format!("{}/v1/directions", self.config.navi_base_url);
        let params = self.query_params(origin, destination);

        debug!(?url, "Requesting directions");

        let request = self.client.get(&url).query(&params);
        let raw: RawDirectionsResponse = send_json(request, self.config.timeout_secs).await?;
        let route = Self::convert_response(raw)?;

        if route.guides.is_empty() {
            warn!("Route has no guide points");
        }

        debug!(
            guides = route.guides.len(),
            distance_m = route.total_distance_m,
            "Directions received"
        );
        Ok(route)
    }
}

// --- Raw API response types for deserialization ---

#[derive(Debug, Deserialize)]
struct RawDirectionsResponse {
    #[serde(default)]
    routes: Vec<RawRoute>,
}

#[derive(Debug, Deserialize)]
struct RawRoute {
    #[serde(default)]
    result_code: i64,
    result_msg: Option<String>,
    #[serde(default)]
    sections: Vec<RawSection>,
}

#[derive(Debug, Deserialize)]
struct RawSection {
    #[serde(default)]
    guides: Vec<RawGuide>,
    #[serde(default)]
    roads: Vec<RawRoad>,
}

#[derive(Debug, Deserialize)]
struct RawGuide {
    x: f64,
    y: f64,
    name: Option<String>,
}

#[derive(Debug, Deserialize)]
struct RawRoad {
    distance: f64,
}
