//! Kakao Local address search client
//!
//! Converts free-form address strings to coordinates using
//! `GET /v2/local/search/address.json`. The provider's ranking is taken
//! as-is: the first document wins.

use async_trait::async_trait;
use domain::Coordinate;
use reqwest::Client;
use secrecy::SecretString;
use serde::Deserialize;
use tracing::{debug, instrument, warn};

use crate::config::KakaoConfig;
use crate::error::KakaoError;
use crate::http::{build_client, send_json};

/// Trait for geocoding clients
#[async_trait]
pub trait GeocodingClient: Send + Sync {
    /// Convert a free-form address to the top-ranked coordinate
    async fn geocode(&self, address: &str) -> Result<Coordinate, KakaoError>;
}

/// Kakao Local geocoding client
#[derive(Debug)]
pub struct KakaoGeocodingClient {
    client: Client,
    config: KakaoConfig,
}

impl KakaoGeocodingClient {
    /// Create a new geocoding client
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

    /// Pick the first document of a search response
    fn first_coordinate(
        response: AddressSearchResponse,
        address: &str,
    ) -> Result<Coordinate, KakaoError> {
        let doc = response
            .documents
            .into_iter()
            .next()
            .ok_or_else(|| KakaoError::AddressNotFound(address.to_string()))?;

        let longitude: f64 = doc
            .x
            .trim()
            .parse()
            .map_err(|_| KakaoError::ParseError(format!("Invalid longitude: {}", doc.x)))?;
        let latitude: f64 = doc
            .y
            .trim()
            .parse()
            .map_err(|_| KakaoError::ParseError(format!("Invalid latitude: {}", doc.y)))?;

        Ok(Coordinate::new(latitude, longitude))
    }
}

#[async_trait]
impl GeocodingClient for KakaoGeocodingClient {
    #[instrument(skip(self))]
    async fn geocode(&self, address: &str) -> Result<Coordinate, KakaoError> {
        let address = address.trim();
        if address.is_empty() {
            return Err(KakaoError::AddressNotFound(
                "Address must not be empty".to_string(),
            ));
        }

        let url = format!("{}/v2/local/search/address.json", self.config.local_base_url);
        debug!(%address, "Geocoding address");

        let request = self.client.get(&url).query(&[("query", address)]);
        let response: AddressSearchResponse = send_json(request, self.config.timeout_secs).await?;

        let coordinate = Self::first_coordinate(response, address)?;
        if !coordinate.is_valid() {
            warn!(%address, %coordinate, "Provider returned an out-of-range coordinate");
        }
        debug!(%address, %coordinate, "Geocoded address");
        Ok(coordinate)
    }
}

// --- Raw API response types for deserialization ---

#[derive(Debug, Deserialize)]
struct AddressSearchResponse {
    #[serde(default)]
    documents: Vec<AddressDocument>,
}

/// Coordinates come back as strings
#[derive(Debug, Deserialize)]
struct AddressDocument {
    x: String,
    y: String,
}
