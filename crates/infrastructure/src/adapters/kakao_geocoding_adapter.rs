//! Geocoding adapter - Implements GeocodingPort using integration_kakao

use application::error::ApplicationError;
use application::ports::GeocodingPort;
use async_trait::async_trait;
use domain::{Address, Coordinate};
use integration_kakao::{GeocodingClient, KakaoConfig, KakaoError, KakaoGeocodingClient};
use secrecy::SecretString;
use tracing::{debug, instrument, warn};

/// Adapter for address geocoding via Kakao Local
#[derive(Debug)]
pub struct KakaoGeocodingAdapter {
    client: KakaoGeocodingClient,
}

impl KakaoGeocodingAdapter {
    /// Wrap an existing client
    #[must_use]
    pub const fn new(client: KakaoGeocodingClient) -> Self {
        Self { client }
    }

    /// Create from configuration
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client fails to initialize.
    pub fn from_config(
        config: &KakaoConfig,
        api_key: &SecretString,
    ) -> Result<Self, ApplicationError> {
        let client = KakaoGeocodingClient::new(config, api_key).map_err(Self::map_error)?;
        Ok(Self::new(client))
    }

    /// Convert integration errors to application errors
    fn map_error(err: KakaoError) -> ApplicationError {
        match err {
            KakaoError::AddressNotFound(address) => ApplicationError::NotFound(address),
            KakaoError::ConfigurationError(e) => ApplicationError::Configuration(e),
            other => ApplicationError::RequestFailed(other.to_string()),
        }
    }
}

#[async_trait]
impl GeocodingPort for KakaoGeocodingAdapter {
    #[instrument(skip(self), fields(address = %address))]
    async fn geocode(&self, address: &Address) -> Result<Coordinate, ApplicationError> {
        let coordinate = self
            .client
            .geocode(address.as_str())
            .await
            .map_err(|e| {
                warn!(error = %e, "Geocoding failed");
                Self::map_error(e)
            })?;

        debug!(%coordinate, "Address resolved");
        Ok(coordinate)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn map_error_not_found() {
        let err = KakaoError::AddressNotFound("nowhere".into());
        let app_err = KakaoGeocodingAdapter::map_error(err);
        assert!(matches!(app_err, ApplicationError::NotFound(ref a) if a == "nowhere"));
    }

    #[test]
    fn map_error_transport_is_request_failed() {
        for err in [
            KakaoError::ConnectionFailed("refused".into()),
            KakaoError::RequestFailed("HTTP 500".into()),
            KakaoError::ParseError("eof".into()),
            KakaoError::Unauthorized("HTTP 401".into()),
            KakaoError::RateLimitExceeded,
            KakaoError::Timeout { timeout_secs: 10 },
        ] {
            let app_err = KakaoGeocodingAdapter::map_error(err);
            assert!(matches!(app_err, ApplicationError::RequestFailed(_)));
        }
    }

    #[test]
    fn from_config_rejects_empty_key() {
        let result =
            KakaoGeocodingAdapter::from_config(&KakaoConfig::default(), &SecretString::from(""));
        assert!(matches!(result, Err(ApplicationError::Configuration(_))));
    }
}
