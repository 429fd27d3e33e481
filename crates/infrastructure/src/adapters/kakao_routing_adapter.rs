//! Routing adapter - Implements RoutingPort using integration_kakao

use application::error::ApplicationError;
use application::ports::RoutingPort;
use async_trait::async_trait;
use domain::{Coordinate, RouteResult};
use integration_kakao::{
    DirectionsClient, DrivingRoute, KakaoConfig, KakaoDirectionsClient, KakaoError,
};
use secrecy::SecretString;
use tracing::{debug, instrument, warn};

/// Adapter for driving directions via Kakao Mobility
#[derive(Debug)]
pub struct KakaoRoutingAdapter {
    client: KakaoDirectionsClient,
}

impl KakaoRoutingAdapter {
    /// Wrap an existing client
    #[must_use]
    pub const fn new(client: KakaoDirectionsClient) -> Self {
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
        let client = KakaoDirectionsClient::new(config, api_key).map_err(Self::map_error)?;
        Ok(Self::new(client))
    }

    /// Convert integration errors to application errors
    fn map_error(err: KakaoError) -> ApplicationError {
        match err {
            KakaoError::NoRoute(reason) => ApplicationError::EmptyRoute(reason),
            KakaoError::AddressNotFound(address) => ApplicationError::NotFound(address),
            KakaoError::ConfigurationError(e) => ApplicationError::Configuration(e),
            other => ApplicationError::RequestFailed(other.to_string()),
        }
    }

    /// Convert a provider route into the domain route
    fn convert_route(route: &DrivingRoute) -> Result<RouteResult, ApplicationError> {
        let points = route.coordinates();
        if points.is_empty() {
            return Err(ApplicationError::EmptyRoute(
                "route has no guide points".to_string(),
            ));
        }
        Ok(RouteResult::new(points, route.total_distance_m))
    }
}

#[async_trait]
impl RoutingPort for KakaoRoutingAdapter {
    #[instrument(skip(self), fields(origin = %origin, destination = %destination))]
    async fn route(
        &self,
        origin: &Coordinate,
        destination: &Coordinate,
    ) -> Result<RouteResult, ApplicationError> {
        let driving = self
            .client
            .directions(origin, destination)
            .await
            .map_err(|e| {
                warn!(error = %e, "Directions request failed");
                Self::map_error(e)
            })?;

        let route = Self::convert_route(&driving)?;
        debug!(
            points = route.points.len(),
            distance_km = route.distance_km(),
            "Route converted"
        );
        Ok(route)
    }
}
