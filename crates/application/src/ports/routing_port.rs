//! Routing port
//!
//! Fetches a driving route between two coordinates.

use async_trait::async_trait;
use domain::{Coordinate, RouteResult};
#[cfg(test)]
use mockall::automock;

use crate::error::ApplicationError;

/// Port for driving directions
#[cfg_attr(test, automock)]
#[async_trait]
pub trait RoutingPort: Send + Sync {
    /// Get the guide points and total distance from `origin` to `destination`
    ///
    /// Returns `ApplicationError::EmptyRoute` when the provider finds no route
    /// and `ApplicationError::RequestFailed` on transport or HTTP failures.
    async fn route(
        &self,
        origin: &Coordinate,
        destination: &Coordinate,
    ) -> Result<RouteResult, ApplicationError>;
}
