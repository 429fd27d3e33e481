//! Geocoding port
//!
//! Turns a free-text address into a coordinate.

use async_trait::async_trait;
use domain::{Address, Coordinate};
#[cfg(test)]
use mockall::automock;

use crate::error::ApplicationError;

/// Port for address geocoding
#[cfg_attr(test, automock)]
#[async_trait]
pub trait GeocodingPort: Send + Sync {
    /// Resolve an address to the provider's top-ranked coordinate
    ///
    /// Returns `ApplicationError::NotFound` when the provider has no match and
    /// `ApplicationError::RequestFailed` on transport or HTTP failures.
    async fn geocode(&self, address: &Address) -> Result<Coordinate, ApplicationError>;
}
