//! Result of a successful midpoint search

use serde::{Deserialize, Serialize};

use crate::entities::route::{RoutePoint, RouteResult};
use crate::value_objects::{Address, Coordinate};

/// An address together with the coordinate it resolved to
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Endpoint {
    /// The address as entered or configured
    pub address: Address,
    /// Geocoded position
    pub coordinate: Coordinate,
}

impl Endpoint {
    /// Create a new endpoint
    #[must_use]
    pub const fn new(address: Address, coordinate: Coordinate) -> Self {
        Self {
            address,
            coordinate,
        }
    }
}

/// Everything a successful run produces
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MidpointReport {
    /// The fixed home address
    pub origin: Endpoint,
    /// The address the user asked about
    pub destination: Endpoint,
    /// Route between the two
    pub route: RouteResult,
    /// Guide point chosen as the midpoint
    pub midpoint: RoutePoint,
}

impl MidpointReport {
    /// Build a report, returning `None` when the route has no guide points
    #[must_use]
    pub fn from_route(origin: Endpoint, destination: Endpoint, route: RouteResult) -> Option<Self> {
        let midpoint = route.midpoint()?;
        Some(Self {
            origin,
            destination,
            route,
            midpoint,
        })
    }

    /// Map center: arithmetic mean of origin and destination
    #[must_use]
    pub fn center(&self) -> Coordinate {
        Coordinate::mean(&self.origin.coordinate, &self.destination.coordinate)
    }

    /// Total distance, e.g. `"163.42 km"`
    #[must_use]
    pub fn format_distance(&self) -> String {
        format!("{:.2} km", self.route.distance_km())
    }

    /// Midpoint position, e.g. `"lat 36.9921, lon 126.9270"`
    #[must_use]
    pub fn format_midpoint(&self) -> String {
        format!(
            "lat {:.4}, lon {:.4}",
            self.midpoint.latitude(),
            self.midpoint.longitude()
        )
    }
}
