//! Driving routes and midpoint selection
//!
//! A route is the ordered list of guide points the directions provider
//! returns, plus the summed road distance. Guide points are sparse
//! waypoints (turns, junctions), not the full road geometry.

use serde::{Deserialize, Serialize};

use crate::value_objects::Coordinate;

/// One guide point along a route
pub type RoutePoint = Coordinate;

/// Guide points of a single route in driving order, with total distance
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RouteResult {
    /// Guide points in the order the provider returned them
    pub points: Vec<RoutePoint>,
    /// Sum of every road segment distance, in meters
    pub total_distance_m: f64,
}

impl RouteResult {
    /// Create a route from its guide points and total distance
    #[must_use]
    pub fn new(points: Vec<RoutePoint>, total_distance_m: f64) -> Self {
        Self {
            points,
            total_distance_m,
        }
    }

    /// A route with no points and zero distance
    #[must_use]
    pub fn empty() -> Self {
        Self::default()
    }

    /// Whether the route has no guide points
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Total distance in kilometers
    #[must_use]
    pub fn distance_km(&self) -> f64 {
        self.total_distance_m / 1000.0
    }

    /// The guide point at the halfway index, see [`select_midpoint`]
    #[must_use]
    pub fn midpoint(&self) -> Option<RoutePoint> {
        select_midpoint(&self.points)
    }
}

/// Pick the guide point at index `len / 2`
///
/// For even lengths this is the first point of the second half. The result
/// is a waypoint approximation, not a distance-weighted midpoint.
#[must_use]
pub fn select_midpoint(points: &[RoutePoint]) -> Option<RoutePoint> {
    points.get(points.len() / 2).copied()
}
