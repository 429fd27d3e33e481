//! Directions data models
//!
//! Typed representation of the parts of a Kakao Mobility directions
//! response that halfway uses.

use domain::Coordinate;
use serde::{Deserialize, Serialize};

/// A guide point (turn, junction, start, end) along a route
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GuidePoint {
    /// Longitude as returned by the provider (`x`)
    pub x: f64,
    /// Latitude as returned by the provider (`y`)
    pub y: f64,
    /// Name of the road or place, if provided
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

impl GuidePoint {
    /// Convert to a (latitude, longitude) coordinate
    #[must_use]
    pub const fn coordinate(&self) -> Coordinate {
        Coordinate::new(self.y, self.x)
    }
}

/// A driving route: guide points of every section in order, plus road distance
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DrivingRoute {
    /// Guide points across all sections, in order of appearance
    pub guides: Vec<GuidePoint>,
    /// Sum of every road's `distance` across all sections, in meters
    pub total_distance_m: f64,
}

impl DrivingRoute {
    /// Guide points as coordinates
    #[must_use]
    pub fn coordinates(&self) -> Vec<Coordinate> {
        self.guides.iter().map(GuidePoint::coordinate).collect()
    }
}
