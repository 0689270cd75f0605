//! Geographic coordinate value type.
//!
//! Coordinates are plain latitude/longitude pairs in degrees. No projection
//! is applied anywhere in this crate; distance comparisons work on the raw
//! degree values.

use serde::{Deserialize, Serialize};

/// A latitude/longitude pair in degrees.
///
/// Conceptually `lat ∈ [-90, 90]` and `lng ∈ [-180, 180]`, but nothing in
/// this crate enforces the range; callers own validity.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LatLng {
    pub lat: f64,
    pub lng: f64,
}

impl LatLng {
    pub const fn new(lat: f64, lng: f64) -> Self {
        Self { lat, lng }
    }

    /// Planar Euclidean distance to another point, on raw degree values.
    ///
    /// Deliberately not geodesic: the border-following feature only needs
    /// a consistent ordering of candidate vertices, and the raw-degree
    /// metric matches the reference behavior exactly.
    pub fn planar_distance(self, other: Self) -> f64 {
        (self.lat - other.lat).hypot(self.lng - other.lng)
    }
}

impl From<(f64, f64)> for LatLng {
    /// Converts from a `(lat, lng)` tuple.
    fn from((lat, lng): (f64, f64)) -> Self {
        Self { lat, lng }
    }
}

impl From<LatLng> for (f64, f64) {
    fn from(p: LatLng) -> Self {
        (p.lat, p.lng)
    }
}
