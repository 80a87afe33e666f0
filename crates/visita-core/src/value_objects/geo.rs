//! Geographic coordinates and great-circle distance
//!
//! Distances use the haversine formula on a spherical Earth model.
//! Accurate to ~0.5% which is far below the geofence radii we care about.

use serde::{Deserialize, Serialize};

/// Mean Earth radius in kilometers (spherical model)
pub const EARTH_RADIUS_KM: f64 = 6371.0;

/// A WGS84 point in decimal degrees
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinates {
    pub latitude: f64,
    pub longitude: f64,
}

impl Coordinates {
    /// Create coordinates from decimal degrees
    #[inline]
    pub const fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
        }
    }

    /// Great-circle distance to another point, in kilometers
    #[inline]
    pub fn distance_km(&self, other: &Coordinates) -> f64 {
        haversine_km(*self, *other)
    }

    /// Great-circle distance to another point, in meters
    #[inline]
    pub fn distance_m(&self, other: &Coordinates) -> f64 {
        haversine_m(*self, *other)
    }
}

/// Haversine distance between two points, in kilometers
pub fn haversine_km(a: Coordinates, b: Coordinates) -> f64 {
    let lat_a = a.latitude.to_radians();
    let lat_b = b.latitude.to_radians();
    let d_lat = (b.latitude - a.latitude).to_radians();
    let d_lon = (b.longitude - a.longitude).to_radians();

    let h = (d_lat / 2.0).sin().powi(2)
        + lat_a.cos() * lat_b.cos() * (d_lon / 2.0).sin().powi(2);

    2.0 * EARTH_RADIUS_KM * h.sqrt().asin()
}

/// Haversine distance between two points, in meters
#[inline]
pub fn haversine_m(a: Coordinates, b: Coordinates) -> f64 {
    haversine_km(a, b) * 1000.0
}
