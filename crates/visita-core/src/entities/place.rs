//! Place entity - a tourist place that can be visited and reviewed

use chrono::{DateTime, Utc};

use crate::value_objects::{Coordinates, Snowflake};

/// Tourist place entity
///
/// `average_rating` is derived state: it is recomputed from the place's
/// reviews inside the same transaction as any review mutation and must
/// never be written from client input.
#[derive(Debug, Clone, PartialEq)]
pub struct Place {
    pub id: Snowflake,
    pub name: String,
    pub description: Option<String>,
    pub latitude: f64,
    pub longitude: f64,
    pub average_rating: f64,
    pub active: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Place {
    /// Create a new active Place with required fields
    pub fn new(id: Snowflake, name: String, latitude: f64, longitude: f64) -> Self {
        let now = Utc::now();
        Self {
            id,
            name,
            description: None,
            latitude,
            longitude,
            average_rating: 0.0,
            active: true,
            created_at: now,
            updated_at: now,
        }
    }

    /// Location of the place as a coordinate pair
    #[inline]
    pub fn coordinates(&self) -> Coordinates {
        Coordinates::new(self.latitude, self.longitude)
    }

    /// Distance from a point to this place, in meters
    pub fn distance_m_from(&self, point: Coordinates) -> f64 {
        self.coordinates().distance_m(&point)
    }
}

/// Aggregated rating state of a place after a review mutation
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RatingSummary {
    pub average_rating: f64,
    pub review_count: i64,
}

impl RatingSummary {
    pub fn new(average_rating: f64, review_count: i64) -> Self {
        Self {
            average_rating,
            review_count,
        }
    }

    /// Summary of a place with no reviews
    pub fn empty() -> Self {
        Self {
            average_rating: 0.0,
            review_count: 0,
        }
    }
}
