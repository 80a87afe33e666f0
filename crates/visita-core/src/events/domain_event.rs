//! Domain events - events emitted when domain state changes
//!
//! Events are published best-effort after the owning transaction commits.
//! They feed the push-notification pipeline; a lost event never fails the
//! request that produced it.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::value_objects::Snowflake;

/// All possible domain events
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum DomainEvent {
    PlaceVisited(PlaceVisitedEvent),
    ReviewAdded(ReviewAddedEvent),
}

impl DomainEvent {
    /// Get the event type name
    pub fn event_type(&self) -> &'static str {
        match self {
            Self::PlaceVisited(_) => "PLACE_VISITED",
            Self::ReviewAdded(_) => "REVIEW_ADDED",
        }
    }

    /// Get the timestamp of the event
    pub fn timestamp(&self) -> DateTime<Utc> {
        match self {
            Self::PlaceVisited(e) => e.timestamp,
            Self::ReviewAdded(e) => e.timestamp,
        }
    }

    /// The user the event should be delivered to
    pub fn user_id(&self) -> Snowflake {
        match self {
            Self::PlaceVisited(e) => e.user_id,
            Self::ReviewAdded(e) => e.user_id,
        }
    }
}

/// Emitted on the first successful check-in of a day
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlaceVisitedEvent {
    pub user_id: Snowflake,
    pub place_id: Snowflake,
    pub place_name: String,
    pub xp_awarded: i32,
    pub first_visit: bool,
    pub timestamp: DateTime<Utc>,
}

impl PlaceVisitedEvent {
    pub fn new(
        user_id: Snowflake,
        place_id: Snowflake,
        place_name: String,
        xp_awarded: i32,
        first_visit: bool,
    ) -> Self {
        Self {
            user_id,
            place_id,
            place_name,
            xp_awarded,
            first_visit,
            timestamp: Utc::now(),
        }
    }
}

/// Emitted when a review is created
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReviewAddedEvent {
    pub review_id: Snowflake,
    pub place_id: Snowflake,
    pub user_id: Snowflake,
    pub rating: i16,
    pub timestamp: DateTime<Utc>,
}

impl ReviewAddedEvent {
    pub fn new(review_id: Snowflake, place_id: Snowflake, user_id: Snowflake, rating: i16) -> Self {
        Self {
            review_id,
            place_id,
            user_id,
            rating,
            timestamp: Utc::now(),
        }
    }
}
