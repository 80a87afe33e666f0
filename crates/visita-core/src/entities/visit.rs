//! Visit entity - a validated check-in at a place
//!
//! Visit identity is (user, place, calendar day). The calendar day is
//! computed by the service layer in the configured local offset; the
//! entity just carries it.

use chrono::{DateTime, NaiveDate, Utc};

use crate::value_objects::Snowflake;

/// Visit status
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VisitStatus {
    NotVisited,
    Visited,
}

impl VisitStatus {
    /// String form as stored in the database
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::NotVisited => "not_visited",
            Self::Visited => "visited",
        }
    }

    /// Parse from the stored string form, defaulting unknown values to NotVisited
    pub fn parse(s: &str) -> Self {
        match s {
            "visited" => Self::Visited,
            _ => Self::NotVisited,
        }
    }
}

/// Visit entity - one row per (user, place, day)
#[derive(Debug, Clone, PartialEq)]
pub struct Visit {
    pub user_id: Snowflake,
    pub place_id: Snowflake,
    pub visit_date: NaiveDate,
    pub status: VisitStatus,
    pub visited_at: DateTime<Utc>,
    /// Distance from the place at scan time, meters. None when the client
    /// sent no coordinates and the geofence check was skipped.
    pub distance_m: Option<f64>,
}

impl Visit {
    /// Create a new visited record for the given day
    pub fn new(
        user_id: Snowflake,
        place_id: Snowflake,
        visit_date: NaiveDate,
        distance_m: Option<f64>,
    ) -> Self {
        Self {
            user_id,
            place_id,
            visit_date,
            status: VisitStatus::Visited,
            visited_at: Utc::now(),
            distance_m,
        }
    }
}
