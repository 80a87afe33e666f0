//! Visit database model

use chrono::{DateTime, NaiveDate, Utc};
use sqlx::FromRow;

/// Database model for visits table
///
/// Primary key is (user_id, tourist_place_id, visit_date).
#[derive(Debug, Clone, FromRow)]
pub struct VisitModel {
    pub user_id: i64,
    pub tourist_place_id: i64,
    pub visit_date: NaiveDate,
    pub status: String,
    pub visited_at: DateTime<Utc>,
    pub distance_m: Option<f64>,
}
