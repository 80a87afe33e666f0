//! Place database models

use chrono::{DateTime, Utc};
use sqlx::FromRow;

/// Database model for tourist_places table
#[derive(Debug, Clone, FromRow)]
pub struct PlaceModel {
    pub id: i64,
    pub name: String,
    pub description: Option<String>,
    pub latitude: f64,
    pub longitude: f64,
    pub average_rating: f64,
    pub active: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Aggregated rating row produced by the recompute queries
#[derive(Debug, Clone, FromRow)]
pub struct RatingSummaryModel {
    pub average_rating: f64,
    pub review_count: i64,
}
