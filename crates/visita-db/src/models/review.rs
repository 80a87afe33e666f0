//! Review database model

use chrono::{DateTime, Utc};
use sqlx::FromRow;

/// Database model for reviews table
#[derive(Debug, Clone, FromRow)]
pub struct ReviewModel {
    pub id: i64,
    pub tourist_place_id: i64,
    pub user_id: i64,
    pub rating: i16,
    pub comment: String,
    pub total_likes: i32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}
