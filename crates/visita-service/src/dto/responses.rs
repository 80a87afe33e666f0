//! Response DTOs for API endpoints
//!
//! All response DTOs implement `Serialize` for JSON output.
//! Snowflake IDs are serialized as strings for JavaScript compatibility.

use chrono::{DateTime, NaiveDate, Utc};
use serde::Serialize;

// ============================================================================
// Common Response Types
// ============================================================================

/// Generic API response wrapper
#[derive(Debug, Serialize)]
pub struct ApiResponse<T> {
    pub data: T,
}

impl<T> ApiResponse<T> {
    pub fn new(data: T) -> Self {
        Self { data }
    }
}

/// Paginated response with cursor-based pagination
#[derive(Debug, Serialize)]
pub struct PaginatedResponse<T> {
    pub data: Vec<T>,
    pub pagination: PaginationMeta,
}

impl<T> PaginatedResponse<T> {
    pub fn new(data: Vec<T>, before: Option<String>, has_more: bool, limit: i32) -> Self {
        Self {
            data,
            pagination: PaginationMeta {
                before,
                has_more,
                limit,
            },
        }
    }
}

/// Pagination metadata
#[derive(Debug, Serialize)]
pub struct PaginationMeta {
    /// Cursor for fetching the next (older) page
    #[serde(skip_serializing_if = "Option::is_none")]
    pub before: Option<String>,
    /// Whether more results exist
    pub has_more: bool,
    /// Page size limit used
    pub limit: i32,
}

// ============================================================================
// Place Responses
// ============================================================================

/// Tourist place response
#[derive(Debug, Clone, Serialize)]
pub struct PlaceResponse {
    pub id: String,
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub latitude: f64,
    pub longitude: f64,
    /// Average of all review ratings, rounded to one decimal; 0.0 when unreviewed
    pub average_rating: f64,
    pub created_at: DateTime<Utc>,
}

/// Rating aggregate after a review mutation
#[derive(Debug, Clone, Serialize)]
pub struct RatingResponse {
    pub average_rating: f64,
    pub review_count: i64,
}

// ============================================================================
// Check-in Responses
// ============================================================================

/// Result of a QR check-in
#[derive(Debug, Clone, Serialize)]
pub struct CheckInResponse {
    pub place_id: String,
    pub place_name: String,
    pub visit_date: NaiveDate,
    /// When the visit was recorded; on a repeat scan this is the
    /// original visit's timestamp, not the current request's
    pub visited_at: DateTime<Utc>,
    /// True when this request recorded a new visit row
    pub visited: bool,
    /// True when the user had already checked in on this calendar day
    pub already_checked_in: bool,
    /// True when this was the user's first visit to this place ever
    pub first_visit: bool,
    pub xp_awarded: i32,
    /// Distance from the place at scan time, meters (absent when the
    /// client sent no coordinates)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub distance_m: Option<f64>,
}

// ============================================================================
// Review Responses
// ============================================================================

/// Review response
#[derive(Debug, Clone, Serialize)]
pub struct ReviewResponse {
    pub id: String,
    pub place_id: String,
    pub user_id: String,
    pub rating: i16,
    pub comment: String,
    pub total_likes: i32,
    /// Whether the requesting user has liked this review
    pub liked_by_me: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Review response paired with the place's recomputed rating
#[derive(Debug, Clone, Serialize)]
pub struct ReviewWithRatingResponse {
    #[serde(flatten)]
    pub review: ReviewResponse,
    pub place_rating: RatingResponse,
}

/// Result of a like toggle
#[derive(Debug, Clone, Serialize)]
pub struct LikeResponse {
    /// "liked" or "unliked"
    pub action: String,
    pub total_likes: i32,
}

// ============================================================================
// User Responses
// ============================================================================

/// Current authenticated user response
#[derive(Debug, Clone, Serialize)]
pub struct CurrentUserResponse {
    pub id: String,
    pub username: String,
    pub xp: i32,
    pub places_visited: i64,
    pub created_at: DateTime<Utc>,
}

// ============================================================================
// Health Responses
// ============================================================================

/// Basic health check response
#[derive(Debug, Clone, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub timestamp: DateTime<Utc>,
}

impl HealthResponse {
    pub fn healthy() -> Self {
        Self {
            status: "healthy".to_string(),
            timestamp: Utc::now(),
        }
    }
}

/// Readiness check response
#[derive(Debug, Clone, Serialize)]
pub struct ReadinessResponse {
    pub status: String,
    pub timestamp: DateTime<Utc>,
    pub checks: HealthChecks,
}

/// Health check status for each service
#[derive(Debug, Clone, Serialize)]
pub struct HealthChecks {
    pub database: String,
    pub redis: String,
}

impl ReadinessResponse {
    pub fn ready(database_healthy: bool, redis_healthy: bool) -> Self {
        let all_healthy = database_healthy && redis_healthy;
        Self {
            status: if all_healthy { "ready" } else { "not_ready" }.to_string(),
            timestamp: Utc::now(),
            checks: HealthChecks {
                database: if database_healthy { "healthy" } else { "unhealthy" }.to_string(),
                redis: if redis_healthy { "healthy" } else { "unhealthy" }.to_string(),
            },
        }
    }
}
