//! Test fixtures and data generators
//!
//! Provides reusable test data for integration tests: seeded users,
//! places, and QR tokens, plus request/response mirror types.

use std::sync::atomic::{AtomicI64, Ordering};

use anyhow::Result;
use serde::{Deserialize, Serialize};
use sqlx::PgPool;
use visita_core::entities::{Place, User};
use visita_core::Snowflake;

/// Counter for unique test IDs (kept clear of repository-level test ranges)
static ID_COUNTER: AtomicI64 = AtomicI64::new(5_000_000);

/// Generate a unique test Snowflake ID
pub fn test_id() -> Snowflake {
    Snowflake::new(ID_COUNTER.fetch_add(1, Ordering::SeqCst))
}

// ============================================================================
// Seed helpers
// ============================================================================

/// Insert a test user and return it
pub async fn seed_user(pool: &PgPool) -> Result<User> {
    let id = test_id();
    let user = User::new(id, format!("visitor_{}", id.into_inner()));

    sqlx::query(
        r#"
        INSERT INTO users (id, username, xp, created_at)
        VALUES ($1, $2, $3, $4)
        "#,
    )
    .bind(user.id.into_inner())
    .bind(&user.username)
    .bind(user.xp)
    .bind(user.created_at)
    .execute(pool)
    .await?;

    Ok(user)
}

/// Insert a test place at the given coordinates and return it
pub async fn seed_place(pool: &PgPool, latitude: f64, longitude: f64) -> Result<Place> {
    let id = test_id();
    let place = Place::new(
        id,
        format!("Test Place {}", id.into_inner()),
        latitude,
        longitude,
    );

    sqlx::query(
        r#"
        INSERT INTO tourist_places (id, name, description, latitude, longitude, average_rating,
                                    active, created_at, updated_at)
        VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9)
        "#,
    )
    .bind(place.id.into_inner())
    .bind(&place.name)
    .bind(&place.description)
    .bind(place.latitude)
    .bind(place.longitude)
    .bind(place.average_rating)
    .bind(place.active)
    .bind(place.created_at)
    .bind(place.updated_at)
    .execute(pool)
    .await?;

    Ok(place)
}

/// Bind a QR token to a place
pub async fn seed_qr_token(pool: &PgPool, place_id: Snowflake) -> Result<String> {
    let token = format!("qr-test-{}", test_id().into_inner());

    sqlx::query(
        r#"
        INSERT INTO qr_tokens (token, tourist_place_id, active, created_at)
        VALUES ($1, $2, TRUE, NOW())
        "#,
    )
    .bind(&token)
    .bind(place_id.into_inner())
    .execute(pool)
    .await?;

    Ok(token)
}

/// Delete everything hanging off a test place, then the place itself
pub async fn cleanup_place(pool: &PgPool, place_id: Snowflake) -> Result<()> {
    sqlx::query(
        "DELETE FROM review_likes WHERE review_id IN \
         (SELECT id FROM reviews WHERE tourist_place_id = $1)",
    )
    .bind(place_id.into_inner())
    .execute(pool)
    .await?;
    sqlx::query("DELETE FROM reviews WHERE tourist_place_id = $1")
        .bind(place_id.into_inner())
        .execute(pool)
        .await?;
    sqlx::query("DELETE FROM visits WHERE tourist_place_id = $1")
        .bind(place_id.into_inner())
        .execute(pool)
        .await?;
    sqlx::query("DELETE FROM qr_tokens WHERE tourist_place_id = $1")
        .bind(place_id.into_inner())
        .execute(pool)
        .await?;
    sqlx::query("DELETE FROM tourist_places WHERE id = $1")
        .bind(place_id.into_inner())
        .execute(pool)
        .await?;
    Ok(())
}

/// Delete a test user
pub async fn cleanup_user(pool: &PgPool, user_id: Snowflake) -> Result<()> {
    sqlx::query("DELETE FROM users WHERE id = $1")
        .bind(user_id.into_inner())
        .execute(pool)
        .await?;
    Ok(())
}

// ============================================================================
// Request types
// ============================================================================

/// Check-in request
#[derive(Debug, Serialize)]
pub struct CheckInRequest {
    pub qr_data: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub latitude: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub longitude: Option<f64>,
}

impl CheckInRequest {
    pub fn at(qr_data: &str, latitude: f64, longitude: f64) -> Self {
        Self {
            qr_data: qr_data.to_string(),
            latitude: Some(latitude),
            longitude: Some(longitude),
        }
    }

    pub fn without_location(qr_data: &str) -> Self {
        Self {
            qr_data: qr_data.to_string(),
            latitude: None,
            longitude: None,
        }
    }
}

/// Review create/update request
#[derive(Debug, Serialize)]
pub struct ReviewRequest {
    pub rating: i16,
    pub comment: String,
}

impl ReviewRequest {
    pub fn new(rating: i16, comment: &str) -> Self {
        Self {
            rating,
            comment: comment.to_string(),
        }
    }
}

// ============================================================================
// Response types
// ============================================================================

/// Check-in response
#[derive(Debug, Deserialize)]
pub struct CheckInResult {
    pub place_id: String,
    pub place_name: String,
    pub visit_date: String,
    pub visited_at: String,
    pub visited: bool,
    pub already_checked_in: bool,
    pub first_visit: bool,
    pub xp_awarded: i32,
    pub distance_m: Option<f64>,
}

/// Place response
#[derive(Debug, Deserialize)]
pub struct PlaceResult {
    pub id: String,
    pub name: String,
    pub description: Option<String>,
    pub latitude: f64,
    pub longitude: f64,
    pub average_rating: f64,
    pub created_at: String,
}

/// Rating aggregate nested in review responses
#[derive(Debug, Deserialize)]
pub struct RatingResult {
    pub average_rating: f64,
    pub review_count: i64,
}

/// Review response (create/update responses flatten this with `place_rating`)
#[derive(Debug, Deserialize)]
pub struct ReviewResult {
    pub id: String,
    pub place_id: String,
    pub user_id: String,
    pub rating: i16,
    pub comment: String,
    pub total_likes: i32,
    pub liked_by_me: bool,
    pub created_at: String,
    pub updated_at: String,
    pub place_rating: Option<RatingResult>,
}

/// Like toggle response
#[derive(Debug, Deserialize)]
pub struct LikeResult {
    pub action: String,
    pub total_likes: i32,
}

/// Current user response
#[derive(Debug, Deserialize)]
pub struct CurrentUserResult {
    pub id: String,
    pub username: String,
    pub xp: i32,
    pub places_visited: i64,
    pub created_at: String,
}

/// Cursor-paginated list response
#[derive(Debug, Deserialize)]
pub struct PaginatedResult<T> {
    pub data: Vec<T>,
    pub pagination: PaginationMeta,
}

/// Pagination metadata
#[derive(Debug, Deserialize)]
pub struct PaginationMeta {
    pub before: Option<String>,
    pub has_more: bool,
    pub limit: i32,
}

/// Error response
#[derive(Debug, Deserialize)]
pub struct ErrorResponse {
    pub error: ErrorBody,
}

#[derive(Debug, Deserialize)]
pub struct ErrorBody {
    pub code: String,
    pub message: String,
}
