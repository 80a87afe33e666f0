//! Route definitions
//!
//! All API routes organized by domain and mounted under /api/v1.

use axum::{
    routing::{delete, get, patch, post},
    Router,
};

use crate::handlers::{checkin, health, places, reviews, users};
use crate::state::AppState;

/// Create the main API router with all routes (excluding health for separate middleware handling)
pub fn create_router() -> Router<AppState> {
    Router::new()
        // API v1 endpoints
        .nest("/api/v1", api_v1_routes())
}

/// Health check routes (exported separately to bypass rate limiting)
pub fn health_routes() -> Router<AppState> {
    Router::new()
        .route("/health", get(health::health_check))
        .route("/health/ready", get(health::readiness_check))
}

/// API v1 routes
fn api_v1_routes() -> Router<AppState> {
    Router::new()
        .merge(checkin_routes())
        .merge(place_routes())
        .merge(review_routes())
        .merge(user_routes())
}

/// Check-in routes
fn checkin_routes() -> Router<AppState> {
    Router::new().route("/checkin", post(checkin::check_in))
}

/// Place routes
fn place_routes() -> Router<AppState> {
    Router::new()
        .route("/places", get(places::list_places))
        .route("/places/:place_id", get(places::get_place))
        .route("/places/:place_id/reviews", get(places::get_place_reviews))
        .route("/places/:place_id/reviews", post(reviews::create_review))
}

/// Review routes
fn review_routes() -> Router<AppState> {
    Router::new()
        .route("/reviews/:review_id", patch(reviews::update_review))
        .route("/reviews/:review_id", delete(reviews::delete_review))
        .route("/reviews/:review_id/like", post(reviews::toggle_like))
}

/// User routes
fn user_routes() -> Router<AppState> {
    Router::new().route("/users/@me", get(users::get_current_user))
}
