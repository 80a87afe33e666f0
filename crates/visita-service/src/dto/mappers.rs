//! Entity to DTO mappers
//!
//! Implements `From` conversions from domain entities to response DTOs.

use visita_core::entities::{Place, RatingSummary, Review, User};

use super::responses::{
    CurrentUserResponse, PlaceResponse, RatingResponse, ReviewResponse,
};

/// Round an average rating to one decimal for presentation
///
/// The stored aggregate keeps full float precision; rounding happens
/// only at the serialization boundary.
#[must_use]
pub fn round_rating(average: f64) -> f64 {
    (average * 10.0).round() / 10.0
}

// ============================================================================
// Place Mappers
// ============================================================================

impl From<&Place> for PlaceResponse {
    fn from(place: &Place) -> Self {
        Self {
            id: place.id.to_string(),
            name: place.name.clone(),
            description: place.description.clone(),
            latitude: place.latitude,
            longitude: place.longitude,
            average_rating: round_rating(place.average_rating),
            created_at: place.created_at,
        }
    }
}

impl From<Place> for PlaceResponse {
    fn from(place: Place) -> Self {
        Self::from(&place)
    }
}

impl From<RatingSummary> for RatingResponse {
    fn from(summary: RatingSummary) -> Self {
        Self {
            average_rating: round_rating(summary.average_rating),
            review_count: summary.review_count,
        }
    }
}

// ============================================================================
// Review Mappers
// ============================================================================

/// Helper struct pairing a review with viewer-specific state
pub struct ReviewWithMeta {
    pub review: Review,
    pub liked_by_me: bool,
}

impl From<&Review> for ReviewResponse {
    fn from(review: &Review) -> Self {
        Self {
            id: review.id.to_string(),
            place_id: review.place_id.to_string(),
            user_id: review.user_id.to_string(),
            rating: review.rating,
            comment: review.comment.clone(),
            total_likes: review.total_likes,
            liked_by_me: false,
            created_at: review.created_at,
            updated_at: review.updated_at,
        }
    }
}

impl From<Review> for ReviewResponse {
    fn from(review: Review) -> Self {
        Self::from(&review)
    }
}

impl From<ReviewWithMeta> for ReviewResponse {
    fn from(meta: ReviewWithMeta) -> Self {
        let mut response = Self::from(&meta.review);
        response.liked_by_me = meta.liked_by_me;
        response
    }
}

// ============================================================================
// User Mappers
// ============================================================================

/// Helper struct for building CurrentUserResponse
pub struct UserWithStats {
    pub user: User,
    pub places_visited: i64,
}

impl From<UserWithStats> for CurrentUserResponse {
    fn from(stats: UserWithStats) -> Self {
        Self {
            id: stats.user.id.to_string(),
            username: stats.user.username.clone(),
            xp: stats.user.xp,
            places_visited: stats.places_visited,
            created_at: stats.user.created_at,
        }
    }
}
