//! Request DTOs for API endpoints
//!
//! All request DTOs implement `Deserialize` and `Validate` for input validation.

use serde::Deserialize;
use validator::Validate;

// ============================================================================
// Check-in Requests
// ============================================================================

/// QR check-in request
///
/// Coordinates are optional but paired: sending only one of the two is
/// rejected by the service. Without coordinates the geofence check is
/// skipped entirely.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CheckInRequest {
    #[validate(length(max = 512, message = "QR data must be at most 512 characters"))]
    pub qr_data: String,

    #[validate(range(min = -90.0, max = 90.0, message = "Latitude must be -90 to 90"))]
    pub latitude: Option<f64>,

    #[validate(range(min = -180.0, max = 180.0, message = "Longitude must be -180 to 180"))]
    pub longitude: Option<f64>,
}

// ============================================================================
// Review Requests
// ============================================================================

/// Create review request
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateReviewRequest {
    #[validate(range(min = 1, max = 5, message = "Rating must be between 1 and 5"))]
    pub rating: i16,

    #[validate(length(min = 1, max = 500, message = "Comment must be 1-500 characters"))]
    pub comment: String,
}

/// Update review request
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct UpdateReviewRequest {
    #[validate(range(min = 1, max = 5, message = "Rating must be between 1 and 5"))]
    pub rating: i16,

    #[validate(length(min = 1, max = 500, message = "Comment must be 1-500 characters"))]
    pub comment: String,
}
