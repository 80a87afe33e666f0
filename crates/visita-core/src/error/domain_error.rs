//! Domain errors - error types for the domain layer

use thiserror::Error;

use crate::value_objects::Snowflake;

/// Domain layer errors
#[derive(Debug, Error)]
pub enum DomainError {
    // =========================================================================
    // Not Found Errors
    // =========================================================================
    #[error("Place not found: {0}")]
    PlaceNotFound(Snowflake),

    #[error("Review not found: {0}")]
    ReviewNotFound(Snowflake),

    #[error("User not found: {0}")]
    UserNotFound(Snowflake),

    /// Unknown or inactive QR token. Deliberately indistinguishable from a
    /// token that never existed.
    #[error("Invalid QR code")]
    InvalidQrCode,

    // =========================================================================
    // Validation Errors
    // =========================================================================
    #[error("Validation error: {0}")]
    ValidationError(String),

    #[error("QR code must not be empty")]
    EmptyQrCode,

    #[error("Rating must be between 1 and 5, got {0}")]
    RatingOutOfRange(i16),

    #[error("Comment must not be empty")]
    EmptyComment,

    #[error("Comment too long: max {max} characters")]
    CommentTooLong { max: usize },

    #[error("Latitude and longitude must be provided together")]
    UnpairedCoordinates,

    // =========================================================================
    // Authorization Errors
    // =========================================================================
    #[error("Too far from place: {distance_m:.0}m away, limit is {max_m:.0}m")]
    LocationTooFar { distance_m: f64, max_m: f64 },

    // =========================================================================
    // Conflict Errors
    // =========================================================================
    #[error("User has already reviewed this place")]
    DuplicateReview,

    // =========================================================================
    // Infrastructure Errors (wrapped)
    // =========================================================================
    #[error("Database error: {0}")]
    DatabaseError(String),

    #[error("Cache error: {0}")]
    CacheError(String),

    #[error("Internal error: {0}")]
    InternalError(String),
}

impl DomainError {
    /// Get an error code string for API responses
    pub fn code(&self) -> &'static str {
        match self {
            // Not Found
            Self::PlaceNotFound(_) => "UNKNOWN_PLACE",
            Self::ReviewNotFound(_) => "UNKNOWN_REVIEW",
            Self::UserNotFound(_) => "UNKNOWN_USER",
            Self::InvalidQrCode => "INVALID_QR_CODE",

            // Validation
            Self::ValidationError(_) => "VALIDATION_ERROR",
            Self::EmptyQrCode => "EMPTY_QR_CODE",
            Self::RatingOutOfRange(_) => "RATING_OUT_OF_RANGE",
            Self::EmptyComment => "EMPTY_COMMENT",
            Self::CommentTooLong { .. } => "COMMENT_TOO_LONG",
            Self::UnpairedCoordinates => "UNPAIRED_COORDINATES",

            // Authorization
            Self::LocationTooFar { .. } => "LOCATION_TOO_FAR",

            // Conflict
            Self::DuplicateReview => "DUPLICATE_REVIEW",

            // Infrastructure
            Self::DatabaseError(_) => "DATABASE_ERROR",
            Self::CacheError(_) => "CACHE_ERROR",
            Self::InternalError(_) => "INTERNAL_ERROR",
        }
    }

    /// Check if this is a "not found" error
    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            Self::PlaceNotFound(_)
                | Self::ReviewNotFound(_)
                | Self::UserNotFound(_)
                | Self::InvalidQrCode
        )
    }

    /// Check if this is a validation error
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            Self::ValidationError(_)
                | Self::EmptyQrCode
                | Self::RatingOutOfRange(_)
                | Self::EmptyComment
                | Self::CommentTooLong { .. }
                | Self::UnpairedCoordinates
        )
    }

    /// Check if this is an authorization error
    pub fn is_forbidden(&self) -> bool {
        matches!(self, Self::LocationTooFar { .. })
    }

    /// Check if this is a conflict error
    pub fn is_conflict(&self) -> bool {
        matches!(self, Self::DuplicateReview)
    }
}
