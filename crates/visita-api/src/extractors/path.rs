//! Path parameter extractors
//!
//! Type-safe extraction of Snowflake IDs from path parameters.

use serde::Deserialize;
use visita_core::Snowflake;

use crate::response::ApiError;

/// Path parameters with place_id
#[derive(Debug, Deserialize)]
pub struct PlaceIdPath {
    pub place_id: String,
}

impl PlaceIdPath {
    /// Parse place_id as Snowflake
    pub fn place_id(&self) -> Result<Snowflake, ApiError> {
        self.place_id
            .parse()
            .map_err(|_| ApiError::invalid_path("Invalid place_id format"))
    }
}

/// Path parameters with review_id
#[derive(Debug, Deserialize)]
pub struct ReviewIdPath {
    pub review_id: String,
}

impl ReviewIdPath {
    /// Parse review_id as Snowflake
    pub fn review_id(&self) -> Result<Snowflake, ApiError> {
        self.review_id
            .parse()
            .map_err(|_| ApiError::invalid_path("Invalid review_id format"))
    }
}
