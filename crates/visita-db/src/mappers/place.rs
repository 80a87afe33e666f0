//! Place entity <-> model mapper

use visita_core::entities::{Place, RatingSummary};
use visita_core::value_objects::Snowflake;

use crate::models::{PlaceModel, RatingSummaryModel};

/// Convert PlaceModel to Place entity
impl From<PlaceModel> for Place {
    fn from(model: PlaceModel) -> Self {
        Place {
            id: Snowflake::new(model.id),
            name: model.name,
            description: model.description,
            latitude: model.latitude,
            longitude: model.longitude,
            average_rating: model.average_rating,
            active: model.active,
            created_at: model.created_at,
            updated_at: model.updated_at,
        }
    }
}

impl From<RatingSummaryModel> for RatingSummary {
    fn from(model: RatingSummaryModel) -> Self {
        RatingSummary::new(model.average_rating, model.review_count)
    }
}
