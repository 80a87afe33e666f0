//! Review entity <-> model mapper

use visita_core::entities::Review;
use visita_core::value_objects::Snowflake;

use crate::models::ReviewModel;

/// Convert ReviewModel to Review entity
impl From<ReviewModel> for Review {
    fn from(model: ReviewModel) -> Self {
        Review {
            id: Snowflake::new(model.id),
            place_id: Snowflake::new(model.tourist_place_id),
            user_id: Snowflake::new(model.user_id),
            rating: model.rating,
            comment: model.comment,
            total_likes: model.total_likes,
            created_at: model.created_at,
            updated_at: model.updated_at,
        }
    }
}
