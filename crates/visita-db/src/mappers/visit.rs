//! Visit entity <-> model mapper

use visita_core::entities::{Visit, VisitStatus};
use visita_core::value_objects::Snowflake;

use crate::models::VisitModel;

/// Convert VisitModel to Visit entity
impl From<VisitModel> for Visit {
    fn from(model: VisitModel) -> Self {
        Visit {
            user_id: Snowflake::new(model.user_id),
            place_id: Snowflake::new(model.tourist_place_id),
            visit_date: model.visit_date,
            status: VisitStatus::parse(&model.status),
            visited_at: model.visited_at,
            distance_m: model.distance_m,
        }
    }
}
