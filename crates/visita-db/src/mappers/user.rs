//! User entity <-> model mapper

use visita_core::entities::User;
use visita_core::value_objects::Snowflake;

use crate::models::UserModel;

/// Convert UserModel to User entity
impl From<UserModel> for User {
    fn from(model: UserModel) -> Self {
        User {
            id: Snowflake::new(model.id),
            username: model.username,
            xp: model.xp,
            created_at: model.created_at,
        }
    }
}
