//! User service
//!
//! Queries over the backend-owned gamification state of a user.

use tracing::instrument;

use visita_core::value_objects::Snowflake;

use crate::dto::{CurrentUserResponse, UserWithStats};

use super::context::ServiceContext;
use super::error::{ServiceError, ServiceResult};

/// User service
pub struct UserService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> UserService<'a> {
    /// Create a new UserService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Get the authenticated user's profile with visit stats
    #[instrument(skip(self))]
    pub async fn get_current_user(&self, user_id: Snowflake) -> ServiceResult<CurrentUserResponse> {
        let user = self
            .ctx
            .user_repo()
            .find_by_id(user_id)
            .await?
            .ok_or_else(|| ServiceError::not_found("User", user_id.to_string()))?;

        let places_visited = self.ctx.visit_repo().count_places_visited(user_id).await?;

        Ok(CurrentUserResponse::from(UserWithStats {
            user,
            places_visited,
        }))
    }
}
