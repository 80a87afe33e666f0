//! Place service
//!
//! Read-side queries over tourist places and their reviews.

use tracing::instrument;

use visita_core::traits::ReviewQuery;
use visita_core::value_objects::Snowflake;

use crate::dto::{PaginatedResponse, PlaceResponse, ReviewResponse, ReviewWithMeta};

use super::context::ServiceContext;
use super::error::{ServiceError, ServiceResult};

/// Place service
pub struct PlaceService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> PlaceService<'a> {
    /// Create a new PlaceService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// List active places, newest first
    #[instrument(skip(self))]
    pub async fn list_places(
        &self,
        limit: i64,
        before: Option<Snowflake>,
    ) -> ServiceResult<PaginatedResponse<PlaceResponse>> {
        let limit = limit.clamp(1, 100);
        let places = self.ctx.place_repo().find_active(limit, before).await?;

        let has_more = places.len() as i64 == limit;
        let before = places.last().map(|p| p.id.to_string());
        let data: Vec<PlaceResponse> = places.iter().map(PlaceResponse::from).collect();

        #[allow(clippy::cast_possible_truncation)]
        Ok(PaginatedResponse::new(data, before, has_more, limit as i32))
    }

    /// Get a single place by ID
    #[instrument(skip(self))]
    pub async fn get_place(&self, place_id: Snowflake) -> ServiceResult<PlaceResponse> {
        let place = self
            .ctx
            .place_repo()
            .find_by_id(place_id)
            .await?
            .filter(|p| p.active)
            .ok_or_else(|| ServiceError::not_found("Place", place_id.to_string()))?;

        Ok(PlaceResponse::from(place))
    }

    /// List reviews for a place, newest first
    ///
    /// When a viewer is known, each review carries whether that viewer
    /// has liked it; anonymous viewers get `liked_by_me: false`.
    #[instrument(skip(self))]
    pub async fn get_reviews(
        &self,
        place_id: Snowflake,
        viewer: Option<Snowflake>,
        limit: i64,
        before: Option<Snowflake>,
    ) -> ServiceResult<PaginatedResponse<ReviewResponse>> {
        // 404 for unknown places rather than an empty page
        self.ctx
            .place_repo()
            .find_by_id(place_id)
            .await?
            .ok_or_else(|| ServiceError::not_found("Place", place_id.to_string()))?;

        let limit = limit.clamp(1, 100);
        let reviews = self
            .ctx
            .review_repo()
            .find_by_place(place_id, ReviewQuery { before, limit })
            .await?;

        let liked: Vec<Snowflake> = match viewer {
            Some(user_id) => {
                let ids: Vec<Snowflake> = reviews.iter().map(|r| r.id).collect();
                self.ctx.review_repo().liked_review_ids(user_id, &ids).await?
            }
            None => Vec::new(),
        };

        let has_more = reviews.len() as i64 == limit;
        let before = reviews.last().map(|r| r.id.to_string());
        let data: Vec<ReviewResponse> = reviews
            .into_iter()
            .map(|review| {
                let liked_by_me = liked.contains(&review.id);
                ReviewResponse::from(ReviewWithMeta {
                    review,
                    liked_by_me,
                })
            })
            .collect();

        #[allow(clippy::cast_possible_truncation)]
        Ok(PaginatedResponse::new(data, before, has_more, limit as i32))
    }
}
