//! Review service
//!
//! Handles review creation, editing, deletion, and like toggling.

use tracing::{info, instrument};

use visita_core::entities::Review;
use visita_core::error::DomainError;
use visita_core::events::{DomainEvent, ReviewAddedEvent};
use visita_core::value_objects::Snowflake;

use crate::dto::{
    CreateReviewRequest, LikeResponse, RatingResponse, ReviewResponse, UpdateReviewRequest,
};
use crate::dto::responses::ReviewWithRatingResponse;

use super::context::ServiceContext;
use super::error::{ServiceError, ServiceResult};

/// Validate review content against the domain rules
///
/// Returns the trimmed comment on success. Length is counted in
/// characters, not bytes, so multi-byte scripts get the full budget.
fn validate_content(rating: i16, comment: &str, max_chars: usize) -> Result<String, DomainError> {
    if !Review::rating_in_range(rating) {
        return Err(DomainError::RatingOutOfRange(rating));
    }

    let trimmed = comment.trim();
    if trimmed.is_empty() {
        return Err(DomainError::EmptyComment);
    }
    if trimmed.chars().count() > max_chars {
        return Err(DomainError::CommentTooLong { max: max_chars });
    }

    Ok(trimmed.to_string())
}

/// Review service
pub struct ReviewService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> ReviewService<'a> {
    /// Create a new ReviewService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Create a review for a place
    ///
    /// One review per (user, place); a second attempt surfaces as a
    /// conflict. The place's average rating is recomputed in the same
    /// transaction as the insert.
    #[instrument(skip(self, request))]
    pub async fn create_review(
        &self,
        user_id: Snowflake,
        place_id: Snowflake,
        request: CreateReviewRequest,
    ) -> ServiceResult<ReviewWithRatingResponse> {
        let comment = validate_content(
            request.rating,
            &request.comment,
            self.ctx.review_config().max_comment_chars,
        )?;

        let place = self
            .ctx
            .place_repo()
            .find_by_id(place_id)
            .await?
            .filter(|p| p.active)
            .ok_or_else(|| ServiceError::not_found("Place", place_id.to_string()))?;

        // Pre-check for a friendlier conflict; the unique constraint on
        // (user_id, place_id) still catches concurrent inserts.
        if self
            .ctx
            .review_repo()
            .find_by_user_and_place(user_id, place_id)
            .await?
            .is_some()
        {
            return Err(DomainError::DuplicateReview.into());
        }

        let review = Review::new(
            self.ctx.generate_id(),
            place.id,
            user_id,
            request.rating,
            comment,
        );

        let summary = self.ctx.review_repo().create(&review).await?;

        info!(
            review_id = %review.id,
            place_id = %place.id,
            user_id = %user_id,
            rating = review.rating,
            "Review created"
        );

        // Best-effort: the review is committed, a lost event is acceptable
        let event = DomainEvent::ReviewAdded(ReviewAddedEvent::new(
            review.id,
            place.id,
            user_id,
            review.rating,
        ));
        self.ctx.publisher().publish_domain_event(&event).await.ok();

        Ok(ReviewWithRatingResponse {
            review: ReviewResponse::from(&review),
            place_rating: RatingResponse::from(summary),
        })
    }

    /// Update the caller's review
    ///
    /// Someone else's review is reported as not found, not forbidden;
    /// review IDs are not probeable for ownership.
    #[instrument(skip(self, request))]
    pub async fn update_review(
        &self,
        user_id: Snowflake,
        review_id: Snowflake,
        request: UpdateReviewRequest,
    ) -> ServiceResult<ReviewWithRatingResponse> {
        let comment = validate_content(
            request.rating,
            &request.comment,
            self.ctx.review_config().max_comment_chars,
        )?;

        let mut review = self
            .ctx
            .review_repo()
            .find_by_id(review_id)
            .await?
            .filter(|r| r.is_author(user_id))
            .ok_or_else(|| ServiceError::not_found("Review", review_id.to_string()))?;

        review.set_content(request.rating, comment);

        let summary = self.ctx.review_repo().update(&review).await?;

        info!(review_id = %review.id, user_id = %user_id, "Review updated");

        Ok(ReviewWithRatingResponse {
            review: ReviewResponse::from(&review),
            place_rating: RatingResponse::from(summary),
        })
    }

    /// Delete the caller's review
    #[instrument(skip(self))]
    pub async fn delete_review(
        &self,
        user_id: Snowflake,
        review_id: Snowflake,
    ) -> ServiceResult<RatingResponse> {
        let review = self
            .ctx
            .review_repo()
            .find_by_id(review_id)
            .await?
            .filter(|r| r.is_author(user_id))
            .ok_or_else(|| ServiceError::not_found("Review", review_id.to_string()))?;

        let summary = self
            .ctx
            .review_repo()
            .delete(review.id, review.place_id)
            .await?;

        info!(review_id = %review.id, user_id = %user_id, "Review deleted");

        Ok(RatingResponse::from(summary))
    }

    /// Toggle the caller's like on a review
    #[instrument(skip(self))]
    pub async fn toggle_like(
        &self,
        user_id: Snowflake,
        review_id: Snowflake,
    ) -> ServiceResult<LikeResponse> {
        let outcome = self.ctx.review_repo().toggle_like(review_id, user_id).await?;

        info!(
            review_id = %review_id,
            user_id = %user_id,
            action = outcome.action.as_str(),
            total_likes = outcome.total_likes,
            "Review like toggled"
        );

        Ok(LikeResponse {
            action: outcome.action.as_str().to_string(),
            total_likes: outcome.total_likes,
        })
    }
}
