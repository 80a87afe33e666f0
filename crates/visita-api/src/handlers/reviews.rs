//! Review handlers
//!
//! Endpoints for creating, editing, deleting, and liking reviews.

use axum::{
    extract::{Path, State},
    Json,
};
use visita_service::{
    CreateReviewRequest, LikeResponse, ReviewService, ReviewWithRatingResponse,
    UpdateReviewRequest,
};

use crate::extractors::{AuthUser, PlaceIdPath, ReviewIdPath, ValidatedJson};
use crate::response::{ApiResult, Created, NoContent};
use crate::state::AppState;

/// Create a review for a place
///
/// POST /places/{place_id}/reviews
pub async fn create_review(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(path): Path<PlaceIdPath>,
    ValidatedJson(request): ValidatedJson<CreateReviewRequest>,
) -> ApiResult<Created<Json<ReviewWithRatingResponse>>> {
    let place_id = path.place_id()?;

    let service = ReviewService::new(state.service_context());
    let response = service.create_review(auth.user_id, place_id, request).await?;
    Ok(Created(Json(response)))
}

/// Update the caller's review
///
/// PATCH /reviews/{review_id}
pub async fn update_review(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(path): Path<ReviewIdPath>,
    ValidatedJson(request): ValidatedJson<UpdateReviewRequest>,
) -> ApiResult<Json<ReviewWithRatingResponse>> {
    let review_id = path.review_id()?;

    let service = ReviewService::new(state.service_context());
    let response = service.update_review(auth.user_id, review_id, request).await?;
    Ok(Json(response))
}

/// Delete the caller's review
///
/// DELETE /reviews/{review_id}
pub async fn delete_review(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(path): Path<ReviewIdPath>,
) -> ApiResult<NoContent> {
    let review_id = path.review_id()?;

    let service = ReviewService::new(state.service_context());
    service.delete_review(auth.user_id, review_id).await?;
    Ok(NoContent)
}

/// Toggle the caller's like on a review
///
/// POST /reviews/{review_id}/like
pub async fn toggle_like(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(path): Path<ReviewIdPath>,
) -> ApiResult<Json<LikeResponse>> {
    let review_id = path.review_id()?;

    let service = ReviewService::new(state.service_context());
    let response = service.toggle_like(auth.user_id, review_id).await?;
    Ok(Json(response))
}
