//! Place handlers
//!
//! Endpoints for browsing tourist places and their reviews.

use axum::{
    extract::{Path, State},
    Json,
};
use visita_service::{PaginatedResponse, PlaceResponse, PlaceService, ReviewResponse};

use crate::extractors::{OptionalAuthUser, Pagination, PlaceIdPath};
use crate::response::ApiResult;
use crate::state::AppState;

/// List active places
///
/// GET /places
pub async fn list_places(
    State(state): State<AppState>,
    pagination: Pagination,
) -> ApiResult<Json<PaginatedResponse<PlaceResponse>>> {
    let service = PlaceService::new(state.service_context());
    let response = service
        .list_places(i64::from(pagination.limit), pagination.before)
        .await?;
    Ok(Json(response))
}

/// Get a single place
///
/// GET /places/{place_id}
pub async fn get_place(
    State(state): State<AppState>,
    Path(path): Path<PlaceIdPath>,
) -> ApiResult<Json<PlaceResponse>> {
    let place_id = path.place_id()?;

    let service = PlaceService::new(state.service_context());
    let response = service.get_place(place_id).await?;
    Ok(Json(response))
}

/// List reviews for a place
///
/// GET /places/{place_id}/reviews
pub async fn get_place_reviews(
    State(state): State<AppState>,
    auth: OptionalAuthUser,
    Path(path): Path<PlaceIdPath>,
    pagination: Pagination,
) -> ApiResult<Json<PaginatedResponse<ReviewResponse>>> {
    let place_id = path.place_id()?;

    let service = PlaceService::new(state.service_context());
    let response = service
        .get_reviews(
            place_id,
            auth.user_id(),
            i64::from(pagination.limit),
            pagination.before,
        )
        .await?;
    Ok(Json(response))
}
