//! Check-in handlers
//!
//! Endpoint for QR-based place check-ins.

use axum::{extract::State, Json};
use visita_service::{CheckInRequest, CheckInResponse, CheckinService};

use crate::extractors::{AuthUser, ValidatedJson};
use crate::response::ApiResult;
use crate::state::AppState;

/// Validate a scanned QR code and record the visit
///
/// POST /checkin
pub async fn check_in(
    State(state): State<AppState>,
    auth: AuthUser,
    ValidatedJson(request): ValidatedJson<CheckInRequest>,
) -> ApiResult<Json<CheckInResponse>> {
    let service = CheckinService::new(state.service_context());
    let response = service.check_in(auth.user_id, request).await?;
    Ok(Json(response))
}
