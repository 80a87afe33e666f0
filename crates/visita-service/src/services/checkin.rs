//! Check-in service
//!
//! Handles QR scan validation: token resolution, geofencing, and
//! idempotent per-day visit recording with XP.

use chrono::{DateTime, FixedOffset, NaiveDate, Utc};
use tracing::{info, instrument, warn};

use visita_core::entities::Visit;
use visita_core::error::DomainError;
use visita_core::events::{DomainEvent, PlaceVisitedEvent};
use visita_core::value_objects::{Coordinates, Snowflake};

use crate::dto::{CheckInRequest, CheckInResponse};

use super::context::ServiceContext;
use super::error::ServiceResult;

/// Derive the local calendar day of a visit from a UTC instant
///
/// The deployment region's offset is configured once; an out-of-range
/// offset falls back to UTC rather than failing the check-in.
fn local_visit_date(now: DateTime<Utc>, utc_offset_minutes: i32) -> NaiveDate {
    match FixedOffset::east_opt(utc_offset_minutes * 60) {
        Some(offset) => now.with_timezone(&offset).date_naive(),
        None => now.date_naive(),
    }
}

/// Check-in service
pub struct CheckinService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> CheckinService<'a> {
    /// Create a new CheckinService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Validate a scanned QR code and record the visit
    ///
    /// The flow is: trim and resolve the token, geofence against the
    /// place when coordinates were sent, then record the visit. Visits
    /// are idempotent per calendar day; only a newly recorded visit
    /// awards XP and emits an event.
    #[instrument(skip(self, request))]
    pub async fn check_in(
        &self,
        user_id: Snowflake,
        request: CheckInRequest,
    ) -> ServiceResult<CheckInResponse> {
        let token = request.qr_data.trim();
        if token.is_empty() {
            return Err(DomainError::EmptyQrCode.into());
        }

        let point = match (request.latitude, request.longitude) {
            (Some(latitude), Some(longitude)) => Some(Coordinates::new(latitude, longitude)),
            (None, None) => None,
            _ => return Err(DomainError::UnpairedCoordinates.into()),
        };

        // Unknown, inactive, and retired tokens all resolve the same way
        let place = self
            .ctx
            .place_repo()
            .find_by_qr_token(token)
            .await?
            .ok_or(DomainError::InvalidQrCode)?;

        let config = self.ctx.checkin_config();

        let distance_m = match point {
            Some(point) => {
                let distance_m = place.distance_m_from(point);
                if distance_m > config.max_radius_m {
                    warn!(
                        place_id = %place.id,
                        user_id = %user_id,
                        distance_m = distance_m,
                        "Check-in rejected: outside geofence"
                    );
                    return Err(DomainError::LocationTooFar {
                        distance_m,
                        max_m: config.max_radius_m,
                    }
                    .into());
                }
                Some(distance_m)
            }
            None => None,
        };

        let visit_date = local_visit_date(Utc::now(), config.utc_offset_minutes);
        let visit = Visit::new(user_id, place.id, visit_date, distance_m);

        let outcome = self
            .ctx
            .visit_repo()
            .record(&visit, config.first_visit_xp, config.repeat_visit_xp)
            .await?;

        if outcome.newly_recorded {
            info!(
                place_id = %place.id,
                user_id = %user_id,
                first_visit = outcome.first_ever,
                xp_awarded = outcome.xp_awarded,
                "Visit recorded"
            );

            // Best-effort: the visit is committed, a lost event is acceptable
            let event = DomainEvent::PlaceVisited(PlaceVisitedEvent::new(
                user_id,
                place.id,
                place.name.clone(),
                outcome.xp_awarded,
                outcome.first_ever,
            ));
            self.ctx.publisher().publish_domain_event(&event).await.ok();
        }

        Ok(CheckInResponse {
            place_id: place.id.to_string(),
            place_name: place.name,
            visit_date: outcome.visit.visit_date,
            visited_at: outcome.visit.visited_at,
            visited: outcome.newly_recorded,
            already_checked_in: !outcome.newly_recorded,
            first_visit: outcome.first_ever,
            xp_awarded: outcome.xp_awarded,
            distance_m: outcome.visit.distance_m,
        })
    }
}
