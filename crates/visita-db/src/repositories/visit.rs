//! PostgreSQL implementation of VisitRepository

use async_trait::async_trait;
use chrono::{DateTime, NaiveDate, Utc};
use sqlx::PgPool;
use tracing::instrument;

use visita_core::entities::Visit;
use visita_core::traits::{RepoResult, VisitOutcome, VisitRepository};
use visita_core::value_objects::Snowflake;

use crate::models::VisitModel;

use super::error::{map_db_error, user_not_found};

/// PostgreSQL implementation of VisitRepository
#[derive(Clone)]
pub struct PgVisitRepository {
    pool: PgPool,
}

impl PgVisitRepository {
    /// Create a new PgVisitRepository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl VisitRepository for PgVisitRepository {
    #[instrument(skip(self))]
    async fn record(
        &self,
        visit: &Visit,
        first_visit_xp: i32,
        repeat_visit_xp: i32,
    ) -> RepoResult<VisitOutcome> {
        let mut tx = self.pool.begin().await.map_err(map_db_error)?;

        let prior_visits = sqlx::query_scalar::<_, i64>(
            r#"
            SELECT COUNT(*) FROM visits WHERE user_id = $1 AND tourist_place_id = $2
            "#,
        )
        .bind(visit.user_id.into_inner())
        .bind(visit.place_id.into_inner())
        .fetch_one(&mut *tx)
        .await
        .map_err(map_db_error)?;

        let first_ever = prior_visits == 0;

        // The unique constraint on (user_id, tourist_place_id, visit_date)
        // serializes concurrent scans; the loser takes the idempotent path.
        // RETURNING hands back the stored timestamp so responses match the
        // row's precision on both paths.
        let inserted_at = sqlx::query_scalar::<_, DateTime<Utc>>(
            r#"
            INSERT INTO visits (user_id, tourist_place_id, visit_date, status, visited_at, distance_m)
            VALUES ($1, $2, $3, $4, $5, $6)
            ON CONFLICT (user_id, tourist_place_id, visit_date) DO NOTHING
            RETURNING visited_at
            "#,
        )
        .bind(visit.user_id.into_inner())
        .bind(visit.place_id.into_inner())
        .bind(visit.visit_date)
        .bind(visit.status.as_str())
        .bind(visit.visited_at)
        .bind(visit.distance_m)
        .fetch_optional(&mut *tx)
        .await
        .map_err(map_db_error)?;

        let visited_at = match inserted_at {
            Some(visited_at) => visited_at,
            None => {
                // Same-day repeat: read the original row back, credit nothing
                let existing = sqlx::query_as::<_, VisitModel>(
                    r#"
                    SELECT user_id, tourist_place_id, visit_date, status, visited_at, distance_m
                    FROM visits
                    WHERE user_id = $1 AND tourist_place_id = $2 AND visit_date = $3
                    "#,
                )
                .bind(visit.user_id.into_inner())
                .bind(visit.place_id.into_inner())
                .bind(visit.visit_date)
                .fetch_one(&mut *tx)
                .await
                .map_err(map_db_error)?;

                tx.commit().await.map_err(map_db_error)?;

                return Ok(VisitOutcome {
                    visit: Visit::from(existing),
                    newly_recorded: false,
                    first_ever: false,
                    xp_awarded: 0,
                });
            }
        };

        let xp_awarded = if first_ever {
            first_visit_xp
        } else {
            repeat_visit_xp
        };

        let updated = sqlx::query(
            r#"
            UPDATE users SET xp = xp + $2 WHERE id = $1
            "#,
        )
        .bind(visit.user_id.into_inner())
        .bind(xp_awarded)
        .execute(&mut *tx)
        .await
        .map_err(map_db_error)?;

        if updated.rows_affected() == 0 {
            // Dropping the transaction rolls the insert back
            return Err(user_not_found(visit.user_id));
        }

        tx.commit().await.map_err(map_db_error)?;

        Ok(VisitOutcome {
            visit: Visit {
                visited_at,
                ..visit.clone()
            },
            newly_recorded: true,
            first_ever,
            xp_awarded,
        })
    }

    #[instrument(skip(self))]
    async fn find(
        &self,
        user_id: Snowflake,
        place_id: Snowflake,
        visit_date: NaiveDate,
    ) -> RepoResult<Option<Visit>> {
        let result = sqlx::query_as::<_, VisitModel>(
            r#"
            SELECT user_id, tourist_place_id, visit_date, status, visited_at, distance_m
            FROM visits
            WHERE user_id = $1 AND tourist_place_id = $2 AND visit_date = $3
            "#,
        )
        .bind(user_id.into_inner())
        .bind(place_id.into_inner())
        .bind(visit_date)
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result.map(Visit::from))
    }

    #[instrument(skip(self))]
    async fn has_visited(&self, user_id: Snowflake, place_id: Snowflake) -> RepoResult<bool> {
        let exists = sqlx::query_scalar::<_, bool>(
            r#"
            SELECT EXISTS(SELECT 1 FROM visits WHERE user_id = $1 AND tourist_place_id = $2)
            "#,
        )
        .bind(user_id.into_inner())
        .bind(place_id.into_inner())
        .fetch_one(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(exists)
    }

    #[instrument(skip(self))]
    async fn count_places_visited(&self, user_id: Snowflake) -> RepoResult<i64> {
        let count = sqlx::query_scalar::<_, i64>(
            r#"
            SELECT COUNT(DISTINCT tourist_place_id) FROM visits WHERE user_id = $1
            "#,
        )
        .bind(user_id.into_inner())
        .fetch_one(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(count)
    }
}
