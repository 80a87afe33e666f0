//! PostgreSQL implementation of PlaceRepository

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::instrument;

use visita_core::entities::{Place, RatingSummary};
use visita_core::traits::{PlaceRepository, RepoResult};
use visita_core::value_objects::Snowflake;

use crate::models::{PlaceModel, RatingSummaryModel};

use super::error::map_db_error;

/// PostgreSQL implementation of PlaceRepository
#[derive(Clone)]
pub struct PgPlaceRepository {
    pool: PgPool,
}

impl PgPlaceRepository {
    /// Create a new PgPlaceRepository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl PlaceRepository for PgPlaceRepository {
    #[instrument(skip(self))]
    async fn find_by_id(&self, id: Snowflake) -> RepoResult<Option<Place>> {
        let result = sqlx::query_as::<_, PlaceModel>(
            r#"
            SELECT id, name, description, latitude, longitude, average_rating, active,
                   created_at, updated_at
            FROM tourist_places
            WHERE id = $1
            "#,
        )
        .bind(id.into_inner())
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result.map(Place::from))
    }

    #[instrument(skip(self))]
    async fn find_active(&self, limit: i64, before: Option<Snowflake>) -> RepoResult<Vec<Place>> {
        let limit = limit.clamp(1, 100);

        let results = sqlx::query_as::<_, PlaceModel>(
            r#"
            SELECT id, name, description, latitude, longitude, average_rating, active,
                   created_at, updated_at
            FROM tourist_places
            WHERE active = TRUE AND ($1::bigint IS NULL OR id < $1)
            ORDER BY id DESC
            LIMIT $2
            "#,
        )
        .bind(before.map(Snowflake::into_inner))
        .bind(limit)
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(results.into_iter().map(Place::from).collect())
    }

    #[instrument(skip(self))]
    async fn find_by_qr_token(&self, token: &str) -> RepoResult<Option<Place>> {
        // Inactive tokens and inactive places resolve the same as unknown
        // tokens: no row.
        let result = sqlx::query_as::<_, PlaceModel>(
            r#"
            SELECT p.id, p.name, p.description, p.latitude, p.longitude, p.average_rating,
                   p.active, p.created_at, p.updated_at
            FROM qr_tokens t
            JOIN tourist_places p ON p.id = t.tourist_place_id
            WHERE t.token = $1 AND t.active = TRUE AND p.active = TRUE
            "#,
        )
        .bind(token)
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result.map(Place::from))
    }

    #[instrument(skip(self))]
    async fn rating_summary(&self, place_id: Snowflake) -> RepoResult<RatingSummary> {
        let result = sqlx::query_as::<_, RatingSummaryModel>(
            r#"
            SELECT COALESCE(AVG(rating), 0)::float8 AS average_rating,
                   COUNT(*) AS review_count
            FROM reviews
            WHERE tourist_place_id = $1
            "#,
        )
        .bind(place_id.into_inner())
        .fetch_one(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(RatingSummary::from(result))
    }
}
