//! PostgreSQL implementation of ReviewRepository
//!
//! Review mutations and the derived state they touch (the place's
//! average rating, the review's like counter) always move together in
//! one transaction.

use async_trait::async_trait;
use sqlx::{PgPool, Postgres, Transaction};
use tracing::instrument;

use visita_core::entities::{RatingSummary, Review};
use visita_core::error::DomainError;
use visita_core::traits::{LikeAction, LikeOutcome, RepoResult, ReviewQuery, ReviewRepository};
use visita_core::value_objects::Snowflake;

use crate::models::{RatingSummaryModel, ReviewModel};

use super::error::{map_db_error, map_unique_violation, review_not_found};

/// PostgreSQL implementation of ReviewRepository
#[derive(Clone)]
pub struct PgReviewRepository {
    pool: PgPool,
}

impl PgReviewRepository {
    /// Create a new PgReviewRepository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Recompute the place's average rating from its reviews
    ///
    /// Runs inside the caller's transaction so the aggregate can never
    /// drift from the review rows. AVG over zero rows is NULL, coalesced
    /// to 0 per the "no reviews" rule.
    async fn recompute_rating(
        tx: &mut Transaction<'_, Postgres>,
        place_id: Snowflake,
    ) -> RepoResult<RatingSummary> {
        let result = sqlx::query_as::<_, RatingSummaryModel>(
            r#"
            UPDATE tourist_places
            SET average_rating = COALESCE(
                    (SELECT AVG(rating)::float8 FROM reviews WHERE tourist_place_id = $1), 0),
                updated_at = NOW()
            WHERE id = $1
            RETURNING average_rating,
                      (SELECT COUNT(*) FROM reviews WHERE tourist_place_id = $1) AS review_count
            "#,
        )
        .bind(place_id.into_inner())
        .fetch_optional(&mut **tx)
        .await
        .map_err(map_db_error)?;

        result
            .map(RatingSummary::from)
            .ok_or(DomainError::PlaceNotFound(place_id))
    }
}

#[async_trait]
impl ReviewRepository for PgReviewRepository {
    #[instrument(skip(self))]
    async fn find_by_id(&self, id: Snowflake) -> RepoResult<Option<Review>> {
        let result = sqlx::query_as::<_, ReviewModel>(
            r#"
            SELECT id, tourist_place_id, user_id, rating, comment, total_likes,
                   created_at, updated_at
            FROM reviews
            WHERE id = $1
            "#,
        )
        .bind(id.into_inner())
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result.map(Review::from))
    }

    #[instrument(skip(self))]
    async fn find_by_user_and_place(
        &self,
        user_id: Snowflake,
        place_id: Snowflake,
    ) -> RepoResult<Option<Review>> {
        let result = sqlx::query_as::<_, ReviewModel>(
            r#"
            SELECT id, tourist_place_id, user_id, rating, comment, total_likes,
                   created_at, updated_at
            FROM reviews
            WHERE user_id = $1 AND tourist_place_id = $2
            "#,
        )
        .bind(user_id.into_inner())
        .bind(place_id.into_inner())
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result.map(Review::from))
    }

    #[instrument(skip(self))]
    async fn find_by_place(
        &self,
        place_id: Snowflake,
        query: ReviewQuery,
    ) -> RepoResult<Vec<Review>> {
        let limit = query.limit.clamp(1, 100);

        let results = sqlx::query_as::<_, ReviewModel>(
            r#"
            SELECT id, tourist_place_id, user_id, rating, comment, total_likes,
                   created_at, updated_at
            FROM reviews
            WHERE tourist_place_id = $1 AND ($2::bigint IS NULL OR id < $2)
            ORDER BY id DESC
            LIMIT $3
            "#,
        )
        .bind(place_id.into_inner())
        .bind(query.before.map(Snowflake::into_inner))
        .bind(limit)
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(results.into_iter().map(Review::from).collect())
    }

    #[instrument(skip(self))]
    async fn create(&self, review: &Review) -> RepoResult<RatingSummary> {
        let mut tx = self.pool.begin().await.map_err(map_db_error)?;

        sqlx::query(
            r#"
            INSERT INTO reviews (id, tourist_place_id, user_id, rating, comment, total_likes,
                                 created_at, updated_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
            "#,
        )
        .bind(review.id.into_inner())
        .bind(review.place_id.into_inner())
        .bind(review.user_id.into_inner())
        .bind(review.rating)
        .bind(&review.comment)
        .bind(review.total_likes)
        .bind(review.created_at)
        .bind(review.updated_at)
        .execute(&mut *tx)
        .await
        .map_err(|e| map_unique_violation(e, || DomainError::DuplicateReview))?;

        let summary = Self::recompute_rating(&mut tx, review.place_id).await?;

        tx.commit().await.map_err(map_db_error)?;

        Ok(summary)
    }

    #[instrument(skip(self))]
    async fn update(&self, review: &Review) -> RepoResult<RatingSummary> {
        let mut tx = self.pool.begin().await.map_err(map_db_error)?;

        let result = sqlx::query(
            r#"
            UPDATE reviews
            SET rating = $2, comment = $3, updated_at = NOW()
            WHERE id = $1
            "#,
        )
        .bind(review.id.into_inner())
        .bind(review.rating)
        .bind(&review.comment)
        .execute(&mut *tx)
        .await
        .map_err(map_db_error)?;

        if result.rows_affected() == 0 {
            return Err(review_not_found(review.id));
        }

        let summary = Self::recompute_rating(&mut tx, review.place_id).await?;

        tx.commit().await.map_err(map_db_error)?;

        Ok(summary)
    }

    #[instrument(skip(self))]
    async fn delete(&self, id: Snowflake, place_id: Snowflake) -> RepoResult<RatingSummary> {
        let mut tx = self.pool.begin().await.map_err(map_db_error)?;

        // Likes go first: the FK from review_likes would block the delete
        sqlx::query(
            r#"
            DELETE FROM review_likes WHERE review_id = $1
            "#,
        )
        .bind(id.into_inner())
        .execute(&mut *tx)
        .await
        .map_err(map_db_error)?;

        let result = sqlx::query(
            r#"
            DELETE FROM reviews WHERE id = $1
            "#,
        )
        .bind(id.into_inner())
        .execute(&mut *tx)
        .await
        .map_err(map_db_error)?;

        if result.rows_affected() == 0 {
            return Err(review_not_found(id));
        }

        let summary = Self::recompute_rating(&mut tx, place_id).await?;

        tx.commit().await.map_err(map_db_error)?;

        Ok(summary)
    }

    #[instrument(skip(self))]
    async fn toggle_like(
        &self,
        review_id: Snowflake,
        user_id: Snowflake,
    ) -> RepoResult<LikeOutcome> {
        let mut tx = self.pool.begin().await.map_err(map_db_error)?;

        // Lock the review row so concurrent toggles on the same review
        // serialize instead of racing the counter
        let locked = sqlx::query_scalar::<_, i64>(
            r#"
            SELECT id FROM reviews WHERE id = $1 FOR UPDATE
            "#,
        )
        .bind(review_id.into_inner())
        .fetch_optional(&mut *tx)
        .await
        .map_err(map_db_error)?;

        if locked.is_none() {
            return Err(review_not_found(review_id));
        }

        let removed = sqlx::query(
            r#"
            DELETE FROM review_likes WHERE review_id = $1 AND user_id = $2
            "#,
        )
        .bind(review_id.into_inner())
        .bind(user_id.into_inner())
        .execute(&mut *tx)
        .await
        .map_err(map_db_error)?;

        let (action, total_likes) = if removed.rows_affected() > 0 {
            // GREATEST floors the counter at zero against historical drift
            let total = sqlx::query_scalar::<_, i32>(
                r#"
                UPDATE reviews
                SET total_likes = GREATEST(total_likes - 1, 0)
                WHERE id = $1
                RETURNING total_likes
                "#,
            )
            .bind(review_id.into_inner())
            .fetch_one(&mut *tx)
            .await
            .map_err(map_db_error)?;

            (LikeAction::Unliked, total)
        } else {
            sqlx::query(
                r#"
                INSERT INTO review_likes (review_id, user_id, created_at)
                VALUES ($1, $2, NOW())
                "#,
            )
            .bind(review_id.into_inner())
            .bind(user_id.into_inner())
            .execute(&mut *tx)
            .await
            .map_err(map_db_error)?;

            let total = sqlx::query_scalar::<_, i32>(
                r#"
                UPDATE reviews
                SET total_likes = total_likes + 1
                WHERE id = $1
                RETURNING total_likes
                "#,
            )
            .bind(review_id.into_inner())
            .fetch_one(&mut *tx)
            .await
            .map_err(map_db_error)?;

            (LikeAction::Liked, total)
        };

        tx.commit().await.map_err(map_db_error)?;

        Ok(LikeOutcome {
            action,
            total_likes,
        })
    }

    #[instrument(skip(self))]
    async fn liked_review_ids(
        &self,
        user_id: Snowflake,
        review_ids: &[Snowflake],
    ) -> RepoResult<Vec<Snowflake>> {
        if review_ids.is_empty() {
            return Ok(Vec::new());
        }

        let ids: Vec<i64> = review_ids.iter().copied().map(Snowflake::into_inner).collect();

        let results = sqlx::query_scalar::<_, i64>(
            r#"
            SELECT review_id FROM review_likes WHERE user_id = $1 AND review_id = ANY($2)
            "#,
        )
        .bind(user_id.into_inner())
        .bind(&ids)
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(results.into_iter().map(Snowflake::new).collect())
    }
}
