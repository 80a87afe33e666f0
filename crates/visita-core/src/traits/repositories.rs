//! Repository traits (ports) - define the interface for data access
//!
//! These traits follow the Repository pattern from Domain-Driven Design.
//! The domain layer defines what it needs, and the infrastructure layer
//! provides the implementation.
//!
//! Multi-step mutations (visit + XP, review + rating recompute, like
//! toggle) are single trait methods so an implementation can run them in
//! one transaction. The return types carry the full post-commit state;
//! callers never observe partial updates.

use async_trait::async_trait;
use chrono::NaiveDate;

use crate::entities::{Place, RatingSummary, Review, User, Visit};
use crate::error::DomainError;
use crate::value_objects::Snowflake;

/// Result type for repository operations
pub type RepoResult<T> = Result<T, DomainError>;

// ============================================================================
// Place Repository
// ============================================================================

#[async_trait]
pub trait PlaceRepository: Send + Sync {
    /// Find place by ID (active or not)
    async fn find_by_id(&self, id: Snowflake) -> RepoResult<Option<Place>>;

    /// List active places, newest first, with cursor pagination
    async fn find_active(&self, limit: i64, before: Option<Snowflake>) -> RepoResult<Vec<Place>>;

    /// Resolve an active QR token to its active place
    ///
    /// Returns None for unknown tokens, inactive tokens, and tokens whose
    /// place has been deactivated; callers cannot tell these apart.
    async fn find_by_qr_token(&self, token: &str) -> RepoResult<Option<Place>>;

    /// Current aggregated rating state of a place
    async fn rating_summary(&self, place_id: Snowflake) -> RepoResult<RatingSummary>;
}

// ============================================================================
// Visit Repository
// ============================================================================

/// Result of a visit-recording attempt
#[derive(Debug, Clone)]
pub struct VisitOutcome {
    pub visit: Visit,
    /// False when a visit for the same (user, place, day) already existed
    pub newly_recorded: bool,
    /// True when this is the user's first visit to the place on any day
    pub first_ever: bool,
    /// XP credited by this call; zero on the idempotent path
    pub xp_awarded: i32,
}

#[async_trait]
pub trait VisitRepository: Send + Sync {
    /// Record a visit and credit XP atomically
    ///
    /// Inserts the visit row and updates the user's XP balance in one
    /// transaction. When a row for the same (user, place, day) already
    /// exists the call degrades to reading it back: no insert, no XP.
    /// Which of the two XP amounts applies depends on whether the user
    /// has ever visited the place before, decided inside the transaction.
    async fn record(
        &self,
        visit: &Visit,
        first_visit_xp: i32,
        repeat_visit_xp: i32,
    ) -> RepoResult<VisitOutcome>;

    /// Find a visit by its identity
    async fn find(
        &self,
        user_id: Snowflake,
        place_id: Snowflake,
        visit_date: NaiveDate,
    ) -> RepoResult<Option<Visit>>;

    /// Check whether the user has ever visited the place
    async fn has_visited(&self, user_id: Snowflake, place_id: Snowflake) -> RepoResult<bool>;

    /// Count distinct places the user has visited
    async fn count_places_visited(&self, user_id: Snowflake) -> RepoResult<i64>;
}

// ============================================================================
// Review Repository
// ============================================================================

/// Pagination options for review queries
#[derive(Debug, Clone, Default)]
pub struct ReviewQuery {
    pub before: Option<Snowflake>,
    pub limit: i64,
}

/// Direction a like toggle resolved to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LikeAction {
    Liked,
    Unliked,
}

impl LikeAction {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Liked => "liked",
            Self::Unliked => "unliked",
        }
    }
}

/// Result of a like toggle, with the post-toggle counter value
#[derive(Debug, Clone, Copy)]
pub struct LikeOutcome {
    pub action: LikeAction,
    pub total_likes: i32,
}

#[async_trait]
pub trait ReviewRepository: Send + Sync {
    /// Find review by ID
    async fn find_by_id(&self, id: Snowflake) -> RepoResult<Option<Review>>;

    /// Find a user's review for a place, if any
    async fn find_by_user_and_place(
        &self,
        user_id: Snowflake,
        place_id: Snowflake,
    ) -> RepoResult<Option<Review>>;

    /// List reviews for a place, newest first, with cursor pagination
    async fn find_by_place(&self, place_id: Snowflake, query: ReviewQuery)
        -> RepoResult<Vec<Review>>;

    /// Insert a review and recompute the place's average rating
    ///
    /// Runs in one transaction; returns the updated rating summary.
    /// A concurrent duplicate surfaces as `DomainError::DuplicateReview`
    /// via the unique constraint on (user_id, place_id).
    async fn create(&self, review: &Review) -> RepoResult<RatingSummary>;

    /// Rewrite a review's rating/comment and recompute the average
    async fn update(&self, review: &Review) -> RepoResult<RatingSummary>;

    /// Delete a review (and its likes) and recompute the average
    async fn delete(&self, id: Snowflake, place_id: Snowflake) -> RepoResult<RatingSummary>;

    /// Toggle the user's like on a review
    ///
    /// Insert-or-delete of the like row plus the counter move happen in
    /// one transaction; the counter is floored at zero.
    async fn toggle_like(&self, review_id: Snowflake, user_id: Snowflake)
        -> RepoResult<LikeOutcome>;

    /// Of the given reviews, which has the user liked
    async fn liked_review_ids(
        &self,
        user_id: Snowflake,
        review_ids: &[Snowflake],
    ) -> RepoResult<Vec<Snowflake>>;
}

// ============================================================================
// User Repository
// ============================================================================

#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Find user by ID
    async fn find_by_id(&self, id: Snowflake) -> RepoResult<Option<User>>;

    /// Create a user record (first-login provisioning)
    async fn create(&self, user: &User) -> RepoResult<()>;
}
