//! Service context - dependency container for services
//!
//! Holds all repositories, configuration, and other dependencies needed by services.

use std::sync::Arc;

use visita_common::auth::JwtService;
use visita_common::{CheckinConfig, ReviewConfig};
use visita_core::traits::{PlaceRepository, ReviewRepository, UserRepository, VisitRepository};
use visita_core::SnowflakeGenerator;
use visita_db::PgPool;
use visita_notify::{Publisher, SharedRedisPool};

/// Service context containing all dependencies
///
/// This is the main dependency container that gets passed to all services.
/// It provides access to:
/// - Database repositories
/// - Check-in and review rule configuration
/// - JWT service for authentication
/// - Snowflake generator for ID generation
/// - Redis pub/sub for notification events
#[derive(Clone)]
pub struct ServiceContext {
    // Database pool
    pool: PgPool,

    // Redis pool
    redis_pool: SharedRedisPool,

    // Repositories
    place_repo: Arc<dyn PlaceRepository>,
    visit_repo: Arc<dyn VisitRepository>,
    review_repo: Arc<dyn ReviewRepository>,
    user_repo: Arc<dyn UserRepository>,

    // Business rules
    checkin_config: CheckinConfig,
    review_config: ReviewConfig,

    // Pub/Sub
    publisher: Publisher,

    // Services
    jwt_service: Arc<JwtService>,
    snowflake_generator: Arc<SnowflakeGenerator>,
}

impl ServiceContext {
    /// Create a new service context with all dependencies
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        pool: PgPool,
        redis_pool: SharedRedisPool,
        place_repo: Arc<dyn PlaceRepository>,
        visit_repo: Arc<dyn VisitRepository>,
        review_repo: Arc<dyn ReviewRepository>,
        user_repo: Arc<dyn UserRepository>,
        checkin_config: CheckinConfig,
        review_config: ReviewConfig,
        jwt_service: Arc<JwtService>,
        snowflake_generator: Arc<SnowflakeGenerator>,
    ) -> Self {
        // Clone the inner RedisPool from the Arc
        let publisher = Publisher::new((*redis_pool).clone());

        Self {
            pool,
            redis_pool,
            place_repo,
            visit_repo,
            review_repo,
            user_repo,
            checkin_config,
            review_config,
            publisher,
            jwt_service,
            snowflake_generator,
        }
    }

    // === Database Pool ===

    /// Get the PostgreSQL connection pool
    pub fn pool(&self) -> &PgPool {
        &self.pool
    }

    /// Get the Redis connection pool
    pub fn redis_pool(&self) -> &SharedRedisPool {
        &self.redis_pool
    }

    // === Repositories ===

    /// Get the place repository
    pub fn place_repo(&self) -> &dyn PlaceRepository {
        self.place_repo.as_ref()
    }

    /// Get the visit repository
    pub fn visit_repo(&self) -> &dyn VisitRepository {
        self.visit_repo.as_ref()
    }

    /// Get the review repository
    pub fn review_repo(&self) -> &dyn ReviewRepository {
        self.review_repo.as_ref()
    }

    /// Get the user repository
    pub fn user_repo(&self) -> &dyn UserRepository {
        self.user_repo.as_ref()
    }

    // === Business rules ===

    /// Get the check-in rules
    pub fn checkin_config(&self) -> &CheckinConfig {
        &self.checkin_config
    }

    /// Get the review rules
    pub fn review_config(&self) -> &ReviewConfig {
        &self.review_config
    }

    // === Pub/Sub ===

    /// Get the Redis pub/sub publisher
    pub fn publisher(&self) -> &Publisher {
        &self.publisher
    }

    // === Services ===

    /// Get the JWT service
    pub fn jwt_service(&self) -> &JwtService {
        self.jwt_service.as_ref()
    }

    /// Get the snowflake ID generator
    pub fn snowflake_generator(&self) -> &SnowflakeGenerator {
        self.snowflake_generator.as_ref()
    }

    /// Generate a new Snowflake ID
    pub fn generate_id(&self) -> visita_core::Snowflake {
        self.snowflake_generator.generate()
    }
}

impl std::fmt::Debug for ServiceContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ServiceContext")
            .field("pool", &"PgPool")
            .field("redis_pool", &"SharedRedisPool")
            .field("repositories", &"...")
            .field("checkin_config", &self.checkin_config)
            .field("review_config", &self.review_config)
            .finish()
    }
}

/// Builder for creating ServiceContext with custom configuration
pub struct ServiceContextBuilder {
    pool: Option<PgPool>,
    redis_pool: Option<SharedRedisPool>,
    place_repo: Option<Arc<dyn PlaceRepository>>,
    visit_repo: Option<Arc<dyn VisitRepository>>,
    review_repo: Option<Arc<dyn ReviewRepository>>,
    user_repo: Option<Arc<dyn UserRepository>>,
    checkin_config: Option<CheckinConfig>,
    review_config: Option<ReviewConfig>,
    jwt_service: Option<Arc<JwtService>>,
    snowflake_generator: Option<Arc<SnowflakeGenerator>>,
}

impl ServiceContextBuilder {
    pub fn new() -> Self {
        Self {
            pool: None,
            redis_pool: None,
            place_repo: None,
            visit_repo: None,
            review_repo: None,
            user_repo: None,
            checkin_config: None,
            review_config: None,
            jwt_service: None,
            snowflake_generator: None,
        }
    }

    pub fn pool(mut self, pool: PgPool) -> Self {
        self.pool = Some(pool);
        self
    }

    pub fn redis_pool(mut self, redis_pool: SharedRedisPool) -> Self {
        self.redis_pool = Some(redis_pool);
        self
    }

    pub fn place_repo(mut self, repo: Arc<dyn PlaceRepository>) -> Self {
        self.place_repo = Some(repo);
        self
    }

    pub fn visit_repo(mut self, repo: Arc<dyn VisitRepository>) -> Self {
        self.visit_repo = Some(repo);
        self
    }

    pub fn review_repo(mut self, repo: Arc<dyn ReviewRepository>) -> Self {
        self.review_repo = Some(repo);
        self
    }

    pub fn user_repo(mut self, repo: Arc<dyn UserRepository>) -> Self {
        self.user_repo = Some(repo);
        self
    }

    pub fn checkin_config(mut self, config: CheckinConfig) -> Self {
        self.checkin_config = Some(config);
        self
    }

    pub fn review_config(mut self, config: ReviewConfig) -> Self {
        self.review_config = Some(config);
        self
    }

    pub fn jwt_service(mut self, service: Arc<JwtService>) -> Self {
        self.jwt_service = Some(service);
        self
    }

    pub fn snowflake_generator(mut self, generator: Arc<SnowflakeGenerator>) -> Self {
        self.snowflake_generator = Some(generator);
        self
    }

    /// Build the ServiceContext
    ///
    /// # Errors
    /// Returns `ServiceError::Validation` if any required dependency is missing
    pub fn build(self) -> super::error::ServiceResult<ServiceContext> {
        Ok(ServiceContext::new(
            self.pool
                .ok_or_else(|| super::error::ServiceError::validation("pool is required"))?,
            self.redis_pool
                .ok_or_else(|| super::error::ServiceError::validation("redis_pool is required"))?,
            self.place_repo
                .ok_or_else(|| super::error::ServiceError::validation("place_repo is required"))?,
            self.visit_repo
                .ok_or_else(|| super::error::ServiceError::validation("visit_repo is required"))?,
            self.review_repo
                .ok_or_else(|| super::error::ServiceError::validation("review_repo is required"))?,
            self.user_repo
                .ok_or_else(|| super::error::ServiceError::validation("user_repo is required"))?,
            self.checkin_config.ok_or_else(|| {
                super::error::ServiceError::validation("checkin_config is required")
            })?,
            self.review_config.ok_or_else(|| {
                super::error::ServiceError::validation("review_config is required")
            })?,
            self.jwt_service
                .ok_or_else(|| super::error::ServiceError::validation("jwt_service is required"))?,
            self.snowflake_generator.ok_or_else(|| {
                super::error::ServiceError::validation("snowflake_generator is required")
            })?,
        ))
    }
}

impl Default for ServiceContextBuilder {
    fn default() -> Self {
        Self::new()
    }
}
