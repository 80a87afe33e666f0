//! Server setup and initialization
//!
//! Provides the main application builder and server runner.

use std::net::SocketAddr;
use std::sync::Arc;

use axum::Router;
use tokio::net::TcpListener;
use tracing::info;
use visita_common::{AppConfig, AppError, JwtService};
use visita_core::SnowflakeGenerator;
use visita_db::{
    create_pool, PgPlaceRepository, PgReviewRepository, PgUserRepository, PgVisitRepository,
};
use visita_notify::{RedisPool, RedisPoolConfig};
use visita_service::ServiceContextBuilder;

use crate::middleware::{apply_middleware, apply_middleware_with_config};
use crate::routes::{create_router, health_routes};
use crate::state::AppState;

/// Build the complete Axum application with all routes and basic middleware
///
/// No rate limiting or restrictive CORS; suitable for local development
/// and integration tests. The production path in [`run`] applies the
/// configured middleware stack instead.
pub fn create_app(state: AppState) -> Router {
    let router = create_router().merge(health_routes());
    let router = apply_middleware(router);
    router.with_state(state)
}

/// Initialize all dependencies and create AppState
pub async fn create_app_state(config: AppConfig) -> Result<AppState, AppError> {
    // Create database pool
    info!("Connecting to PostgreSQL...");
    let db_config = visita_db::DatabaseConfig {
        url: config.database.url.clone(),
        max_connections: config.database.max_connections,
        min_connections: config.database.min_connections,
        ..Default::default()
    };
    let pool = create_pool(&db_config)
        .await
        .map_err(|e| AppError::Database(e.to_string()))?;
    info!("PostgreSQL connection established");

    // Create Redis pool
    info!("Connecting to Redis...");
    let redis_config = RedisPoolConfig::from(&config.redis);
    let redis_pool = RedisPool::new(redis_config).map_err(|e| AppError::Cache(e.to_string()))?;
    let shared_redis = Arc::new(redis_pool);
    info!("Redis connection established");

    // Create JWT service
    let jwt_service = Arc::new(JwtService::new(&config.jwt.secret, config.jwt.token_expiry));

    // Create Snowflake generator
    let snowflake_generator = Arc::new(SnowflakeGenerator::new(config.snowflake.worker_id));

    // Create repositories
    let place_repo = Arc::new(PgPlaceRepository::new(pool.clone()));
    let visit_repo = Arc::new(PgVisitRepository::new(pool.clone()));
    let review_repo = Arc::new(PgReviewRepository::new(pool.clone()));
    let user_repo = Arc::new(PgUserRepository::new(pool.clone()));

    // Build service context
    let service_context = ServiceContextBuilder::new()
        .pool(pool)
        .redis_pool(shared_redis)
        .place_repo(place_repo)
        .visit_repo(visit_repo)
        .review_repo(review_repo)
        .user_repo(user_repo)
        .checkin_config(config.checkin.clone())
        .review_config(config.review.clone())
        .jwt_service(jwt_service)
        .snowflake_generator(snowflake_generator)
        .build()
        .map_err(|e| AppError::Config(e.to_string()))?;

    Ok(AppState::new(service_context, config))
}

/// Run the HTTP server
pub async fn run_server(app: Router, addr: SocketAddr) -> Result<(), AppError> {
    info!("Starting HTTP server on {}", addr);

    let listener = TcpListener::bind(addr)
        .await
        .map_err(|e| AppError::Config(format!("Failed to bind to {}: {}", addr, e)))?;

    info!("Server listening on http://{}", addr);

    axum::serve(listener, app)
        .await
        .map_err(|e| AppError::Config(format!("Server error: {}", e)))?;

    Ok(())
}

/// Run the complete server with configuration
///
/// Applies the full middleware stack: rate limiting, configured CORS,
/// request IDs, tracing, and timeouts. Health routes stay outside the
/// rate limiter so orchestration probes never get throttled.
pub async fn run(config: AppConfig) -> Result<(), AppError> {
    let addr = SocketAddr::from(([0, 0, 0, 0], config.api.port));

    let rate_limit_config = config.rate_limit.clone();
    let cors_config = config.cors.clone();
    let is_production = config.app.env.is_production();

    // Create app state
    let state = create_app_state(config).await?;

    // Build application: rate limiting covers the API routes only
    let api_router = apply_middleware_with_config(
        create_router(),
        &rate_limit_config,
        &cors_config,
        is_production,
    );
    let app = api_router
        .merge(apply_middleware(health_routes()))
        .with_state(state);

    // Run server
    run_server(app, addr).await
}
