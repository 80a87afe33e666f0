//! # visita-db
//!
//! Database layer implementing repository traits with PostgreSQL via SQLx.
//!
//! ## Overview
//!
//! This crate provides PostgreSQL implementations for all repository traits
//! defined in `visita-core`. It handles:
//!
//! - Connection pool management
//! - Database models with SQLx `FromRow` derives
//! - Entity ↔ Model mappers
//! - Repository implementations
//!
//! Every multi-step mutation (visit + XP credit, review + rating recompute,
//! like toggle) runs inside a single transaction here; the rest of the
//! system only ever sees committed state.
//!
//! ## Usage
//!
//! ```rust,ignore
//! use visita_db::pool::{create_pool, DatabaseConfig};
//! use visita_db::repositories::PgPlaceRepository;
//! use visita_core::traits::PlaceRepository;
//!
//! async fn example() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = DatabaseConfig::from_env();
//!     let pool = create_pool(&config).await?;
//!     let place_repo = PgPlaceRepository::new(pool);
//!
//!     // Use the repository...
//!     Ok(())
//! }
//! ```

pub mod mappers;
pub mod models;
pub mod pool;
pub mod repositories;

// Re-export commonly used types
pub use pool::{create_pool, create_pool_from_env, DatabaseConfig, PgPool};
pub use repositories::{
    PgPlaceRepository, PgReviewRepository, PgUserRepository, PgVisitRepository,
};
