//! # visita-core
//!
//! Domain layer containing entities, value objects, repository traits, and domain events.
//! This crate has zero dependencies on infrastructure (database, web framework, etc.).

pub mod entities;
pub mod error;
pub mod events;
pub mod traits;
pub mod value_objects;

// Re-export commonly used types at crate root
pub use entities::{Place, RatingSummary, Review, User, Visit, VisitStatus};
pub use error::DomainError;
pub use events::DomainEvent;
pub use traits::{
    LikeAction, LikeOutcome, PlaceRepository, RepoResult, ReviewQuery, ReviewRepository,
    UserRepository, VisitOutcome, VisitRepository,
};
pub use value_objects::{
    haversine_km, haversine_m, Coordinates, Snowflake, SnowflakeGenerator, SnowflakeParseError,
};
