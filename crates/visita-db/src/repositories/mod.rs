//! Repository implementations
//!
//! PostgreSQL implementations of the repository traits defined in
//! visita-core. Each repository handles database operations for a
//! specific domain entity.

mod error;
mod place;
mod review;
mod user;
mod visit;

pub use place::PgPlaceRepository;
pub use review::PgReviewRepository;
pub use user::PgUserRepository;
pub use visit::PgVisitRepository;
