//! Business logic services
//!
//! This module contains all service layer implementations that handle
//! business logic, validation, and orchestration of domain operations.

pub mod checkin;
pub mod context;
pub mod error;
pub mod place;
pub mod review;
pub mod user;

// Re-export all services for convenience
pub use checkin::CheckinService;
pub use context::{ServiceContext, ServiceContextBuilder};
pub use error::{ServiceError, ServiceResult};
pub use place::PlaceService;
pub use review::ReviewService;
pub use user::UserService;
