//! Database models - SQLx-compatible structs for PostgreSQL tables

mod place;
mod review;
mod user;
mod visit;

pub use place::{PlaceModel, RatingSummaryModel};
pub use review::ReviewModel;
pub use user::UserModel;
pub use visit::VisitModel;
