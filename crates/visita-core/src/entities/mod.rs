//! Domain entities - core business objects

mod place;
mod review;
mod user;
mod visit;

pub use place::{Place, RatingSummary};
pub use review::Review;
pub use user::User;
pub use visit::{Visit, VisitStatus};
