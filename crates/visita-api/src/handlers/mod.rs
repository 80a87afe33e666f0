//! Route handlers
//!
//! All HTTP request handlers organized by domain.

pub mod checkin;
pub mod health;
pub mod places;
pub mod reviews;
pub mod users;
