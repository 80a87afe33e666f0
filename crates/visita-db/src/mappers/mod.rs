//! Entity <-> model mappers

mod place;
mod review;
mod user;
mod visit;
