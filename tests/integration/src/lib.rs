//! Integration test utilities for the visita server
//!
//! This crate provides helpers for running end-to-end tests against
//! the REST API: spawning servers, seeding places and QR tokens, and
//! minting access tokens for test users.

pub mod helpers;
pub mod fixtures;

pub use helpers::*;
pub use fixtures::*;
