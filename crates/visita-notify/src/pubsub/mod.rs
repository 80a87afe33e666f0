//! Redis Pub/Sub module.
//!
//! Provides publish functionality for notification event distribution.

mod channels;
mod publisher;

pub use channels::{NotifyChannel, BROADCAST_CHANNEL, USER_CHANNEL_PREFIX};
pub use publisher::{NotifyEvent, Publisher};
