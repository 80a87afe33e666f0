//! Redis Pub/Sub publisher.
//!
//! Publishes notification events to Redis channels for downstream
//! consumers (push workers, activity feeds).

use crate::pool::{RedisPool, RedisResult};
use crate::pubsub::NotifyChannel;
use redis::AsyncCommands;
use serde::{Deserialize, Serialize};
use visita_core::DomainEvent;

/// Event wrapper for Pub/Sub messages
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NotifyEvent {
    /// Event type name (e.g., "PLACE_VISITED", "REVIEW_ADDED")
    pub event_type: String,
    /// Event payload
    pub data: serde_json::Value,
}

impl NotifyEvent {
    /// Create a new event
    #[must_use]
    pub fn new(event_type: impl Into<String>, data: serde_json::Value) -> Self {
        Self {
            event_type: event_type.into(),
            data,
        }
    }

    /// Build an event from a domain event
    pub fn from_domain(event: &DomainEvent) -> Result<Self, serde_json::Error> {
        Ok(Self {
            event_type: event.event_type().to_string(),
            data: serde_json::to_value(event)?,
        })
    }

    /// Serialize to JSON
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }
}

/// Redis Pub/Sub publisher
#[derive(Clone)]
pub struct Publisher {
    pool: RedisPool,
}

impl Publisher {
    /// Create a new publisher
    #[must_use]
    pub fn new(pool: RedisPool) -> Self {
        Self { pool }
    }

    /// Publish an event to a channel
    pub async fn publish(&self, channel: &NotifyChannel, event: &NotifyEvent) -> RedisResult<u32> {
        let mut conn = self.pool.get().await?;
        let channel_name = channel.name();
        let payload = event.to_json()?;

        let receivers: u32 = conn.publish(&channel_name, &payload).await?;

        tracing::debug!(
            channel = %channel_name,
            event_type = %event.event_type,
            receivers = receivers,
            "Published event"
        );

        Ok(receivers)
    }

    /// Publish a raw message to a channel
    pub async fn publish_raw(&self, channel: &NotifyChannel, message: &str) -> RedisResult<u32> {
        let mut conn = self.pool.get().await?;
        let channel_name = channel.name();

        let receivers: u32 = conn.publish(&channel_name, message).await?;

        tracing::debug!(
            channel = %channel_name,
            receivers = receivers,
            "Published raw message"
        );

        Ok(receivers)
    }

    /// Publish a domain event to its user's channel
    ///
    /// Callers treat the result as best-effort: delivery failures are
    /// logged and swallowed after the owning transaction has committed.
    pub async fn publish_domain_event(&self, event: &DomainEvent) -> RedisResult<u32> {
        let notify = NotifyEvent::from_domain(event)?;
        let channel = NotifyChannel::user(event.user_id());
        self.publish(&channel, &notify).await
    }
}
