//! # visita-notify
//!
//! Redis-backed notification fan-out for domain events.
//!
//! ## Features
//!
//! - **Connection Pool**: Managed Redis connection pool with deadpool
//! - **Pub/Sub**: Fire-and-forget event distribution to downstream
//!   notification consumers (push workers, activity feeds)
//!
//! ## Example
//!
//! ```ignore
//! use visita_notify::{RedisPool, RedisPoolConfig, NotifyChannel, NotifyEvent, Publisher};
//!
//! let pool = RedisPool::new(RedisPoolConfig::default())?;
//! let publisher = Publisher::new(pool);
//!
//! let event = NotifyEvent::new("PLACE_VISITED", data);
//! publisher.publish(&NotifyChannel::user(user_id), &event).await?;
//! ```

pub mod pool;
pub mod pubsub;

// Re-export pool types
pub use pool::{
    create_shared_pool, RedisPool, RedisPoolConfig, RedisPoolError, RedisResult, SharedRedisPool,
};

// Re-export pubsub types
pub use pubsub::{
    NotifyChannel, NotifyEvent, Publisher, BROADCAST_CHANNEL, USER_CHANNEL_PREFIX,
};
