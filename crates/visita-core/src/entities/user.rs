//! User entity - an app user with an XP balance

use chrono::{DateTime, Utc};

use crate::value_objects::Snowflake;

/// User entity
///
/// Identity (credentials, sessions) lives in an external provider; this
/// record carries the gamification state the backend owns. XP only
/// changes inside the visit-recording transaction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    pub id: Snowflake,
    pub username: String,
    pub xp: i32,
    pub created_at: DateTime<Utc>,
}

impl User {
    /// Create a new User with zero XP
    pub fn new(id: Snowflake, username: String) -> Self {
        Self {
            id,
            username,
            xp: 0,
            created_at: Utc::now(),
        }
    }
}
