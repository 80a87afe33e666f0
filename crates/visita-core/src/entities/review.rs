//! Review entity - a user's rating and comment for a place

use chrono::{DateTime, Utc};

use crate::value_objects::Snowflake;

/// Review entity
///
/// One review per (user, place); the database enforces this with a
/// unique constraint. `total_likes` is a denormalized counter moved by
/// the like toggle, floored at zero.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Review {
    pub id: Snowflake,
    pub place_id: Snowflake,
    pub user_id: Snowflake,
    pub rating: i16,
    pub comment: String,
    pub total_likes: i32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Review {
    /// Valid rating bounds (inclusive)
    pub const MIN_RATING: i16 = 1;
    pub const MAX_RATING: i16 = 5;

    /// Create a new Review with required fields
    pub fn new(
        id: Snowflake,
        place_id: Snowflake,
        user_id: Snowflake,
        rating: i16,
        comment: String,
    ) -> Self {
        let now = Utc::now();
        Self {
            id,
            place_id,
            user_id,
            rating,
            comment,
            total_likes: 0,
            created_at: now,
            updated_at: now,
        }
    }

    /// Check a rating value against the valid range
    #[inline]
    pub fn rating_in_range(rating: i16) -> bool {
        (Self::MIN_RATING..=Self::MAX_RATING).contains(&rating)
    }

    /// Check if the given user wrote this review
    #[inline]
    pub fn is_author(&self, user_id: Snowflake) -> bool {
        self.user_id == user_id
    }

    /// Rewrite rating and comment (edit)
    pub fn set_content(&mut self, rating: i16, comment: String) {
        self.rating = rating;
        self.comment = comment;
        self.updated_at = Utc::now();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_review_has_no_likes() {
        let review = Review::new(
            Snowflake::new(1),
            Snowflake::new(2),
            Snowflake::new(3),
            4,
            "Worth the climb".to_string(),
        );
        assert_eq!(review.total_likes, 0);
        assert_eq!(review.rating, 4);
    }

    #[test]
    fn test_rating_in_range() {
        assert!(Review::rating_in_range(1));
        assert!(Review::rating_in_range(5));
        assert!(!Review::rating_in_range(0));
        assert!(!Review::rating_in_range(6));
    }

    #[test]
    fn test_is_author() {
        let review = Review::new(
            Snowflake::new(1),
            Snowflake::new(2),
            Snowflake::new(3),
            5,
            "Great".to_string(),
        );
        assert!(review.is_author(Snowflake::new(3)));
        assert!(!review.is_author(Snowflake::new(4)));
    }

    #[test]
    fn test_set_content_touches_updated_at() {
        let mut review = Review::new(
            Snowflake::new(1),
            Snowflake::new(2),
            Snowflake::new(3),
            2,
            "Meh".to_string(),
        );
        let before = review.updated_at;
        review.set_content(4, "Better on a second look".to_string());
        assert_eq!(review.rating, 4);
        assert!(review.updated_at >= before);
    }
}
