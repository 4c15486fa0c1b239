//! Test fixtures
//!
//! Factory functions for creating test data with sensible defaults.

use chrono::Utc;

use crate::domain::entities::{Member, MemberId};

/// Create a test member at the entry rank with no accumulated work time
pub fn test_member(username: &str) -> Member {
    Member {
        id: MemberId::new(),
        username: username.to_string(),
        full_name: format!("{} Example", username),
        email: format!("{}@example.com", username),
        password_hash: format!("hash-{}", username),
        token_hash: None,
        rank: "Trainee".to_string(),
        badge: "clerical".to_string(),
        work_time_minutes: 0,
        salary: 0,
        joined_at: Utc::now(),
        last_promotion_at: None,
        is_active: true,
    }
}

/// Create a test member at a specific badge, rank, and work time
pub fn test_member_with_rank(
    username: &str,
    badge: &str,
    rank: &str,
    work_time_minutes: u64,
) -> Member {
    Member {
        badge: badge.to_string(),
        rank: rank.to_string(),
        work_time_minutes,
        ..test_member(username)
    }
}
