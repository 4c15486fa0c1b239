//! Member domain entity
//!
//! A member of the organization, as held by the identity store. The
//! promotion calculator treats the member's accumulated work time, badge,
//! and rank as caller-supplied inputs; the authoritative promotion state
//! lives in the history store.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Unique identifier for a member
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct MemberId(pub Uuid);

impl MemberId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for MemberId {
    fn default() -> Self {
        Self::new()
    }
}

impl From<Uuid> for MemberId {
    fn from(id: Uuid) -> Self {
        Self(id)
    }
}

impl std::fmt::Display for MemberId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// An organization member
#[derive(Debug, Clone, Serialize)]
pub struct Member {
    pub id: MemberId,
    pub username: String,
    pub full_name: String,
    pub email: String,
    /// sha256 of the login password
    #[serde(skip_serializing)]
    pub password_hash: String,
    /// sha256 of the current session token, None when logged out
    #[serde(skip_serializing)]
    pub token_hash: Option<String>,
    pub rank: String,
    pub badge: String,
    /// Accumulated work time in minutes
    pub work_time_minutes: u64,
    pub salary: i64,
    pub joined_at: DateTime<Utc>,
    pub last_promotion_at: Option<DateTime<Utc>>,
    pub is_active: bool,
}

/// Data needed to create a new member
#[derive(Debug, Clone)]
pub struct NewMember {
    pub username: String,
    pub full_name: String,
    pub email: String,
    pub password_hash: String,
    /// Entry badge and rank, normally the catalog's first ladder entry
    pub badge: String,
    pub rank: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn member_id_display() {
        let id = MemberId(Uuid::nil());
        assert_eq!(id.to_string(), "00000000-0000-0000-0000-000000000000");
    }

    #[test]
    fn member_secrets_not_serialized() {
        let member = Member {
            id: MemberId::new(),
            username: "alice".to_string(),
            full_name: "Alice Example".to_string(),
            email: "alice@example.com".to_string(),
            password_hash: "deadbeef".to_string(),
            token_hash: Some("cafebabe".to_string()),
            rank: "Trainee".to_string(),
            badge: "clerical".to_string(),
            work_time_minutes: 0,
            salary: 0,
            joined_at: Utc::now(),
            last_promotion_at: None,
            is_active: true,
        };

        let json = serde_json::to_string(&member).unwrap();
        assert!(json.contains("alice"));
        assert!(!json.contains("deadbeef"));
        assert!(!json.contains("cafebabe"));
    }
}
