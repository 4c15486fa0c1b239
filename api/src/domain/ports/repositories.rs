//! Repository port traits
//!
//! These traits define the interface for data persistence.
//! Implementations are provided by adapters (in-memory in this service; the
//! store is scoped to process lifetime).

use async_trait::async_trait;

use chrono::{DateTime, NaiveDate, Utc};

use crate::domain::entities::{
    Member, MemberId, NewMember, NewServiceEvent, PromotionRecord, ServiceEvent, ServiceEventKind,
};
use crate::error::DomainError;

/// Repository for Member entities (the mock identity store)
#[async_trait]
pub trait MemberRepository: Send + Sync {
    /// Find a member by ID
    async fn find_by_id(&self, id: &MemberId) -> Result<Option<Member>, DomainError>;

    /// Find a member by username
    async fn find_by_username(&self, username: &str) -> Result<Option<Member>, DomainError>;

    /// Find a member by session token hash
    async fn find_by_token_hash(&self, hash: &str) -> Result<Option<Member>, DomainError>;

    /// Create a new member
    async fn create(&self, member: &NewMember) -> Result<Member, DomainError>;

    /// Update rank and badge after a promotion
    async fn update_rank(
        &self,
        username: &str,
        rank: &str,
        badge: &str,
        promoted_at: DateTime<Utc>,
    ) -> Result<(), DomainError>;

    /// Set (or clear) the member's session token hash
    async fn set_token_hash(
        &self,
        username: &str,
        token_hash: Option<String>,
    ) -> Result<(), DomainError>;

    /// Overwrite the member's accumulated work time
    async fn set_work_time(&self, username: &str, minutes: u64) -> Result<(), DomainError>;
}

/// Keyed store for per-member promotion history entries.
///
/// The promotion service serializes access per username itself, so a
/// single-writer-at-a-time implementation is sufficient here.
#[async_trait]
pub trait PromotionHistoryRepository: Send + Sync {
    /// Fetch the history entry for a member, if one exists
    async fn get(&self, username: &str) -> Result<Option<PromotionRecord>, DomainError>;

    /// Insert or replace the history entry for a member
    async fn upsert(&self, username: &str, record: &PromotionRecord) -> Result<(), DomainError>;
}

/// Repository for ServiceEvent entities (audit trail)
#[async_trait]
pub trait ServiceEventRepository: Send + Sync {
    /// Record a new event
    async fn create(&self, event: &NewServiceEvent) -> Result<ServiceEvent, DomainError>;

    /// Find events for a member (most recent first)
    async fn find_by_username(&self, username: &str) -> Result<Vec<ServiceEvent>, DomainError>;

    /// Find events of a kind, optionally restricted to one day (most recent
    /// first)
    async fn find_by_kind(
        &self,
        kind: ServiceEventKind,
        day: Option<NaiveDate>,
    ) -> Result<Vec<ServiceEvent>, DomainError>;
}
