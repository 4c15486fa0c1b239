//! In-memory implementations of the repository ports

use async_trait::async_trait;
use chrono::{DateTime, NaiveDate, Utc};
use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use crate::domain::entities::{
    Member, MemberId, NewMember, NewServiceEvent, PromotionRecord, ServiceEvent, ServiceEventId,
    ServiceEventKind,
};
use crate::domain::ports::{MemberRepository, PromotionHistoryRepository, ServiceEventRepository};
use crate::error::DomainError;

// ============================================================================
// In-Memory Member Repository
// ============================================================================

#[derive(Default)]
pub struct InMemoryMemberRepository {
    members: Arc<RwLock<HashMap<MemberId, Member>>>,
    by_username: Arc<RwLock<HashMap<String, MemberId>>>,
}

impl InMemoryMemberRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a fully-formed member (startup seeding and tests)
    pub fn insert(&self, member: Member) {
        let mut members = self.members.write().unwrap();
        let mut by_username = self.by_username.write().unwrap();
        by_username.insert(member.username.clone(), member.id);
        members.insert(member.id, member);
    }

    /// Pre-populate with a member (builder form)
    pub fn with_member(self, member: Member) -> Self {
        self.insert(member);
        self
    }
}

#[async_trait]
impl MemberRepository for InMemoryMemberRepository {
    async fn find_by_id(&self, id: &MemberId) -> Result<Option<Member>, DomainError> {
        let members = self.members.read().unwrap();
        Ok(members.get(id).cloned())
    }

    async fn find_by_username(&self, username: &str) -> Result<Option<Member>, DomainError> {
        let by_username = self.by_username.read().unwrap();
        let members = self.members.read().unwrap();

        if let Some(id) = by_username.get(username) {
            Ok(members.get(id).cloned())
        } else {
            Ok(None)
        }
    }

    async fn find_by_token_hash(&self, hash: &str) -> Result<Option<Member>, DomainError> {
        let members = self.members.read().unwrap();
        Ok(members
            .values()
            .find(|m| m.token_hash.as_deref() == Some(hash))
            .cloned())
    }

    async fn create(&self, new_member: &NewMember) -> Result<Member, DomainError> {
        let member = Member {
            id: MemberId::new(),
            username: new_member.username.clone(),
            full_name: new_member.full_name.clone(),
            email: new_member.email.clone(),
            password_hash: new_member.password_hash.clone(),
            token_hash: None,
            rank: new_member.rank.clone(),
            badge: new_member.badge.clone(),
            work_time_minutes: 0,
            salary: 0,
            joined_at: Utc::now(),
            last_promotion_at: None,
            is_active: true,
        };

        self.insert(member.clone());
        Ok(member)
    }

    async fn update_rank(
        &self,
        username: &str,
        rank: &str,
        badge: &str,
        promoted_at: DateTime<Utc>,
    ) -> Result<(), DomainError> {
        self.update(username, |member| {
            member.rank = rank.to_string();
            member.badge = badge.to_string();
            member.last_promotion_at = Some(promoted_at);
        })
    }

    async fn set_token_hash(
        &self,
        username: &str,
        token_hash: Option<String>,
    ) -> Result<(), DomainError> {
        self.update(username, |member| member.token_hash = token_hash)
    }

    async fn set_work_time(&self, username: &str, minutes: u64) -> Result<(), DomainError> {
        self.update(username, |member| member.work_time_minutes = minutes)
    }
}

impl InMemoryMemberRepository {
    fn update(
        &self,
        username: &str,
        apply: impl FnOnce(&mut Member),
    ) -> Result<(), DomainError> {
        let by_username = self.by_username.read().unwrap();
        let mut members = self.members.write().unwrap();

        let id = by_username
            .get(username)
            .ok_or_else(|| DomainError::NotFound(format!("Member {} not found", username)))?;
        let member = members
            .get_mut(id)
            .ok_or_else(|| DomainError::NotFound(format!("Member {} not found", username)))?;
        apply(member);
        Ok(())
    }
}

// ============================================================================
// In-Memory Promotion History Repository
// ============================================================================

#[derive(Default)]
pub struct InMemoryPromotionHistoryRepository {
    records: Arc<RwLock<HashMap<String, PromotionRecord>>>,
}

impl InMemoryPromotionHistoryRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pre-populate with a record for testing
    pub fn with_record(self, username: &str, record: PromotionRecord) -> Self {
        self.records
            .write()
            .unwrap()
            .insert(username.to_string(), record);
        self
    }
}

#[async_trait]
impl PromotionHistoryRepository for InMemoryPromotionHistoryRepository {
    async fn get(&self, username: &str) -> Result<Option<PromotionRecord>, DomainError> {
        let records = self.records.read().unwrap();
        Ok(records.get(username).cloned())
    }

    async fn upsert(&self, username: &str, record: &PromotionRecord) -> Result<(), DomainError> {
        let mut records = self.records.write().unwrap();
        records.insert(username.to_string(), record.clone());
        Ok(())
    }
}

// ============================================================================
// In-Memory Service Event Repository
// ============================================================================

#[derive(Default)]
pub struct InMemoryServiceEventRepository {
    events: Arc<RwLock<Vec<ServiceEvent>>>,
}

impl InMemoryServiceEventRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl ServiceEventRepository for InMemoryServiceEventRepository {
    async fn create(&self, new_event: &NewServiceEvent) -> Result<ServiceEvent, DomainError> {
        let event = ServiceEvent {
            id: ServiceEventId::new(),
            username: new_event.username.clone(),
            kind: new_event.kind,
            message: new_event.message.clone(),
            details: new_event.details.clone(),
            recorded_at: Utc::now(),
        };

        let mut events = self.events.write().unwrap();
        events.push(event.clone());
        Ok(event)
    }

    async fn find_by_username(&self, username: &str) -> Result<Vec<ServiceEvent>, DomainError> {
        let events = self.events.read().unwrap();
        Ok(events
            .iter()
            .rev()
            .filter(|e| e.username == username)
            .cloned()
            .collect())
    }

    async fn find_by_kind(
        &self,
        kind: ServiceEventKind,
        day: Option<NaiveDate>,
    ) -> Result<Vec<ServiceEvent>, DomainError> {
        let events = self.events.read().unwrap();
        Ok(events
            .iter()
            .rev()
            .filter(|e| e.kind == kind)
            .filter(|e| day.map_or(true, |d| e.recorded_at.date_naive() == d))
            .cloned()
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::test_member;

    #[tokio::test]
    async fn member_create_and_lookup() {
        let repo = InMemoryMemberRepository::new();
        let created = repo
            .create(&NewMember {
                username: "alice".to_string(),
                full_name: "Alice Example".to_string(),
                email: "alice@example.com".to_string(),
                password_hash: "hash".to_string(),
                badge: "clerical".to_string(),
                rank: "Trainee".to_string(),
            })
            .await
            .unwrap();

        let by_id = repo.find_by_id(&created.id).await.unwrap().unwrap();
        assert_eq!(by_id.username, "alice");

        let by_name = repo.find_by_username("alice").await.unwrap().unwrap();
        assert_eq!(by_name.id, created.id);

        assert!(repo.find_by_username("bob").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn member_token_hash_roundtrip() {
        let repo = InMemoryMemberRepository::new().with_member(test_member("alice"));

        repo.set_token_hash("alice", Some("tok-hash".to_string()))
            .await
            .unwrap();
        let found = repo.find_by_token_hash("tok-hash").await.unwrap().unwrap();
        assert_eq!(found.username, "alice");

        repo.set_token_hash("alice", None).await.unwrap();
        assert!(repo.find_by_token_hash("tok-hash").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn member_update_rank_unknown_user_fails() {
        let repo = InMemoryMemberRepository::new();
        let err = repo
            .update_rank("ghost", "B", "clerical", Utc::now())
            .await
            .unwrap_err();
        assert!(matches!(err, DomainError::NotFound(_)));
    }

    #[tokio::test]
    async fn history_get_and_upsert() {
        let repo = InMemoryPromotionHistoryRepository::new();
        assert!(repo.get("alice").await.unwrap().is_none());

        let record = PromotionRecord::seed("clerical", "Trainee");
        repo.upsert("alice", &record).await.unwrap();
        assert_eq!(repo.get("alice").await.unwrap().unwrap(), record);

        let advanced = PromotionRecord {
            checkpoint_minutes: 30,
            current_rank: "Clerk I".to_string(),
            current_badge: "clerical".to_string(),
        };
        repo.upsert("alice", &advanced).await.unwrap();
        assert_eq!(repo.get("alice").await.unwrap().unwrap(), advanced);
    }

    #[tokio::test]
    async fn events_filter_by_kind_and_day() {
        let repo = InMemoryServiceEventRepository::new();
        repo.create(&NewServiceEvent {
            username: "alice".to_string(),
            kind: ServiceEventKind::Promotion,
            message: "alice > Clerk I".to_string(),
            details: None,
        })
        .await
        .unwrap();
        repo.create(&NewServiceEvent {
            username: "alice".to_string(),
            kind: ServiceEventKind::Salary,
            message: "total: 5".to_string(),
            details: None,
        })
        .await
        .unwrap();

        let promotions = repo
            .find_by_kind(ServiceEventKind::Promotion, None)
            .await
            .unwrap();
        assert_eq!(promotions.len(), 1);

        let today = Utc::now().date_naive();
        let todays = repo
            .find_by_kind(ServiceEventKind::Salary, Some(today))
            .await
            .unwrap();
        assert_eq!(todays.len(), 1);

        let yesterday = today.pred_opt().unwrap();
        let none = repo
            .find_by_kind(ServiceEventKind::Salary, Some(yesterday))
            .await
            .unwrap();
        assert!(none.is_empty());
    }
}
