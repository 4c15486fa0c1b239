//! Promotion service
//!
//! The rank-promotion calculator. Decides whether a member may advance,
//! maintains the per-member last-promotion checkpoint, and rolls terminal
//! ranks over into the next badge. All promotion state changes go through
//! this service to ensure audit logging and consistency.

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use chrono::Utc;

use crate::domain::entities::{
    Member, NewServiceEvent, PromotionOutcome, PromotionRecord, ServiceEventKind,
};
use crate::domain::ports::{MemberRepository, PromotionHistoryRepository, ServiceEventRepository};
use crate::domain::RankCatalog;
use crate::error::{AppError, DomainError};

/// Outcome of one entry in a bulk promotion run
#[derive(Debug, Clone, serde::Serialize)]
pub struct BulkPromotionResult {
    pub username: String,
    pub success: bool,
    pub message: String,
}

/// Service for promotion evaluation
pub struct PromotionService<MR, HR, ER>
where
    MR: MemberRepository,
    HR: PromotionHistoryRepository,
    ER: ServiceEventRepository,
{
    catalog: Arc<RankCatalog>,
    members: Arc<MR>,
    history: Arc<HR>,
    events: Arc<ER>,
    /// Per-username locks. Two concurrent evaluations for the same member
    /// must not both observe "eligible" and double-promote; members are
    /// otherwise independent.
    locks: Mutex<HashMap<String, Arc<tokio::sync::Mutex<()>>>>,
}

impl<MR, HR, ER> PromotionService<MR, HR, ER>
where
    MR: MemberRepository,
    HR: PromotionHistoryRepository,
    ER: ServiceEventRepository,
{
    pub fn new(catalog: Arc<RankCatalog>, members: Arc<MR>, history: Arc<HR>, events: Arc<ER>) -> Self {
        Self {
            catalog,
            members,
            history,
            events,
            locks: Mutex::new(HashMap::new()),
        }
    }

    fn lock_for(&self, username: &str) -> Arc<tokio::sync::Mutex<()>> {
        let mut locks = self.locks.lock().unwrap();
        locks
            .entry(username.to_string())
            .or_insert_with(|| Arc::new(tokio::sync::Mutex::new(())))
            .clone()
    }

    /// Evaluate one member for promotion.
    ///
    /// `seed_badge` and `seed_rank` are used only to create a first-ever
    /// history entry (checkpoint 0); once an entry exists, the store is
    /// authoritative and the caller-supplied values are ignored. Unknown
    /// badges and ranks fail loudly instead of defaulting.
    pub async fn evaluate(
        &self,
        username: &str,
        work_time_minutes: u64,
        seed_badge: &str,
        seed_rank: &str,
    ) -> Result<PromotionOutcome, AppError> {
        let lock = self.lock_for(username);
        let _guard = lock.lock().await;

        let record = match self.history.get(username).await? {
            Some(record) => record,
            None => {
                let ladder = self.catalog.ranks_of(seed_badge)?;
                if !ladder.iter().any(|r| r == seed_rank) {
                    return Err(DomainError::UnknownRank {
                        badge: seed_badge.to_string(),
                        rank: seed_rank.to_string(),
                    }
                    .into());
                }
                let seeded = PromotionRecord::seed(seed_badge, seed_rank);
                self.history.upsert(username, &seeded).await?;
                seeded
            }
        };

        let required = self.catalog.required_time_of(&record.current_badge)?;
        // Work time can lag the checkpoint if the caller's clock was reset;
        // treat that as zero elapsed rather than underflowing.
        let elapsed = work_time_minutes.saturating_sub(record.checkpoint_minutes);

        if elapsed < u64::from(required) {
            let remaining = u64::from(required) - elapsed;
            return Ok(PromotionOutcome::NotEligible {
                required_minutes: required,
                remaining_minutes: remaining,
                message: format!(
                    "Insufficient time: {} min required, {} min remaining",
                    required, remaining
                ),
            });
        }

        let ladder = self.catalog.ranks_of(&record.current_badge)?;
        let position = ladder
            .iter()
            .position(|r| *r == record.current_rank)
            .ok_or_else(|| DomainError::UnknownRank {
                badge: record.current_badge.clone(),
                rank: record.current_rank.clone(),
            })?;

        if position + 1 < ladder.len() {
            let next_rank = ladder[position + 1].clone();
            let updated = PromotionRecord {
                checkpoint_minutes: work_time_minutes,
                current_rank: next_rank.clone(),
                current_badge: record.current_badge.clone(),
            };
            self.history.upsert(username, &updated).await?;

            tracing::info!(
                username = username,
                rank = %next_rank,
                badge = %record.current_badge,
                "Member promoted"
            );

            return Ok(PromotionOutcome::Promoted {
                message: format!("{} > {}", username, next_rank),
                next_rank,
                badge: record.current_badge,
                rolled_over: false,
            });
        }

        // Terminal rank: roll over into the next badge, if one exists
        match self.catalog.next_badge(&record.current_badge)? {
            Some(next_badge) => {
                let next_rank = next_badge.ranks[0].clone();
                let updated = PromotionRecord {
                    checkpoint_minutes: work_time_minutes,
                    current_rank: next_rank.clone(),
                    current_badge: next_badge.key.clone(),
                };
                self.history.upsert(username, &updated).await?;

                tracing::info!(
                    username = username,
                    rank = %next_rank,
                    badge = %next_badge.key,
                    "Member rolled over to next badge"
                );

                Ok(PromotionOutcome::Promoted {
                    message: format!("{} > {} ({})", username, next_rank, next_badge.display_name),
                    next_rank,
                    badge: next_badge.key.clone(),
                    rolled_over: true,
                })
            }
            None => Ok(PromotionOutcome::AtCeiling {
                message: "Highest rank reached. No further promotions available.".to_string(),
            }),
        }
    }

    /// Evaluate a member looked up from the identity store.
    ///
    /// The member record supplies the work time (unless overridden) and the
    /// first-contact seed. On success the member's rank and badge are
    /// written back and an audit event is recorded.
    pub async fn evaluate_member(
        &self,
        username: &str,
        work_time_override: Option<u64>,
    ) -> Result<PromotionOutcome, AppError> {
        let member = self
            .members
            .find_by_username(username)
            .await?
            .ok_or_else(|| DomainError::NotFound(format!("Member not found: {}", username)))?;

        let work_time = work_time_override.unwrap_or(member.work_time_minutes);
        let outcome = self
            .evaluate(username, work_time, &member.badge, &member.rank)
            .await?;

        if let PromotionOutcome::Promoted {
            next_rank, badge, ..
        } = &outcome
        {
            self.members
                .update_rank(username, next_rank, badge, Utc::now())
                .await?;

            self.events
                .create(&NewServiceEvent {
                    username: username.to_string(),
                    kind: ServiceEventKind::Promotion,
                    message: outcome.message().to_string(),
                    details: Some(format!("badge: {}, rank: {}", badge, next_rank)),
                })
                .await?;
        }

        Ok(outcome)
    }

    /// Evaluate a list of usernames, collecting per-member outcomes.
    /// A member that fails to evaluate (unknown user, bad state) becomes a
    /// failed entry; it never aborts the rest of the batch.
    pub async fn evaluate_bulk(&self, usernames: &[String]) -> Vec<BulkPromotionResult> {
        let mut results = Vec::with_capacity(usernames.len());

        for raw in usernames {
            let username = raw.trim();
            if username.is_empty() {
                continue;
            }

            let result = match self.evaluate_member(username, None).await {
                Ok(outcome) => BulkPromotionResult {
                    username: username.to_string(),
                    success: outcome.is_success(),
                    message: outcome.message().to_string(),
                },
                Err(e) => BulkPromotionResult {
                    username: username.to_string(),
                    success: false,
                    message: format!("{} - {}", username, e),
                },
            };
            results.push(result);
        }

        results
    }

    /// The member's current promotion state, if any evaluation has seeded it
    pub async fn history_of(&self, username: &str) -> Result<Option<PromotionRecord>, AppError> {
        Ok(self.history.get(username).await?)
    }

    pub fn catalog(&self) -> &RankCatalog {
        &self.catalog
    }

    /// Borrow the member repository (shared with the handlers)
    pub fn members(&self) -> &Arc<MR> {
        &self.members
    }
}
