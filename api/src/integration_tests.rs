//! Full integration tests for the Rankhall API
//!
//! Exercise the services together against the in-memory adapters, the way
//! the wired application uses them: register a member, push work time,
//! evaluate promotions, rate salaries, and read the archive back.
//!
//! Run with: cargo test integration_tests

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use crate::adapters::{
        InMemoryMemberRepository, InMemoryPromotionHistoryRepository,
        InMemoryServiceEventRepository,
    };
    use crate::app::{MemberService, PromotionService, SalaryService};
    use crate::domain::entities::{PromotionOutcome, ServiceEventKind};
    use crate::domain::ports::{MemberRepository, Notifier, ServiceEventRepository};
    use crate::domain::RankCatalog;
    use crate::test_utils::RecordingNotifier;

    struct Harness {
        members: Arc<InMemoryMemberRepository>,
        events: Arc<InMemoryServiceEventRepository>,
        member_service: MemberService<InMemoryMemberRepository>,
        promotion_service: PromotionService<
            InMemoryMemberRepository,
            InMemoryPromotionHistoryRepository,
            InMemoryServiceEventRepository,
        >,
        salary_service: SalaryService<InMemoryServiceEventRepository>,
    }

    fn harness() -> Harness {
        let catalog = Arc::new(RankCatalog::standard());
        let members = Arc::new(InMemoryMemberRepository::new());
        let history = Arc::new(InMemoryPromotionHistoryRepository::new());
        let events = Arc::new(InMemoryServiceEventRepository::new());

        Harness {
            members: members.clone(),
            events: events.clone(),
            member_service: MemberService::new(members.clone(), catalog.clone()),
            promotion_service: PromotionService::new(
                catalog.clone(),
                members.clone(),
                history,
                events.clone(),
            ),
            salary_service: SalaryService::new(events),
        }
    }

    /// Register, log in, work enough for one promotion, and find it in the
    /// archive afterwards.
    #[tokio::test]
    async fn register_work_promote_and_audit() {
        let h = harness();

        h.member_service
            .register("alice", "Alice Example", "alice@example.com", "secret1")
            .await
            .unwrap();
        let (_, token) = h.member_service.login("alice", "secret1").await.unwrap();
        assert!(token.starts_with("rh-"));

        // Not enough work time yet: clerical requires 25 minutes
        h.members.set_work_time("alice", 10).await.unwrap();
        let outcome = h.promotion_service.evaluate_member("alice", None).await.unwrap();
        assert!(matches!(outcome, PromotionOutcome::NotEligible { .. }));

        h.members.set_work_time("alice", 25).await.unwrap();
        let outcome = h.promotion_service.evaluate_member("alice", None).await.unwrap();
        match outcome {
            PromotionOutcome::Promoted { next_rank, .. } => assert_eq!(next_rank, "Clerk I"),
            other => panic!("Expected Promoted, got {:?}", other),
        }

        let member = h.members.find_by_username("alice").await.unwrap().unwrap();
        assert_eq!(member.rank, "Clerk I");
        assert_eq!(member.badge, "clerical");

        let archive = h
            .events
            .find_by_kind(ServiceEventKind::Promotion, None)
            .await
            .unwrap();
        assert_eq!(archive.len(), 1);
        assert_eq!(archive[0].username, "alice");
    }

    /// Walk a member through the full clerical ladder and across the badge
    /// boundary into security.
    #[tokio::test]
    async fn full_ladder_walk_rolls_over_to_next_badge() {
        let h = harness();

        h.member_service
            .register("bob", "Bob Example", "bob@example.com", "secret1")
            .await
            .unwrap();

        // clerical has 8 ranks at 25 minutes each: 7 promotions within the
        // badge, the 8th rolls over into security
        let mut work = 0u64;
        for step in 1..=8 {
            work += 25;
            h.members.set_work_time("bob", work).await.unwrap();
            let outcome = h.promotion_service.evaluate_member("bob", None).await.unwrap();
            match outcome {
                PromotionOutcome::Promoted { rolled_over, .. } => {
                    assert_eq!(rolled_over, step == 8, "step {}", step);
                }
                other => panic!("Expected Promoted at step {}, got {:?}", step, other),
            }
        }

        let member = h.members.find_by_username("bob").await.unwrap().unwrap();
        assert_eq!(member.badge, "security");
        assert_eq!(member.rank, "Security Officer I");

        // The next hop requires security's 30 minutes, not clerical's 25
        h.members.set_work_time("bob", work + 25).await.unwrap();
        let outcome = h.promotion_service.evaluate_member("bob", None).await.unwrap();
        assert!(matches!(outcome, PromotionOutcome::NotEligible { .. }));
    }

    /// Salary ratings and promotions land in the same archive, filterable
    /// by kind.
    #[tokio::test]
    async fn archive_separates_kinds() {
        let h = harness();

        h.member_service
            .register("carol", "Carol Example", "carol@example.com", "secret1")
            .await
            .unwrap();

        h.members.set_work_time("carol", 25).await.unwrap();
        h.promotion_service.evaluate_member("carol", None).await.unwrap();
        h.salary_service.rate_member("carol", 40, 8, 0).await.unwrap();
        h.salary_service.rate_member("carol", 16, 0, 60).await.unwrap();

        let promotions = h
            .events
            .find_by_kind(ServiceEventKind::Promotion, None)
            .await
            .unwrap();
        let salaries = h
            .events
            .find_by_kind(ServiceEventKind::Salary, None)
            .await
            .unwrap();
        assert_eq!(promotions.len(), 1);
        assert_eq!(salaries.len(), 2);

        // Newest first
        assert!(salaries[0].details.as_deref().unwrap().contains("work_hours: 16"));

        let carols = h.events.find_by_username("carol").await.unwrap();
        assert_eq!(carols.len(), 3);
    }

    /// Bulk promotion over a mixed population
    #[tokio::test]
    async fn bulk_run_over_registered_members() {
        let h = harness();

        for name in ["alice", "bob"] {
            h.member_service
                .register(name, name, &format!("{}@example.com", name), "secret1")
                .await
                .unwrap();
        }
        h.members.set_work_time("alice", 30).await.unwrap();
        // bob stays at 0 minutes

        let results = h
            .promotion_service
            .evaluate_bulk(&[
                "alice".to_string(),
                "bob".to_string(),
                "ghost".to_string(),
            ])
            .await;

        assert_eq!(results.len(), 3);
        assert!(results[0].success);
        assert!(!results[1].success);
        assert!(!results[2].success);
    }

    /// Notifications carry the promotion details the handlers attach
    #[tokio::test]
    async fn notifier_receives_structured_fields() {
        use crate::domain::ports::{Notification, COLOR_PROMOTION};

        let notifier = RecordingNotifier::new();
        let note = Notification::new("Promotion", "alice > Clerk I")
            .color(COLOR_PROMOTION)
            .field("New Rank", "Clerk I")
            .subject("alice");
        notifier.send(&note).await.unwrap();

        let sent = notifier.sent();
        assert_eq!(sent.len(), 1);
        assert_eq!(sent[0].color, COLOR_PROMOTION);
        assert_eq!(sent[0].subject_user.as_deref(), Some("alice"));

        let failing = RecordingNotifier::failing();
        assert!(failing.send(&note).await.is_err());
    }
}
