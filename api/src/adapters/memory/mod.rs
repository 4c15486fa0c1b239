//! In-memory repository adapters
//!
//! The identity store, promotion history, and audit archive are scoped to
//! process lifetime, so the in-memory implementations are the production
//! adapters, not test doubles. They are also what the service tests use.

mod repositories;

pub use repositories::{
    InMemoryMemberRepository, InMemoryPromotionHistoryRepository, InMemoryServiceEventRepository,
};
