//! Adapters layer
//!
//! Implementations of port traits for external systems.

pub mod discord;
pub mod memory;

pub use discord::DiscordNotifier;
pub use memory::{
    InMemoryMemberRepository, InMemoryPromotionHistoryRepository, InMemoryServiceEventRepository,
};
