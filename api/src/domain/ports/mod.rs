//! Domain ports (traits)
//!
//! Port traits define interfaces that the domain layer requires.
//! Adapters provide concrete implementations of these traits.

pub mod notifier;
pub mod repositories;

pub use notifier::{
    Notification, NotificationField, Notifier, COLOR_BULK, COLOR_DEFAULT, COLOR_PROMOTION,
    COLOR_SALARY,
};
pub use repositories::{MemberRepository, PromotionHistoryRepository, ServiceEventRepository};
