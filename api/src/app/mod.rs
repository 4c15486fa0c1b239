//! Application layer
//!
//! Contains use cases and service orchestration.
//! Services coordinate between domain entities, ports, and external systems.

pub mod member_service;
pub mod promotion_service;
pub mod rating_config;
pub mod salary_service;

pub use member_service::{hash_secret, MemberService};
pub use promotion_service::{BulkPromotionResult, PromotionService};
pub use salary_service::{rate, SalaryRating, SalaryService};
// Re-export rating config for public API (constants used by consumers)
#[allow(unused_imports)]
pub use rating_config::*;
