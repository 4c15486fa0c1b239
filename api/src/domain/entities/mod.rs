//! Domain entities
//!
//! Pure domain models representing core business concepts.

pub mod member;
pub mod promotion;
pub mod service_event;

pub use member::{Member, MemberId, NewMember};
pub use promotion::{PromotionOutcome, PromotionRecord};
pub use service_event::{NewServiceEvent, ServiceEvent, ServiceEventId, ServiceEventKind};
