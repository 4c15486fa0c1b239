//! Promotion state and outcomes
//!
//! `PromotionRecord` is the per-member history entry the calculator owns;
//! `PromotionOutcome` is the structured result of one evaluation. Neither an
//! ineligible evaluation nor a member at the top of the ladder is an error.

use serde::{Deserialize, Serialize};

/// Per-member promotion history entry.
///
/// `checkpoint_minutes` is the work-time value at which the member was last
/// promoted (0 until the first promotion). Elapsed time toward the next
/// promotion is measured from this baseline, and a successful promotion
/// resets it to the exact triggering work time - surplus above the required
/// dwell time is not carried forward.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PromotionRecord {
    pub checkpoint_minutes: u64,
    pub current_rank: String,
    pub current_badge: String,
}

impl PromotionRecord {
    /// Seed a first-ever entry from caller-supplied badge and rank
    pub fn seed(badge: &str, rank: &str) -> Self {
        Self {
            checkpoint_minutes: 0,
            current_rank: rank.to_string(),
            current_badge: badge.to_string(),
        }
    }
}

/// Outcome of a single promotion evaluation
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PromotionOutcome {
    /// The member advances to `next_rank`. `rolled_over` is set when the
    /// advance crossed into the next badge.
    Promoted {
        next_rank: String,
        badge: String,
        rolled_over: bool,
        message: String,
    },
    /// Not enough elapsed work time since the last checkpoint
    NotEligible {
        required_minutes: u32,
        remaining_minutes: u64,
        message: String,
    },
    /// Already at the terminal rank of the terminal badge
    AtCeiling { message: String },
}

impl PromotionOutcome {
    pub fn is_success(&self) -> bool {
        matches!(self, PromotionOutcome::Promoted { .. })
    }

    pub fn message(&self) -> &str {
        match self {
            PromotionOutcome::Promoted { message, .. } => message,
            PromotionOutcome::NotEligible { message, .. } => message,
            PromotionOutcome::AtCeiling { message } => message,
        }
    }
}
