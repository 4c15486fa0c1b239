//! Salary rating configuration constants
//!
//! Defines the conversion rates the salary rating formula uses.

/// Work hours per base salary rating point
pub const HOURS_PER_RATING: i64 = 8;

/// Overtime hours per extra salary rating point
pub const EXTRA_HOURS_PER_RATING: i64 = 4;

/// AFK minutes per rating point deducted
pub const AFK_MINUTES_PER_PENALTY: i64 = 30;
