//! Service event entity (audit trail)
//!
//! Every successful promotion and every salary-rating computation records an
//! event. The archive endpoint queries these by kind and day.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Unique identifier for a service event
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ServiceEventId(pub Uuid);

impl ServiceEventId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for ServiceEventId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for ServiceEventId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Kind of audited operation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ServiceEventKind {
    Promotion,
    Salary,
}

impl std::fmt::Display for ServiceEventKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ServiceEventKind::Promotion => write!(f, "promotion"),
            ServiceEventKind::Salary => write!(f, "salary"),
        }
    }
}

impl std::str::FromStr for ServiceEventKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "promotion" => Ok(ServiceEventKind::Promotion),
            "salary" => Ok(ServiceEventKind::Salary),
            _ => Err(format!("Unknown event kind: {}", s)),
        }
    }
}

/// A recorded service event
#[derive(Debug, Clone, Serialize)]
pub struct ServiceEvent {
    pub id: ServiceEventId,
    pub username: String,
    pub kind: ServiceEventKind,
    pub message: String,
    pub details: Option<String>,
    pub recorded_at: DateTime<Utc>,
}

/// Data needed to record a new event
#[derive(Debug, Clone)]
pub struct NewServiceEvent {
    pub username: String,
    pub kind: ServiceEventKind,
    pub message: String,
    pub details: Option<String>,
}
