//! Salary rating service
//!
//! Pure arithmetic over work hours, overtime hours, and AFK minutes, plus
//! audit-event recording. No stored state of its own.

use std::sync::Arc;

use serde::Serialize;

use crate::app::rating_config::{AFK_MINUTES_PER_PENALTY, EXTRA_HOURS_PER_RATING, HOURS_PER_RATING};
use crate::domain::entities::{NewServiceEvent, ServiceEventKind};
use crate::domain::ports::ServiceEventRepository;
use crate::error::{AppError, DomainError};

/// Result of a salary rating computation
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SalaryRating {
    pub rating: i64,
    pub extra_rating: i64,
    pub total_rating: i64,
    pub message: String,
}

/// Compute a salary rating breakdown.
///
/// One rating point per 8 work hours, one extra point per 4 overtime hours,
/// one point deducted per 30 AFK minutes; the total never goes below zero.
/// Negative inputs are caller errors.
pub fn rate(
    work_hours: i64,
    extra_work_hours: i64,
    afk_minutes: i64,
) -> Result<SalaryRating, DomainError> {
    if work_hours < 0 || extra_work_hours < 0 || afk_minutes < 0 {
        return Err(DomainError::Validation(
            "Work hours, overtime hours, and AFK minutes must be non-negative".to_string(),
        ));
    }

    let rating = work_hours / HOURS_PER_RATING;
    let extra_rating = extra_work_hours / EXTRA_HOURS_PER_RATING;
    let penalty = afk_minutes / AFK_MINUTES_PER_PENALTY;
    let total_rating = (rating + extra_rating - penalty).max(0);

    Ok(SalaryRating {
        rating,
        extra_rating,
        total_rating,
        message: format!(
            "Salary rating: {}, overtime rating: {}, total: {}",
            rating, extra_rating, total_rating
        ),
    })
}

/// Service wrapping the pure computation with audit logging
pub struct SalaryService<ER>
where
    ER: ServiceEventRepository,
{
    events: Arc<ER>,
}

impl<ER> SalaryService<ER>
where
    ER: ServiceEventRepository,
{
    pub fn new(events: Arc<ER>) -> Self {
        Self { events }
    }

    /// Compute a rating for a member and record it in the archive
    pub async fn rate_member(
        &self,
        username: &str,
        work_hours: i64,
        extra_work_hours: i64,
        afk_minutes: i64,
    ) -> Result<SalaryRating, AppError> {
        let rating = rate(work_hours, extra_work_hours, afk_minutes)?;

        self.events
            .create(&NewServiceEvent {
                username: username.to_string(),
                kind: ServiceEventKind::Salary,
                message: rating.message.clone(),
                details: Some(format!(
                    "work_hours: {}, extra_hours: {}, afk_minutes: {}",
                    work_hours, extra_work_hours, afk_minutes
                )),
            })
            .await?;

        tracing::info!(
            username = username,
            total_rating = rating.total_rating,
            "Salary rating computed"
        );

        Ok(rating)
    }
}
