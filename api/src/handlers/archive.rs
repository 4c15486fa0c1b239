//! Archive handler
//!
//! Query the audit trail of promotions and salary ratings by kind and day.

use axum::{
    extract::{Query, State},
    Json,
};
use chrono::NaiveDate;
use serde::Deserialize;

use crate::domain::entities::{ServiceEvent, ServiceEventKind};
use crate::domain::ports::ServiceEventRepository;
use crate::error::AppError;
use crate::AppState;

/// Query parameters for the archive lookup
#[derive(Debug, Deserialize)]
pub struct ArchiveQuery {
    pub kind: String,
    /// Day filter, YYYY-MM-DD; all days when omitted
    pub date: Option<String>,
}

fn parse_day(raw: &str) -> Result<NaiveDate, AppError> {
    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .map_err(|_| AppError::BadRequest(format!("Invalid date: {}", raw)))
}

/// GET /archive?kind=promotion&date=2026-08-23
pub async fn get_archive(
    State(state): State<AppState>,
    Query(query): Query<ArchiveQuery>,
) -> Result<Json<Vec<ServiceEvent>>, AppError> {
    let kind: ServiceEventKind = query
        .kind
        .parse()
        .map_err(AppError::BadRequest)?;

    let day = query.date.as_deref().map(parse_day).transpose()?;

    let events = state.event_repo.find_by_kind(kind, day).await?;
    Ok(Json(events))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Datelike;

    #[test]
    fn parse_day_accepts_iso_dates() {
        let day = parse_day("2026-08-23").unwrap();
        assert_eq!(day.year(), 2026);
        assert_eq!(day.month(), 8);
        assert_eq!(day.day(), 23);
    }

    #[test]
    fn parse_day_rejects_malformed() {
        assert!(parse_day("23/08/2026").is_err());
        assert!(parse_day("yesterday").is_err());
        assert!(parse_day("2026-13-01").is_err());
    }
}
