//! Promotion handlers
//!
//! Endpoints for single and bulk promotion evaluation. Successful outcomes
//! are pushed to the notification sink fire-and-forget; delivery failures
//! are logged and never reach the response.

use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};

use crate::app::BulkPromotionResult;
use crate::domain::entities::PromotionOutcome;
use crate::domain::ports::{Notification, Notifier, COLOR_BULK, COLOR_PROMOTION};
use crate::error::AppError;
use crate::AppState;

/// Request body for a single promotion evaluation
#[derive(Debug, Deserialize)]
pub struct EvaluateRequest {
    pub username: String,
    /// Accumulated work time in minutes; defaults to the member record's
    /// stored value when omitted
    pub work_time_minutes: Option<u64>,
}

/// Response body for a promotion evaluation
#[derive(Debug, Serialize)]
pub struct PromotionResponse {
    pub success: bool,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub next_rank: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub badge: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rolled_over: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub required_minutes: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub remaining_minutes: Option<u64>,
}

impl From<PromotionOutcome> for PromotionResponse {
    fn from(outcome: PromotionOutcome) -> Self {
        match outcome {
            PromotionOutcome::Promoted {
                next_rank,
                badge,
                rolled_over,
                message,
            } => Self {
                success: true,
                message,
                next_rank: Some(next_rank),
                badge: Some(badge),
                rolled_over: Some(rolled_over),
                required_minutes: None,
                remaining_minutes: None,
            },
            PromotionOutcome::NotEligible {
                required_minutes,
                remaining_minutes,
                message,
            } => Self {
                success: false,
                message,
                next_rank: None,
                badge: None,
                rolled_over: None,
                required_minutes: Some(required_minutes),
                remaining_minutes: Some(remaining_minutes),
            },
            PromotionOutcome::AtCeiling { message } => Self {
                success: false,
                message,
                next_rank: None,
                badge: None,
                rolled_over: None,
                required_minutes: None,
                remaining_minutes: None,
            },
        }
    }
}

/// POST /promotions/evaluate
pub async fn evaluate(
    State(state): State<AppState>,
    Json(request): Json<EvaluateRequest>,
) -> Result<Json<PromotionResponse>, AppError> {
    let outcome = state
        .promotion_service
        .evaluate_member(&request.username, request.work_time_minutes)
        .await?;

    if let PromotionOutcome::Promoted {
        next_rank, badge, ..
    } = &outcome
    {
        let note = Notification::new("Promotion", outcome.message())
            .color(COLOR_PROMOTION)
            .field("New Rank", next_rank.clone())
            .field("Badge", badge.clone())
            .subject(request.username.clone());
        notify(&state, note);
    }

    Ok(Json(outcome.into()))
}

/// Request body for a bulk promotion run
#[derive(Debug, Deserialize)]
pub struct BulkEvaluateRequest {
    pub usernames: Vec<String>,
}

/// Response body for a bulk promotion run
#[derive(Debug, Serialize)]
pub struct BulkEvaluateResponse {
    pub results: Vec<BulkPromotionResult>,
    pub succeeded: usize,
    pub failed: usize,
}

/// POST /promotions/bulk
pub async fn evaluate_bulk(
    State(state): State<AppState>,
    Json(request): Json<BulkEvaluateRequest>,
) -> Result<Json<BulkEvaluateResponse>, AppError> {
    if request.usernames.is_empty() {
        return Err(AppError::BadRequest("Username list is empty".to_string()));
    }

    let results = state.promotion_service.evaluate_bulk(&request.usernames).await;
    let succeeded = results.iter().filter(|r| r.success).count();
    let failed = results.len() - succeeded;

    let note = Notification::new(
        "Bulk Promotion",
        format!("Bulk promotion run for {} members", results.len()),
    )
    .color(COLOR_BULK)
    .field("Succeeded", succeeded.to_string())
    .field("Failed", failed.to_string())
    .field("Total", results.len().to_string());
    notify(&state, note);

    Ok(Json(BulkEvaluateResponse {
        results,
        succeeded,
        failed,
    }))
}

/// Send a notification without blocking the response (log failures)
pub(crate) fn notify(state: &AppState, note: Notification) {
    let notifier = state.notifier.clone();
    tokio::spawn(async move {
        if let Err(e) = notifier.send(&note).await {
            tracing::warn!(error = %e, title = %note.title, "Failed to deliver notification");
        }
    });
}
