//! Salary rating handler

use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};

use crate::domain::ports::{Notification, COLOR_SALARY};
use crate::error::AppError;
use crate::handlers::promotions::notify;
use crate::AppState;

/// Request body for a salary rating
#[derive(Debug, Deserialize)]
pub struct RateRequest {
    pub username: String,
    pub work_hours: i64,
    #[serde(default)]
    pub extra_work_hours: i64,
    #[serde(default)]
    pub afk_minutes: i64,
}

/// Response body for a salary rating
#[derive(Debug, Serialize)]
pub struct RateResponse {
    pub username: String,
    pub rating: i64,
    pub extra_rating: i64,
    pub total_rating: i64,
    pub message: String,
}

/// POST /salary/rate
pub async fn rate(
    State(state): State<AppState>,
    Json(request): Json<RateRequest>,
) -> Result<Json<RateResponse>, AppError> {
    let rating = state
        .salary_service
        .rate_member(
            &request.username,
            request.work_hours,
            request.extra_work_hours,
            request.afk_minutes,
        )
        .await?;

    let note = Notification::new("Salary Rating", rating.message.clone())
        .color(COLOR_SALARY)
        .field("Rating", rating.rating.to_string())
        .field("Overtime Rating", rating.extra_rating.to_string())
        .field("Total", rating.total_rating.to_string())
        .subject(request.username.clone());
    notify(&state, note);

    Ok(Json(RateResponse {
        username: request.username,
        rating: rating.rating,
        extra_rating: rating.extra_rating,
        total_rating: rating.total_rating,
        message: rating.message,
    }))
}
