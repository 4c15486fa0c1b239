//! Member handlers

use axum::{
    extract::{Path, State},
    Extension, Json,
};
use serde::Deserialize;

use crate::domain::entities::{Member, ServiceEvent};
use crate::domain::ports::{MemberRepository, ServiceEventRepository};
use crate::error::{AppError, DomainError};
use crate::AppState;

/// GET /members/me
///
/// The authenticated member, taken from the request extensions populated
/// by the auth middleware.
pub async fn get_me(Extension(member): Extension<Member>) -> Json<Member> {
    Json(member)
}

/// GET /members/:username
pub async fn get_member(
    State(state): State<AppState>,
    Path(username): Path<String>,
) -> Result<Json<Member>, AppError> {
    let member = state
        .member_service
        .find_by_username(&username)
        .await?
        .ok_or_else(|| {
            AppError::Domain(DomainError::NotFound(format!(
                "Member with username '{}' not found",
                username
            )))
        })?;

    Ok(Json(member))
}

/// GET /members/:username/events
///
/// All archived events for a member, newest first.
pub async fn get_member_events(
    State(state): State<AppState>,
    Path(username): Path<String>,
) -> Result<Json<Vec<ServiceEvent>>, AppError> {
    if state
        .member_service
        .find_by_username(&username)
        .await?
        .is_none()
    {
        return Err(AppError::Domain(DomainError::NotFound(format!(
            "Member with username '{}' not found",
            username
        ))));
    }

    let events = state.event_repo.find_by_username(&username).await?;
    Ok(Json(events))
}

/// Request body for a work-time update
#[derive(Debug, Deserialize)]
pub struct WorkTimeRequest {
    pub work_time_minutes: u64,
}

/// PUT /members/:username/work-time
///
/// Record a member's accumulated work time, as reported by the activity
/// tracker. This only updates the member record; promotion checkpoints are
/// untouched until the next evaluation.
pub async fn set_work_time(
    State(state): State<AppState>,
    Path(username): Path<String>,
    Json(request): Json<WorkTimeRequest>,
) -> Result<Json<Member>, AppError> {
    state
        .promotion_service
        .members()
        .set_work_time(&username, request.work_time_minutes)
        .await?;

    let member = state
        .member_service
        .find_by_username(&username)
        .await?
        .ok_or_else(|| {
            AppError::Domain(DomainError::NotFound(format!(
                "Member with username '{}' not found",
                username
            )))
        })?;

    Ok(Json(member))
}

#[cfg(test)]
mod tests {
    use crate::domain::entities::Member;
    use crate::test_utils::test_member;

    #[test]
    fn member_response_omits_secrets() {
        let member: Member = test_member("alice");
        let json = serde_json::to_string(&member).unwrap();
        assert!(json.contains("\"username\":\"alice\""));
        assert!(!json.contains("password_hash"));
        assert!(!json.contains("token_hash"));
    }
}
