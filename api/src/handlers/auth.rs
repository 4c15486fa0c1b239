//! Auth handlers
//!
//! Endpoints for member registration, login, and logout.

use axum::{extract::State, Extension, Json};
use serde::{Deserialize, Serialize};

use crate::domain::entities::Member;
use crate::error::AppError;
use crate::AppState;

/// Request body for member registration
#[derive(Debug, Deserialize)]
pub struct RegisterRequest {
    pub username: String,
    pub full_name: String,
    pub email: String,
    pub password: String,
}

/// Response body for member registration
#[derive(Debug, Serialize)]
pub struct RegisterResponse {
    pub id: String,
    pub username: String,
    pub rank: String,
    pub badge: String,
    pub message: String,
}

/// POST /auth/register
///
/// Register a new member at the catalog's entry rank.
pub async fn register(
    State(state): State<AppState>,
    Json(request): Json<RegisterRequest>,
) -> Result<Json<RegisterResponse>, AppError> {
    let member = state
        .member_service
        .register(
            &request.username,
            &request.full_name,
            &request.email,
            &request.password,
        )
        .await?;

    Ok(Json(RegisterResponse {
        id: member.id.to_string(),
        username: member.username.clone(),
        rank: member.rank.clone(),
        badge: member.badge.clone(),
        message: format!("Welcome, {}! Log in to receive a session token.", member.username),
    }))
}

/// Request body for login
#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

/// Response body for login
#[derive(Debug, Serialize)]
pub struct LoginResponse {
    /// Session token (Authorization: Bearer <token>); shown once
    pub token: String,
    pub username: String,
    pub full_name: String,
    pub rank: String,
    pub badge: String,
    pub work_time_minutes: u64,
}

/// POST /auth/login
pub async fn login(
    State(state): State<AppState>,
    Json(request): Json<LoginRequest>,
) -> Result<Json<LoginResponse>, AppError> {
    let (member, token) = state
        .member_service
        .login(&request.username, &request.password)
        .await?;

    Ok(Json(LoginResponse {
        token,
        username: member.username,
        full_name: member.full_name,
        rank: member.rank,
        badge: member.badge,
        work_time_minutes: member.work_time_minutes,
    }))
}

/// POST /auth/logout
pub async fn logout(
    State(state): State<AppState>,
    Extension(member): Extension<Member>,
) -> Result<Json<serde_json::Value>, AppError> {
    state.member_service.logout(&member.username).await?;
    Ok(Json(serde_json::json!({ "message": "Logged out" })))
}
