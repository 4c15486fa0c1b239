//! Session token authentication middleware

use axum::{body::Body, extract::State, http::Request, middleware::Next, response::Response};

use crate::app::hash_secret;
use crate::error::AppError;
use crate::AppState;

/// Extract the session token from the Authorization header
fn extract_token(request: &Request<Body>) -> Option<&str> {
    request
        .headers()
        .get("Authorization")
        .and_then(|h| h.to_str().ok())
        .and_then(|h| h.strip_prefix("Bearer "))
}

/// Authentication middleware
///
/// Validates the session token and injects the Member into request
/// extensions. Routes that require authentication should use this
/// middleware.
pub async fn auth_middleware(
    State(state): State<AppState>,
    mut request: Request<Body>,
    next: Next,
) -> Result<Response, AppError> {
    let token = extract_token(&request).ok_or(AppError::Unauthorized)?;

    let token_hash = hash_secret(token);

    let member = state
        .member_service
        .find_by_token_hash(&token_hash)
        .await?
        .ok_or(AppError::Unauthorized)?;

    request.extensions_mut().insert(member);

    Ok(next.run(request).await)
}
