//! Rank catalog handler

use axum::{extract::State, Json};

use crate::domain::Badge;
use crate::AppState;

/// GET /catalog/badges
///
/// The full badge ladder in promotion order.
pub async fn list_badges(State(state): State<AppState>) -> Json<Vec<Badge>> {
    Json(state.catalog.badges().to_vec())
}
