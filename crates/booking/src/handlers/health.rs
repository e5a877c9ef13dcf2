//! Health check endpoint used by the deployment platform.

use axum::{extract::State, Json};

use crate::{service::HealthStatus, state::AppState};

/// GET /health - Liveness probe.
///
/// Always 200; does not touch the store.
#[axum::debug_handler]
pub async fn health(State(state): State<AppState>) -> Json<HealthStatus> {
    Json(state.bookings.health_check())
}
