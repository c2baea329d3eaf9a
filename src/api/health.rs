use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use serde::Serialize;

use super::AppState;

/// Readiness response
#[derive(Debug, Serialize)]
pub struct ReadinessResponse {
    status: String,
    strategy: String,
    timestamp: chrono::DateTime<chrono::Utc>,
}

/// GET /health/ready - Readiness probe
///
/// The service holds no external dependencies, so it is ready as soon as it
/// serves requests.
pub async fn readiness_check(State(state): State<AppState>) -> impl IntoResponse {
    let response = ReadinessResponse {
        status: "ready".to_string(),
        strategy: state.planner.strategy.name().to_string(),
        timestamp: chrono::Utc::now(),
    };
    (StatusCode::OK, Json(response))
}

/// GET /health/live - Liveness probe
pub async fn liveness_check() -> impl IntoResponse {
    StatusCode::OK
}
