use axum::{body::Bytes, extract::State, Json};
use tracing::{info, instrument};
use uuid::Uuid;

use super::{error::ApiError, AppState};
use crate::domain::{DispatchResult, PlantOutput};
use crate::payload;

/// POST /productionplan - Compute the cheapest production plan for a load
///
/// The body is read raw so that malformed JSON is reported like every other
/// invalid payload.
pub async fn production_plan(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<Json<Vec<PlantOutput>>, ApiError> {
    let result = tokio::task::spawn_blocking(move || plan_production(&state, &body)).await??;
    Ok(Json(result.outputs))
}

#[instrument(skip_all, fields(request_id = %Uuid::new_v4()))]
fn plan_production(state: &AppState, body: &[u8]) -> Result<DispatchResult, ApiError> {
    let request = payload::validate_slice(body)?;

    let limit = state.cfg.dispatch.max_plants;
    if request.plants.len() > limit {
        return Err(ApiError::TooManyPlants {
            count: request.plants.len(),
            limit,
        });
    }

    info!(
        load = request.load,
        plants = request.plants.len(),
        "computing production plan"
    );
    let result = state.planner.plan(&request)?;
    info!(
        dispatched = result.outputs.len(),
        total_cost = result.total_cost,
        "production plan ready"
    );

    Ok(result)
}
