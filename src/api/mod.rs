pub mod error;
pub mod health;
pub mod production_plan;

use axum::{
    extract::DefaultBodyLimit,
    routing::{get, post},
    Router,
};
use std::{sync::Arc, time::Duration};
use tower::ServiceBuilder;
use tower_http::{timeout::TimeoutLayer, trace::TraceLayer};

use crate::{config::Config, optimizer::ProductionPlanner};

#[derive(Clone)]
pub struct AppState {
    pub cfg: Arc<Config>,
    pub planner: Arc<ProductionPlanner>,
}

impl AppState {
    pub fn new(cfg: Config) -> Self {
        Self {
            cfg: Arc::new(cfg),
            planner: Arc::new(ProductionPlanner::default()),
        }
    }
}

pub fn router(state: AppState) -> Router {
    let server = state.cfg.server.clone();

    Router::new()
        .route("/productionplan", post(production_plan::production_plan))
        .route("/productionplan/", post(production_plan::production_plan))
        .route("/health/live", get(health::liveness_check))
        .route("/health/ready", get(health::readiness_check))
        .with_state(state)
        .layer(
            ServiceBuilder::new()
                .layer(DefaultBodyLimit::max(server.body_limit_bytes))
                .layer(TimeoutLayer::new(Duration::from_secs(server.request_timeout_secs))),
        )
        .layer(TraceLayer::new_for_http())
}
