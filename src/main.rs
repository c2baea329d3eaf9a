use anyhow::Result;
use production_plan::{api, config, telemetry};
use config::Config;
use telemetry::init_tracing;
use tracing::{info, warn};

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let cfg = Config::load()?;
    init_tracing(&cfg.logging)?;
    let addr = cfg.server.socket_addr()?;

    if cfg.server.host == "0.0.0.0" {
        warn!("Server binding to 0.0.0.0 - service will be accessible from network");
    }

    info!(
        %addr,
        max_plants = cfg.dispatch.max_plants,
        "starting production plan service"
    );

    let app = api::router(api::AppState::new(cfg));

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(telemetry::shutdown_signal())
        .await?;

    warn!("shutdown complete");
    Ok(())
}
