//! mc-dashboardd
//!
//! Supervises one game server process and serves the web dashboard.
//! Configuration comes from `MCD_*` environment variables, see `DaemonConfig`.

#[path = "daemon/config.rs"]
mod config;

use config::DaemonConfig;
use mcd_engine::adapters::rest::{build_router, serve_on_tcp};
use mcd_engine::infrastructure::TokioProcessLauncher;
use mcd_engine::Dashboard;
use std::sync::Arc;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = DaemonConfig::from_env();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(&config.log_level))
        .init();

    config.validate()?;
    let addr = config.listen_addr()?;

    info!(
        addr = %addr,
        server_dir = %config.server_dir.display(),
        auto_start = config.auto_start,
        "Starting dashboard daemon"
    );

    let dashboard = Arc::new(Dashboard::new(
        Arc::new(TokioProcessLauncher),
        config.launch_spec(),
    ));

    if config.auto_start {
        if let Err(e) = dashboard.supervisor().start().await {
            error!(error = %e, "Initial server start failed");
            return Err(e.into());
        }
    }

    serve_on_tcp(addr, build_router(dashboard), shutdown_signal()).await?;

    info!("Dashboard daemon stopped");
    Ok(())
}

async fn shutdown_signal() {
    if tokio::signal::ctrl_c().await.is_ok() {
        info!("Received Ctrl+C, shutting down");
    }
}
