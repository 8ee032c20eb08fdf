//! REST API router configuration

use super::handlers::{
    exec_command, get_logs, get_status, index, start_server, static_asset, AppState,
};
use axum::{
    routing::{get, post},
    Router,
};
use tower_http::trace::TraceLayer;

/// Build the dashboard router
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(index))
        // Views
        .route("/logs", get(get_logs))
        .route("/status", get(get_status))
        // Server control
        .route("/exec", post(exec_command))
        .route("/start", post(start_server))
        // Bundled assets
        .route("/static/*path", get(static_asset))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
