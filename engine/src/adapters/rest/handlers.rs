//! Dashboard HTTP handlers using axum

use super::{assets, templates};
use crate::application::Dashboard;
use axum::{
    extract::{Path, State},
    http::{header, StatusCode},
    response::{Html, IntoResponse, Redirect, Response},
    Form,
};
use serde::Deserialize;
use std::sync::Arc;
use tracing::{debug, error, info};

/// Shared application state
pub type AppState = Arc<Dashboard>;

/// Command form posted by the console view
#[derive(Deserialize)]
pub struct ExecForm {
    #[serde(default)]
    pub command: String,
}

// ===== Handlers =====

/// GET / - Redirect to the console view
pub async fn index() -> Redirect {
    Redirect::temporary("/logs")
}

/// GET /logs - Console output with the command form
pub async fn get_logs(State(dashboard): State<AppState>) -> Html<String> {
    let logs = dashboard.logs().snapshot_string();
    debug!(bytes = logs.len(), "Rendering logs");
    Html(templates::render_logs(&logs))
}

/// GET /status - Process status
pub async fn get_status(State(dashboard): State<AppState>) -> Html<String> {
    let status = dashboard.supervisor().status().await;
    Html(templates::render_status(&status))
}

/// POST /exec - Send a command line to the server's stdin
pub async fn exec_command(
    State(dashboard): State<AppState>,
    Form(form): Form<ExecForm>,
) -> Result<Redirect, (StatusCode, String)> {
    info!(command = %form.command, "REST Exec request");

    dashboard
        .supervisor()
        .submit_command(&form.command)
        .await
        .map_err(|e| {
            error!(error = %e, "Exec failed");
            (StatusCode::INTERNAL_SERVER_ERROR, e.to_string())
        })?;

    Ok(Redirect::to("/logs"))
}

/// POST /start - Launch the server
pub async fn start_server(
    State(dashboard): State<AppState>,
) -> Result<&'static str, (StatusCode, String)> {
    info!("REST Start request");

    dashboard.supervisor().start().await.map_err(|e| {
        error!(error = %e, "Start failed");
        (StatusCode::INTERNAL_SERVER_ERROR, e.to_string())
    })?;

    Ok("server started")
}

/// GET /static/*path - Bundled stylesheet and script
pub async fn static_asset(Path(path): Path<String>) -> Response {
    match assets::lookup(&path) {
        Some(asset) => ([(header::CONTENT_TYPE, asset.content_type)], asset.body).into_response(),
        None => (StatusCode::NOT_FOUND, "not found").into_response(),
    }
}
