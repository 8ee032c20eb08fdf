//! TCP transport for the REST adapter

use axum::Router;
use std::future::Future;
use std::net::SocketAddr;
use tokio::net::TcpListener;
use tracing::info;

/// Serve `app` on `addr` until `shutdown` resolves
pub async fn serve_on_tcp<F>(
    addr: SocketAddr,
    app: Router,
    shutdown: F,
) -> Result<(), Box<dyn std::error::Error>>
where
    F: Future<Output = ()> + Send + 'static,
{
    let listener = TcpListener::bind(addr).await?;
    info!("Dashboard listening on http://{}", listener.local_addr()?);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown)
        .await?;

    info!("Dashboard stopped");
    Ok(())
}
