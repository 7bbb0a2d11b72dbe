//! HTTP service exposing categorization to the dashboard front end.

mod error;
mod handlers;
mod middleware;
mod router;
mod state;

pub use error::ApiError;
pub use router::build_router;
pub use state::{AppState, SharedState};

use log::info;
use std::future::Future;

/// Serve on `addr` until `shutdown` resolves.
pub async fn run_server(
    addr: &str,
    state: SharedState,
    shutdown: impl Future<Output = ()> + Send + 'static,
) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    let app = build_router(state);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    info!("[server] Listening on http://{}", listener.local_addr()?);

    axum::serve(listener, app)
        .with_graceful_shutdown(async move {
            shutdown.await;
            info!("[server] Shutting down");
        })
        .await?;

    Ok(())
}
