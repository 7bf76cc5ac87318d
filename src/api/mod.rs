//! HTTP surface.
//!
//! Thin axum adapter over [`MissionControl`]: every handler forwards to one
//! session operation and maps the result to JSON.

pub mod error;
pub mod handlers;
pub mod models;
pub mod routes;
pub mod state;

use tokio::net::TcpListener;

use crate::mission::MissionControl;

pub use error::{ApiError, ApiResult};
pub use routes::app;
pub use state::AppState;

/// Serves the API on `listener` until `shutdown` resolves.
pub async fn serve<F>(listener: TcpListener, mission: MissionControl, shutdown: F) -> std::io::Result<()>
where
    F: std::future::Future<Output = ()> + Send + 'static,
{
    let router = app(AppState::new(mission));
    if let Ok(addr) = listener.local_addr() {
        tracing::info!(%addr, "rover API listening");
    }
    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown)
        .await
}
