pub mod health;
pub mod mars;
pub mod rover;

use crate::api::error::{ApiError, ApiResult};

/// Runs a session operation on the blocking pool.
///
/// Session calls hold a synchronous lock and map generation is CPU-bound, so
/// neither runs on the async workers.
pub(crate) async fn blocking<T, F>(f: F) -> ApiResult<T>
where
    F: FnOnce() -> crate::Result<T> + Send + 'static,
    T: Send + 'static,
{
    tokio::task::spawn_blocking(f)
        .await
        .map_err(|e| ApiError::Internal(e.to_string()))?
        .map_err(ApiError::from)
}
