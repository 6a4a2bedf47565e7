// src/application/background.rs
//
// Use-cases are synchronous and hit SQLite; view-state models run them on
// tokio's blocking pool. A spawned task runs to completion even when the
// awaiting future is dropped.

use crate::error::AppResult;
use crate::services::OperationResult;

pub(crate) async fn run_blocking<T, F>(f: F) -> AppResult<T>
where
    F: FnOnce() -> AppResult<T> + Send + 'static,
    T: Send + 'static,
{
    tokio::task::spawn_blocking(f).await?
}

pub(crate) async fn run_operation<F>(f: F) -> OperationResult
where
    F: FnOnce() -> OperationResult + Send + 'static,
{
    match tokio::task::spawn_blocking(f).await {
        Ok(result) => result,
        Err(e) => OperationResult::from_result("Background operation", Err(e.into())),
    }
}
