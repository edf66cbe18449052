//! Graceful shutdown trigger

use std::future::Future;
use std::io;
use tracing::{error, info};

/// Resolves on Ctrl-C
pub async fn ctrl_c() {
    until_signal(tokio::signal::ctrl_c()).await
}

/// Resolves when `signal` fires.
///
/// If the signal handler could not be installed this never resolves, so the
/// server keeps running instead of shutting down at once.
pub async fn until_signal<F>(signal: F)
where
    F: Future<Output = io::Result<()>>,
{
    match signal.await {
        Ok(()) => info!("[API] Shutdown signal received"),
        Err(e) => {
            error!("[API] Failed to listen for shutdown signal: {}", e);
            std::future::pending::<()>().await;
        }
    }
}
