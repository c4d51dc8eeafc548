//! Resource cleanup after the server stops accepting requests.

use std::future::Future;
use std::time::Duration;
use tracing::{error, info, warn};

/// Close the sea-orm pool, logging the outcome.
pub async fn close_postgres(db: sea_orm::DatabaseConnection) {
    match db.close().await {
        Ok(()) => info!("PostgreSQL connection pool closed"),
        Err(e) => error!("Error closing PostgreSQL connection pool: {}", e),
    }
}

/// Run `cleanup`, abandoning it after `timeout`.
///
/// Returns `false` when the timeout fired.
pub async fn run_cleanup<F>(cleanup: F, timeout: Duration) -> bool
where
    F: Future<Output = ()>,
{
    info!("Starting cleanup tasks (timeout: {:?})", timeout);
    match tokio::time::timeout(timeout, cleanup).await {
        Ok(()) => {
            info!("Cleanup completed");
            true
        }
        Err(_) => {
            warn!("Cleanup exceeded timeout of {:?}, forcing shutdown", timeout);
            false
        }
    }
}
