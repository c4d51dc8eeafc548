/// Error type for connection management, migrations and health checks.
///
/// Repository calls keep returning `sea_orm::DbErr`; domain crates wrap it in their own errors.
#[derive(Debug, thiserror::Error)]
pub enum DatabaseError {
    /// Connection failed after retries
    #[error("Connection failed: {0}")]
    ConnectionFailed(String),

    #[error("Health check failed: {0}")]
    HealthCheckFailed(String),

    #[error("Migration error: {0}")]
    MigrationError(String),
}
