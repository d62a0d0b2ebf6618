//! Service-level error types.

use courier_postgres::PgError;
use thiserror::Error;

/// Errors that can occur while initializing or running the service.
#[derive(Debug, Error)]
pub enum ServiceError {
    /// Service configuration is invalid.
    #[error("invalid service configuration: {0}")]
    Config(String),

    /// Database layer failed.
    #[error(transparent)]
    Postgres(#[from] PgError),
}

/// A specialized [`Result`] type for service operations.
///
/// [`Result`]: std::result::Result
pub type Result<T, E = ServiceError> = std::result::Result<T, E>;
