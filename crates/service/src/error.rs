//! Service-level error types.

use thiserror::Error;

/// Errors produced by the department service.
#[derive(Debug, Error)]
pub enum ServiceError {
    /// A caller-supplied value fails a business rule.  The message is safe
    /// to echo back to the client.
    #[error("{0}")]
    InvalidArgument(String),

    /// A lookup or aggregation matched nothing.  The message is the
    /// client-facing detail string.
    #[error("{0}")]
    NotFound(String),

    /// Persistence error from the db crate.  Never shown to clients verbatim.
    #[error("database error: {0}")]
    Database(#[from] db::DbError),
}
