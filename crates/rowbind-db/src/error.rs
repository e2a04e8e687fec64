//! Database error types for rowbind-db.

use rowbind_core::EntityError;
use thiserror::Error;

/// Errors from store and gateway operations.
#[derive(Debug, Error)]
pub enum DatabaseError {
    /// The entity was rejected before any statement ran.
    #[error(transparent)]
    Entity(#[from] EntityError),

    /// A column came back with a storage class `Value` cannot hold.
    #[error("Unsupported value in column '{column}': {kind}")]
    UnsupportedColumn { column: String, kind: String },

    /// Underlying libSQL error.
    #[error("libSQL error: {0}")]
    LibSql(#[from] libsql::Error),

    /// A statement failed in a gateway that does not speak libSQL.
    #[error("Query failed: {0}")]
    Query(String),

    /// Catch-all for unexpected errors.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl DatabaseError {
    /// Whether the failure came from storage rather than from the caller.
    pub const fn is_storage(&self) -> bool {
        matches!(self, Self::LibSql(_) | Self::Query(_) | Self::Other(_))
    }
}
