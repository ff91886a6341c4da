//! Error types for platzigram-store

use thiserror::Error;

/// Result type alias for store operations
pub type Result<T> = std::result::Result<T, StoreError>;

#[derive(Error, Debug)]
pub enum StoreError {
    /// An operation was invoked while the store is not connected
    #[error("store is not connected")]
    NotConnected,

    /// The store rejected a write; carries the store's own message
    #[error("write rejected: {0}")]
    Persistence(String),

    /// A lookup addressed a record that does not exist
    #[error("not found: {resource} '{id}'")]
    NotFound { resource: &'static str, id: String },

    /// A public identifier that does not decode to a storage key
    #[error("invalid public id '{0}'")]
    InvalidPublicId(String),

    /// Transport or driver failure underneath an operation
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),
}
