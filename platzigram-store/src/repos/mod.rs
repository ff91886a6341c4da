//! Repository implementations for record access
//!
//! Each repository borrows the pool and follows these patterns:
//! - Writes use RETURNING, so callers see the row as stored
//! - Absent records are an explicit NotFound, never an empty success
//! - Multi-step read-modify-write is avoided; mutations are single statements

pub mod images;
pub mod users;

pub use images::ImageRepo;
pub use users::UserRepo;

use crate::error::StoreError;

/// Map an insert failure: store-reported rejections become `Persistence`
/// with the store's own message, everything else stays a driver error.
pub(crate) fn write_error(err: sqlx::Error) -> StoreError {
    match err {
        sqlx::Error::Database(db) => StoreError::Persistence(db.message().to_string()),
        other => StoreError::Database(other),
    }
}
