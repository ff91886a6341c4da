//! platzigram-store: PostgreSQL persistence for platzigram images and users
//!
//! Owns the connection lifecycle, provisions its own database and tables on
//! connect, and exposes the record operations behind a connected guard.

pub mod config;
pub mod error;
pub mod models;
pub mod repos;
pub mod schema;
pub mod store;

pub use config::StoreConfig;
pub use error::{Result, StoreError};
pub use models::{Image, NewImage, NewUser, User};
pub use store::Store;
