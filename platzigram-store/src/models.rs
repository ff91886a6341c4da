//! Record and input types for the store

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// Image record as stored
#[derive(Debug, Clone, PartialEq, FromRow, Serialize, Deserialize)]
pub struct Image {
    pub id: Uuid,
    pub public_id: String,
    pub description: String,
    pub tags: Vec<String>,
    pub url: String,
    pub user_id: String,
    pub created_at: DateTime<Utc>,
    pub liked: bool,
    pub likes: i64,
}

/// User record as stored; `password` is always the hashed form
#[derive(Debug, Clone, PartialEq, FromRow, Serialize, Deserialize)]
pub struct User {
    pub id: Uuid,
    pub username: String,
    pub password: String,
    pub created_at: DateTime<Utc>,
}

/// Input for creating an image
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewImage {
    pub description: String,
    pub url: String,
    pub user_id: String,
    #[serde(default)]
    pub likes: i64,
}

/// Input for creating a user; `password` is plaintext here and hashed
/// before it is stored
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewUser {
    pub username: String,
    pub password: String,
}
