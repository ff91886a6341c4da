//! User repository
//!
//! Passwords are hashed before they reach the store; plaintext is never
//! persisted or logged. Username uniqueness is not enforced here, lookups
//! take the first match.

use chrono::Utc;
use platzigram_core::password;
use sqlx::PgPool;

use crate::error::{Result, StoreError};
use crate::models::{NewUser, User};

use super::write_error;

/// User repository
pub struct UserRepo<'a> {
    pool: &'a PgPool,
}

impl<'a> UserRepo<'a> {
    pub fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// Create a user with a hashed password.
    pub async fn create(&self, new_user: NewUser) -> Result<User> {
        let password = password::hash(&new_user.password);
        let created_at = Utc::now();

        let user: User = sqlx::query_as(
            r#"
            INSERT INTO users (username, password, created_at)
            VALUES ($1, $2, $3)
            RETURNING id, username, password, created_at
            "#,
        )
        .bind(&new_user.username)
        .bind(&password)
        .bind(created_at)
        .fetch_one(self.pool)
        .await
        .map_err(write_error)?;

        Ok(user)
    }

    /// Get a user by username.
    pub async fn get_by_username(&self, username: &str) -> Result<User> {
        let user: User = sqlx::query_as(
            r#"
            SELECT id, username, password, created_at
            FROM users
            WHERE username = $1
            LIMIT 1
            "#,
        )
        .bind(username)
        .fetch_optional(self.pool)
        .await?
        .ok_or_else(|| StoreError::NotFound {
            resource: "user",
            id: username.to_owned(),
        })?;

        Ok(user)
    }
}
