//! The Store facade
//!
//! A `Store` holds its configuration and, once connected, the pool. The
//! `Option<PgPool>` is the ready flag: every operation resolves the pool
//! through the guard and fails with `NotConnected` before touching the
//! database. `connect`/`disconnect` take `&mut self`, so the pool cannot be
//! swapped out from under in-flight operations.

use sqlx::postgres::PgPoolOptions;
use sqlx::PgPool;

use crate::config::StoreConfig;
use crate::error::{Result, StoreError};
use crate::models::{Image, NewImage, NewUser, User};
use crate::repos::{ImageRepo, UserRepo};
use crate::schema;

#[derive(Debug)]
pub struct Store {
    config: StoreConfig,
    pool: Option<PgPool>,
}

impl Store {
    /// Create a store from explicit configuration; not yet connected.
    pub fn new(config: StoreConfig) -> Self {
        Self { config, pool: None }
    }

    pub fn config(&self) -> &StoreConfig {
        &self.config
    }

    pub fn is_connected(&self) -> bool {
        self.pool.is_some()
    }

    fn pool(&self) -> Result<&PgPool> {
        self.pool.as_ref().ok_or(StoreError::NotConnected)
    }

    /// Connect and provision.
    ///
    /// No-op when already connected. Otherwise creates the database if the
    /// server does not have it, opens the pool, and creates any missing
    /// tables and indexes before the store is marked ready.
    pub async fn connect(&mut self) -> Result<()> {
        if self.pool.is_some() {
            return Ok(());
        }

        tracing::info!(database = %self.config.database, "connecting store");
        schema::ensure_database(&self.config).await?;

        let pool = PgPoolOptions::new()
            .max_connections(self.config.max_connections)
            .connect(&self.config.url())
            .await?;
        schema::ensure_tables(&pool).await?;

        self.pool = Some(pool);
        tracing::info!("store connected");
        Ok(())
    }

    /// Close the pool and clear the ready flag.
    ///
    /// The configuration stays, so a later `connect` re-establishes.
    pub async fn disconnect(&mut self) -> Result<()> {
        let pool = self.pool.take().ok_or(StoreError::NotConnected)?;
        pool.close().await;
        tracing::info!("store disconnected");
        Ok(())
    }

    /// Create an image from caller input.
    pub async fn save_image(&self, new_image: NewImage) -> Result<Image> {
        ImageRepo::new(self.pool()?).create(new_image).await
    }

    /// Mark an image liked and bump its counter.
    pub async fn like_image(&self, public_id: &str) -> Result<Image> {
        ImageRepo::new(self.pool()?).like(public_id).await
    }

    /// Get a single image by public id.
    pub async fn get_image(&self, public_id: &str) -> Result<Image> {
        ImageRepo::new(self.pool()?).get(public_id).await
    }

    /// List all images, newest first.
    pub async fn get_images(&self) -> Result<Vec<Image>> {
        ImageRepo::new(self.pool()?).list().await
    }

    /// Create a user; the password is hashed before it is stored.
    pub async fn save_user(&self, new_user: NewUser) -> Result<User> {
        UserRepo::new(self.pool()?).create(new_user).await
    }

    /// Get a user by username.
    pub async fn get_user(&self, username: &str) -> Result<User> {
        UserRepo::new(self.pool()?).get_by_username(username).await
    }
}
