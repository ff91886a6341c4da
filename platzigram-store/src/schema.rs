//! Idempotent schema provisioning
//!
//! Runs on every connect: the configured database is created if the server
//! does not have it yet, then the tables and their secondary indexes. Every
//! create is preceded by an existence check, so reconnecting against an
//! already-provisioned server is safe.

use sqlx::postgres::PgPoolOptions;
use sqlx::{Executor, PgPool};

use crate::config::StoreConfig;
use crate::error::Result;

/// Create the configured database if the server does not have it.
///
/// Goes through a short-lived maintenance connection, since the target
/// database may not exist yet.
pub async fn ensure_database(config: &StoreConfig) -> Result<()> {
    let admin = admin_pool(config).await?;

    let existing: Vec<(String,)> = sqlx::query_as("SELECT datname::text FROM pg_database")
        .fetch_all(&admin)
        .await?;

    if !existing.iter().any(|(name,)| name == &config.database) {
        tracing::info!(database = %config.database, "creating database");
        // CREATE DATABASE cannot be a prepared statement, run it raw
        let stmt = format!("CREATE DATABASE {}", quote_ident(&config.database));
        admin.execute(stmt.as_str()).await?;
    }

    admin.close().await;
    Ok(())
}

/// Drop the configured database if it exists.
///
/// Counterpart to [`ensure_database`]; used for maintenance and test
/// teardown. Fails while sessions are still connected to it.
pub async fn drop_database(config: &StoreConfig) -> Result<()> {
    let admin = admin_pool(config).await?;

    let stmt = format!("DROP DATABASE IF EXISTS {}", quote_ident(&config.database));
    admin.execute(stmt.as_str()).await?;

    admin.close().await;
    tracing::info!(database = %config.database, "dropped database");
    Ok(())
}

/// Create the tables and indexes that are not present yet.
pub async fn ensure_tables(pool: &PgPool) -> Result<()> {
    tracing::info!("provisioning tables");

    let existing: Vec<(String,)> =
        sqlx::query_as("SELECT tablename::text FROM pg_tables WHERE schemaname = 'public'")
            .fetch_all(pool)
            .await?;
    let has_table = |name: &str| existing.iter().any(|(table,)| table == name);

    if !has_table("images") {
        sqlx::query(
            r#"
            CREATE TABLE images (
                id UUID PRIMARY KEY DEFAULT gen_random_uuid(),
                public_id TEXT NOT NULL,
                description TEXT NOT NULL,
                tags TEXT[] NOT NULL DEFAULT '{}',
                url TEXT NOT NULL,
                user_id TEXT NOT NULL,
                created_at TIMESTAMPTZ NOT NULL,
                liked BOOLEAN NOT NULL DEFAULT FALSE,
                likes BIGINT NOT NULL DEFAULT 0
            )
            "#,
        )
        .execute(pool)
        .await?;
        sqlx::query("CREATE INDEX idx_images_created_at ON images (created_at DESC)")
            .execute(pool)
            .await?;
        tracing::info!("created table images");
    }

    if !has_table("users") {
        sqlx::query(
            r#"
            CREATE TABLE users (
                id UUID PRIMARY KEY DEFAULT gen_random_uuid(),
                username TEXT NOT NULL,
                password TEXT NOT NULL,
                created_at TIMESTAMPTZ NOT NULL
            )
            "#,
        )
        .execute(pool)
        .await?;
        sqlx::query("CREATE INDEX idx_users_username ON users (username)")
            .execute(pool)
            .await?;
        tracing::info!("created table users");
    }

    tracing::info!("provisioning complete");
    Ok(())
}

async fn admin_pool(config: &StoreConfig) -> Result<PgPool> {
    let admin = PgPoolOptions::new()
        .max_connections(1)
        .connect(&config.admin_url())
        .await?;
    Ok(admin)
}

/// Quote an identifier for interpolation into DDL.
fn quote_ident(name: &str) -> String {
    format!("\"{}\"", name.replace('"', "\"\""))
}
