//! Image repository
//!
//! Handles image records with:
//! - Single-write creation; the id is issued by the store before insert,
//!   so every row carries its public id from the moment it exists
//! - Atomic like increment (no read-modify-write)

use chrono::Utc;
use platzigram_core::{shortid, tags};
use sqlx::PgPool;
use uuid::Uuid;

use crate::error::{Result, StoreError};
use crate::models::{Image, NewImage};

use super::write_error;

/// Image repository
pub struct ImageRepo<'a> {
    pool: &'a PgPool,
}

impl<'a> ImageRepo<'a> {
    pub fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// Create an image.
    ///
    /// Asks the store for an identifier first, derives the public id and
    /// the tags, stamps the creation time, and inserts the complete row in
    /// one write.
    pub async fn create(&self, new_image: NewImage) -> Result<Image> {
        let (id,): (Uuid,) = sqlx::query_as("SELECT gen_random_uuid()")
            .fetch_one(self.pool)
            .await?;

        let public_id = shortid::encode(id);
        let tags = tags::extract_tags(&new_image.description);
        let created_at = Utc::now();

        let image: Image = sqlx::query_as(
            r#"
            INSERT INTO images (id, public_id, description, tags, url, user_id, created_at, liked, likes)
            VALUES ($1, $2, $3, $4, $5, $6, $7, FALSE, $8)
            RETURNING id, public_id, description, tags, url, user_id, created_at, liked, likes
            "#,
        )
        .bind(id)
        .bind(&public_id)
        .bind(&new_image.description)
        .bind(&tags)
        .bind(&new_image.url)
        .bind(&new_image.user_id)
        .bind(created_at)
        .bind(new_image.likes)
        .fetch_one(self.pool)
        .await
        .map_err(write_error)?;

        Ok(image)
    }

    /// Mark an image liked and bump its counter.
    ///
    /// Single atomic statement; concurrent likes on the same image
    /// serialize inside the store instead of losing updates.
    pub async fn like(&self, public_id: &str) -> Result<Image> {
        let id = decode_public_id(public_id)?;

        let image: Image = sqlx::query_as(
            r#"
            UPDATE images
            SET liked = TRUE, likes = likes + 1
            WHERE id = $1
            RETURNING id, public_id, description, tags, url, user_id, created_at, liked, likes
            "#,
        )
        .bind(id)
        .fetch_optional(self.pool)
        .await?
        .ok_or_else(|| StoreError::NotFound {
            resource: "image",
            id: public_id.to_owned(),
        })?;

        Ok(image)
    }

    /// Get a single image by public id.
    pub async fn get(&self, public_id: &str) -> Result<Image> {
        let id = decode_public_id(public_id)?;

        let image: Image = sqlx::query_as(
            r#"
            SELECT id, public_id, description, tags, url, user_id, created_at, liked, likes
            FROM images
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(self.pool)
        .await?
        .ok_or_else(|| StoreError::NotFound {
            resource: "image",
            id: public_id.to_owned(),
        })?;

        Ok(image)
    }

    /// List all images, newest first.
    pub async fn list(&self) -> Result<Vec<Image>> {
        let images = sqlx::query_as(
            r#"
            SELECT id, public_id, description, tags, url, user_id, created_at, liked, likes
            FROM images
            ORDER BY created_at DESC
            "#,
        )
        .fetch_all(self.pool)
        .await?;

        Ok(images)
    }
}

fn decode_public_id(public_id: &str) -> Result<Uuid> {
    shortid::decode(public_id).map_err(|_| StoreError::InvalidPublicId(public_id.to_owned()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn malformed_public_id_is_rejected_before_any_query() {
        let err = decode_public_id("not a public id").unwrap_err();
        assert!(matches!(err, StoreError::InvalidPublicId(_)));
    }

    #[test]
    fn well_formed_public_id_decodes() {
        let id = Uuid::new_v4();
        assert_eq!(decode_public_id(&shortid::encode(id)).unwrap(), id);
    }
}
