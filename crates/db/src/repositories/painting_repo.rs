//! Repository for the `paintings` table.

use muse_core::types::DbId;
use sqlx::PgPool;

use crate::models::painting::{CreatePainting, Painting};

/// Column list for `paintings` queries.
const COLUMNS: &str = "\
    id, title, creator_id, prompt, inspiration_image_url, \
    width, height, created_at";

/// Provides data access for paintings.
pub struct PaintingRepo;

impl PaintingRepo {
    /// List every painting, oldest first.
    pub async fn list(pool: &PgPool) -> Result<Vec<Painting>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM paintings ORDER BY id");
        sqlx::query_as::<_, Painting>(&query).fetch_all(pool).await
    }

    /// Find a painting by its internal ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Painting>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM paintings WHERE id = $1");
        sqlx::query_as::<_, Painting>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Insert a new painting, returning the created row.
    ///
    /// Fails with a foreign key violation when `creator_id` does not exist.
    pub async fn create(pool: &PgPool, input: &CreatePainting) -> Result<Painting, sqlx::Error> {
        let query = format!(
            "INSERT INTO paintings \
                 (title, creator_id, prompt, inspiration_image_url, width, height) \
             VALUES ($1, $2, $3, $4, $5, $6) \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Painting>(&query)
            .bind(&input.title)
            .bind(input.creator_id)
            .bind(&input.prompt)
            .bind(&input.inspiration_image_url)
            .bind(input.width)
            .bind(input.height)
            .fetch_one(pool)
            .await
    }

    /// Replace the title of a painting.
    ///
    /// Returns `None` if no painting with the given `id` exists.
    pub async fn update_title(
        pool: &PgPool,
        id: DbId,
        title: &str,
    ) -> Result<Option<Painting>, sqlx::Error> {
        let query = format!("UPDATE paintings SET title = $2 WHERE id = $1 RETURNING {COLUMNS}");
        sqlx::query_as::<_, Painting>(&query)
            .bind(id)
            .bind(title)
            .fetch_optional(pool)
            .await
    }
}
