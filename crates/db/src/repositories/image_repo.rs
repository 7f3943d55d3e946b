//! Repository for the `images` table.

use sqlx::PgPool;

use crate::models::image::{CreateImageRecord, ImageRecord};

const COLUMNS: &str = "\
    id, image_name, origin, category, width, height, \
    session_id, node_id, is_intermediate, created_at";

/// Provides data access for stored image metadata.
pub struct ImageRepo;

impl ImageRepo {
    /// Record a newly written image.
    pub async fn create(
        pool: &PgPool,
        input: &CreateImageRecord,
    ) -> Result<ImageRecord, sqlx::Error> {
        let query = format!(
            "INSERT INTO images \
                 (image_name, origin, category, width, height, \
                  session_id, node_id, is_intermediate) \
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8) \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, ImageRecord>(&query)
            .bind(&input.image_name)
            .bind(input.origin.name())
            .bind(input.category.name())
            .bind(input.width)
            .bind(input.height)
            .bind(&input.session_id)
            .bind(&input.node_id)
            .bind(input.is_intermediate)
            .fetch_one(pool)
            .await
    }

    /// Find an image by its file name.
    pub async fn find_by_name(
        pool: &PgPool,
        image_name: &str,
    ) -> Result<Option<ImageRecord>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM images WHERE image_name = $1");
        sqlx::query_as::<_, ImageRecord>(&query)
            .bind(image_name)
            .fetch_optional(pool)
            .await
    }
}
