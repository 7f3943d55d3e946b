//! Painting CRUD operations behind the GraphQL resolvers.
//!
//! Field constraints are checked here before anything is written; the
//! database enforces them again through column types and the creator FK.

use muse_core::error::CoreError;
use muse_core::painting::{validate_inspiration_url, validate_title};
use muse_core::types::DbId;
use muse_db::models::painting::{CreatePainting, Painting};
use muse_db::repositories::{PaintingRepo, UserRepo};
use muse_db::DbPool;

use crate::error::AppResult;

/// Every painting, ordered by id.
pub async fn list(pool: &DbPool) -> AppResult<Vec<Painting>> {
    Ok(PaintingRepo::list(pool).await?)
}

/// One painting, or `NotFound`.
pub async fn get(pool: &DbPool, id: DbId) -> AppResult<Painting> {
    PaintingRepo::find_by_id(pool, id)
        .await?
        .ok_or_else(|| not_found(id).into())
}

/// Validate and insert a painting. The creator must exist.
pub async fn create(pool: &DbPool, input: &CreatePainting) -> AppResult<Painting> {
    validate_title(&input.title)?;
    validate_inspiration_url(input.inspiration_image_url.as_deref())?;

    if UserRepo::find_by_id(pool, input.creator_id).await?.is_none() {
        return Err(CoreError::NotFound {
            entity: "User",
            id: input.creator_id,
        }
        .into());
    }

    let painting = PaintingRepo::create(pool, input).await?;
    tracing::info!(
        painting_id = painting.id,
        creator_id = painting.creator_id,
        title = %painting.title,
        "Painting created",
    );
    Ok(painting)
}

/// Replace a painting's title. Nothing else changes.
pub async fn update_title(pool: &DbPool, id: DbId, title: &str) -> AppResult<Painting> {
    validate_title(title)?;

    let painting = PaintingRepo::update_title(pool, id, title)
        .await?
        .ok_or_else(|| not_found(id))?;
    tracing::info!(painting_id = id, title = %painting.title, "Painting title updated");
    Ok(painting)
}

fn not_found(id: DbId) -> CoreError {
    CoreError::NotFound {
        entity: "Painting",
        id,
    }
}
