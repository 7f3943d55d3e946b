//! Painting entity model and DTOs.

use muse_core::types::{DbId, Timestamp};
use serde::Serialize;
use sqlx::FromRow;

/// A row from the `paintings` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Painting {
    pub id: DbId,
    pub title: String,
    pub creator_id: DbId,
    pub prompt: Option<String>,
    pub inspiration_image_url: Option<String>,
    pub width: Option<i32>,
    pub height: Option<i32>,
    pub created_at: Timestamp,
}

/// DTO for creating a new painting.
#[derive(Debug, Clone)]
pub struct CreatePainting {
    pub title: String,
    pub creator_id: DbId,
    pub prompt: Option<String>,
    pub inspiration_image_url: Option<String>,
    pub width: Option<i32>,
    pub height: Option<i32>,
}
