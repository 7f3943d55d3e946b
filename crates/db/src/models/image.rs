//! Stored image metadata.
//!
//! The pixels live in the image storage directory; this table records what
//! each file is and where it came from.

use muse_core::images::{ImageCategory, ResourceOrigin};
use muse_core::types::{DbId, Timestamp};
use serde::Serialize;
use sqlx::FromRow;

/// A row from the `images` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct ImageRecord {
    pub id: DbId,
    pub image_name: String,
    /// `internal` or `external`, see [`ResourceOrigin`].
    pub origin: String,
    /// See [`ImageCategory`].
    pub category: String,
    pub width: i32,
    pub height: i32,
    pub session_id: Option<String>,
    pub node_id: Option<String>,
    pub is_intermediate: bool,
    pub created_at: Timestamp,
}

/// DTO for recording a newly written image.
#[derive(Debug, Clone)]
pub struct CreateImageRecord {
    pub image_name: String,
    pub origin: ResourceOrigin,
    pub category: ImageCategory,
    pub width: i32,
    pub height: i32,
    pub session_id: Option<String>,
    pub node_id: Option<String>,
    pub is_intermediate: bool,
}
