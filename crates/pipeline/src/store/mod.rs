//! Image storage.
//!
//! Pixels are kept as PNG files; each file has a metadata record describing
//! its origin, category and the session/node that produced it.

mod local;
mod memory;

pub use local::LocalImageStore;
pub use memory::MemoryImageStore;

use async_trait::async_trait;
use image::DynamicImage;
use serde::Serialize;

use muse_core::error::CoreError;
use muse_core::images::{ImageCategory, ResourceOrigin};
use muse_core::types::Timestamp;
use muse_db::models::image::ImageRecord;

use crate::PipelineError;

/// Tags attached to an image when it is stored.
#[derive(Debug, Clone, PartialEq)]
pub struct NewImage {
    pub origin: ResourceOrigin,
    pub category: ImageCategory,
    pub session_id: Option<String>,
    pub node_id: Option<String>,
    pub is_intermediate: bool,
}

impl NewImage {
    /// A client upload.
    pub fn upload() -> Self {
        Self {
            origin: ResourceOrigin::External,
            category: ImageCategory::User,
            session_id: None,
            node_id: None,
            is_intermediate: false,
        }
    }

    /// A processor output.
    pub fn control(
        session_id: Option<String>,
        node_id: Option<String>,
        is_intermediate: bool,
    ) -> Self {
        Self {
            origin: ResourceOrigin::Internal,
            category: ImageCategory::Control,
            session_id,
            node_id,
            is_intermediate,
        }
    }
}

/// Metadata of a stored image.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StoredImage {
    pub image_name: String,
    pub origin: ResourceOrigin,
    pub category: ImageCategory,
    pub width: u32,
    pub height: u32,
    pub session_id: Option<String>,
    pub node_id: Option<String>,
    pub is_intermediate: bool,
    pub created_at: Timestamp,
}

impl TryFrom<ImageRecord> for StoredImage {
    type Error = PipelineError;

    fn try_from(record: ImageRecord) -> Result<Self, Self::Error> {
        Ok(Self {
            origin: ResourceOrigin::from_name(&record.origin)?,
            category: ImageCategory::from_name(&record.category)?,
            width: dimension(record.width)?,
            height: dimension(record.height)?,
            image_name: record.image_name,
            session_id: record.session_id,
            node_id: record.node_id,
            is_intermediate: record.is_intermediate,
            created_at: record.created_at,
        })
    }
}

fn dimension(value: i32) -> Result<u32, PipelineError> {
    u32::try_from(value).map_err(|_| {
        CoreError::Internal(format!("stored image has negative dimension {value}")).into()
    })
}

/// Storage for input and output images.
#[async_trait]
pub trait ImageStore: Send + Sync {
    /// Store `image` as a new PNG under a fresh name.
    async fn save(&self, image: DynamicImage, tags: NewImage)
        -> Result<StoredImage, PipelineError>;

    /// Metadata for `image_name`.
    async fn metadata(&self, image_name: &str) -> Result<StoredImage, PipelineError>;

    /// Raw PNG bytes for `image_name`.
    async fn read_png(&self, image_name: &str) -> Result<Vec<u8>, PipelineError>;

    /// Decoded pixels for `image_name`.
    async fn load(&self, image_name: &str) -> Result<DynamicImage, PipelineError> {
        let bytes = self.read_png(image_name).await?;
        let image = tokio::task::spawn_blocking(move || crate::codec::decode(&bytes)).await??;
        Ok(image)
    }
}
