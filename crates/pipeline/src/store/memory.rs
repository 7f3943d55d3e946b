//! In-memory image store.
//!
//! Keeps PNG bytes and metadata in a map. Nothing survives a restart.

use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use image::DynamicImage;
use tokio::sync::RwLock;

use muse_core::images::{new_image_name, validate_image_name};

use super::{ImageStore, NewImage, StoredImage};
use crate::codec::encode_png;
use crate::PipelineError;

#[derive(Clone, Default)]
pub struct MemoryImageStore {
    images: Arc<RwLock<HashMap<String, (StoredImage, Vec<u8>)>>>,
}

impl MemoryImageStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored images.
    pub async fn len(&self) -> usize {
        self.images.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.images.read().await.is_empty()
    }
}

#[async_trait]
impl ImageStore for MemoryImageStore {
    async fn save(
        &self,
        image: DynamicImage,
        tags: NewImage,
    ) -> Result<StoredImage, PipelineError> {
        let (width, height) = (image.width(), image.height());
        let png = tokio::task::spawn_blocking(move || encode_png(&image)).await??;

        let stored = StoredImage {
            image_name: new_image_name(),
            origin: tags.origin,
            category: tags.category,
            width,
            height,
            session_id: tags.session_id,
            node_id: tags.node_id,
            is_intermediate: tags.is_intermediate,
            created_at: chrono::Utc::now(),
        };
        self.images
            .write()
            .await
            .insert(stored.image_name.clone(), (stored.clone(), png));
        Ok(stored)
    }

    async fn metadata(&self, image_name: &str) -> Result<StoredImage, PipelineError> {
        validate_image_name(image_name)?;
        self.images
            .read()
            .await
            .get(image_name)
            .map(|(meta, _)| meta.clone())
            .ok_or_else(|| PipelineError::ImageNotFound(image_name.to_string()))
    }

    async fn read_png(&self, image_name: &str) -> Result<Vec<u8>, PipelineError> {
        validate_image_name(image_name)?;
        self.images
            .read()
            .await
            .get(image_name)
            .map(|(_, png)| png.clone())
            .ok_or_else(|| PipelineError::ImageNotFound(image_name.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;
    use image::{Rgb, RgbImage};

    use super::*;
    use muse_core::images::{ImageCategory, ResourceOrigin};

    #[tokio::test]
    async fn saved_image_can_be_loaded() {
        let store = MemoryImageStore::new();
        let img = DynamicImage::ImageRgb8(RgbImage::from_pixel(5, 4, Rgb([1, 2, 3])));

        let stored = store
            .save(img.clone(), NewImage::control(Some("s".into()), None, true))
            .await
            .unwrap();
        assert!(stored.image_name.ends_with(".png"));
        assert_eq!((stored.width, stored.height), (5, 4));
        assert_eq!(stored.origin, ResourceOrigin::Internal);
        assert_eq!(stored.category, ImageCategory::Control);

        let loaded = store.load(&stored.image_name).await.unwrap();
        assert_eq!(loaded.to_rgb8(), img.to_rgb8());
        assert_eq!(store.metadata(&stored.image_name).await.unwrap(), stored);
        assert_eq!(store.len().await, 1);
    }

    #[tokio::test]
    async fn unknown_name_is_not_found() {
        let store = MemoryImageStore::new();
        assert_matches!(
            store.load("missing.png").await,
            Err(PipelineError::ImageNotFound(name)) if name == "missing.png"
        );
    }

    #[tokio::test]
    async fn path_like_names_are_rejected() {
        let store = MemoryImageStore::new();
        assert_matches!(
            store.read_png("../etc/passwd").await,
            Err(PipelineError::Core(_))
        );
    }
}
