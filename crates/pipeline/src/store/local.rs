//! Filesystem + Postgres image store.

use std::path::{Path, PathBuf};

use async_trait::async_trait;
use image::DynamicImage;

use muse_core::error::CoreError;
use muse_core::images::{new_image_name, validate_image_name};
use muse_db::models::image::CreateImageRecord;
use muse_db::repositories::ImageRepo;
use muse_db::DbPool;

use super::{ImageStore, NewImage, StoredImage};
use crate::codec::encode_png;
use crate::PipelineError;

/// Stores PNG files under `root` and their metadata in the `images` table.
#[derive(Clone)]
pub struct LocalImageStore {
    root: PathBuf,
    pool: DbPool,
}

impl LocalImageStore {
    /// Open the store, creating `root` if needed.
    pub async fn open(root: impl Into<PathBuf>, pool: DbPool) -> Result<Self, PipelineError> {
        let root = root.into();
        tokio::fs::create_dir_all(&root).await?;
        Ok(Self { root, pool })
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    fn path_for(&self, image_name: &str) -> Result<PathBuf, PipelineError> {
        validate_image_name(image_name)?;
        Ok(self.root.join(image_name))
    }
}

#[async_trait]
impl ImageStore for LocalImageStore {
    async fn save(
        &self,
        image: DynamicImage,
        tags: NewImage,
    ) -> Result<StoredImage, PipelineError> {
        let width = column_dimension(image.width())?;
        let height = column_dimension(image.height())?;
        let png = tokio::task::spawn_blocking(move || encode_png(&image)).await??;

        let image_name = new_image_name();
        let path = self.root.join(&image_name);
        tokio::fs::write(&path, &png).await?;

        let input = CreateImageRecord {
            image_name,
            origin: tags.origin,
            category: tags.category,
            width,
            height,
            session_id: tags.session_id,
            node_id: tags.node_id,
            is_intermediate: tags.is_intermediate,
        };
        let record = match ImageRepo::create(&self.pool, &input).await {
            Ok(record) => record,
            Err(e) => {
                if let Err(cleanup) = tokio::fs::remove_file(&path).await {
                    tracing::warn!(
                        path = %path.display(),
                        error = %cleanup,
                        "Failed to remove orphaned image file",
                    );
                }
                return Err(e.into());
            }
        };

        tracing::debug!(
            image_name = %record.image_name,
            category = %record.category,
            width,
            height,
            "Stored image",
        );
        record.try_into()
    }

    async fn metadata(&self, image_name: &str) -> Result<StoredImage, PipelineError> {
        validate_image_name(image_name)?;
        ImageRepo::find_by_name(&self.pool, image_name)
            .await?
            .ok_or_else(|| PipelineError::ImageNotFound(image_name.to_string()))?
            .try_into()
    }

    async fn read_png(&self, image_name: &str) -> Result<Vec<u8>, PipelineError> {
        let path = self.path_for(image_name)?;
        match tokio::fs::read(&path).await {
            Ok(bytes) => Ok(bytes),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                Err(PipelineError::ImageNotFound(image_name.to_string()))
            }
            Err(e) => Err(e.into()),
        }
    }
}

fn column_dimension(value: u32) -> Result<i32, PipelineError> {
    i32::try_from(value)
        .map_err(|_| CoreError::Validation(format!("image dimension {value} is too large")).into())
}
