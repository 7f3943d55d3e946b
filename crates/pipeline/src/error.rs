use muse_annotators::AnnotatorError;
use muse_core::error::CoreError;

/// Failures while fetching, processing or storing images.
#[derive(Debug, thiserror::Error)]
pub enum PipelineError {
    #[error(transparent)]
    Core(#[from] CoreError),

    #[error(transparent)]
    Annotator(#[from] AnnotatorError),

    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("Image codec error: {0}")]
    Image(#[from] image::ImageError),

    #[error("Storage I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Image not found: {0}")]
    ImageNotFound(String),

    /// A blocking image task panicked or was cancelled.
    #[error("Image task failed: {0}")]
    Task(#[from] tokio::task::JoinError),
}
