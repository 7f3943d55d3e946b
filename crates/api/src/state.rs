use std::sync::Arc;

use muse_annotators::AnnotatorClient;
use muse_pipeline::ImageStore;

use crate::config::ServerConfig;
use crate::graphql::PaintingSchema;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// Cheaply cloneable: everything is behind `Arc` or is already `Clone`.
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool.
    pub pool: muse_db::DbPool,
    /// Server configuration.
    pub config: Arc<ServerConfig>,
    /// Input and output images for the processors.
    pub images: Arc<dyn ImageStore>,
    /// Client for the model-backed detectors.
    pub annotator: AnnotatorClient,
    /// Painting GraphQL schema (carries its own handle to the pool).
    pub schema: PaintingSchema,
}
