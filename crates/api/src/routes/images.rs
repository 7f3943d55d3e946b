use axum::extract::DefaultBodyLimit;
use axum::routing::{get, post};
use axum::Router;

use crate::handlers::images;
use crate::state::AppState;

/// Largest accepted upload.
pub const MAX_UPLOAD_BYTES: usize = 64 * 1024 * 1024;

/// Image routes mounted at `/images`.
///
/// ```text
/// POST /                    -> upload
/// GET  /{image_name}        -> get_metadata
/// GET  /{image_name}/full   -> get_full
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route(
            "/",
            post(images::upload).layer(DefaultBodyLimit::max(MAX_UPLOAD_BYTES)),
        )
        .route("/{image_name}", get(images::get_metadata))
        .route("/{image_name}/full", get(images::get_full))
}
