//! Root-level pages: the index text and the legacy static page.

use std::path::Path;

use axum::routing::get;
use axum::Router;
use tower_http::services::ServeFile;

use crate::handlers::pages;
use crate::state::AppState;

/// ```text
/// GET /      -> index
/// GET /old   -> <static_dir>/index.html
/// ```
pub fn router(static_dir: &Path) -> Router<AppState> {
    Router::new()
        .route("/", get(pages::index))
        .route_service("/old", ServeFile::new(static_dir.join("index.html")))
}
