use axum::routing::{get, post};
use axum::Router;

use crate::handlers::processors;
use crate::state::AppState;

/// Processor routes mounted at `/processors`.
///
/// ```text
/// GET  /         -> list
/// POST /invoke   -> invoke
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(processors::list))
        .route("/invoke", post(processors::invoke))
}
