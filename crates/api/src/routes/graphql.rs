use axum::routing::get;
use axum::Router;

use crate::handlers::graphql;
use crate::state::AppState;

/// ```text
/// GET  /graphql   -> explorer (when enabled)
/// POST /graphql   -> execute
/// ```
pub fn router() -> Router<AppState> {
    Router::new().route("/graphql", get(graphql::explorer).post(graphql::execute))
}
