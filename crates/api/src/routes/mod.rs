pub mod graphql;
pub mod health;
pub mod images;
pub mod pages;
pub mod processors;

use axum::routing::post;
use axum::Router;

use crate::handlers;
use crate::state::AppState;

/// Build the `/api/v1` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /images                                  upload (POST)
/// /images/{image_name}                     metadata (GET)
/// /images/{image_name}/full                PNG bytes (GET)
///
/// /processors                              catalogue (GET)
/// /processors/invoke                       run a processor (POST)
///
/// /controlnet                              build a ControlNet descriptor (POST)
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .nest("/images", images::router())
        .nest("/processors", processors::router())
        .route("/controlnet", post(handlers::controlnet::build))
}
