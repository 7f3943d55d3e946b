//! Handlers for the ControlNet image processors.

use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::response::IntoResponse;
use axum::Json;
use serde::Deserialize;

use muse_core::images::ImageField;
use muse_core::processors::{catalogue, ProcessorConfig};
use muse_pipeline::{invoke_processor, InvocationContext};

use crate::error::AppResult;
use crate::response::DataResponse;
use crate::state::AppState;

/// Body of `POST /api/v1/processors/invoke`.
#[derive(Debug, Deserialize)]
pub struct InvokeRequest {
    pub image: ImageField,
    /// Tagged by `type`, e.g. `{"type": "canny_image_processor", "low_threshold": 50}`.
    pub processor: ProcessorConfig,
    #[serde(flatten)]
    pub context: InvocationContext,
}

/// GET /api/v1/processors
pub async fn list() -> impl IntoResponse {
    Json(DataResponse { data: catalogue() })
}

/// POST /api/v1/processors/invoke
///
/// Run one processor over a stored image and return the stored output.
pub async fn invoke(
    State(state): State<AppState>,
    payload: Result<Json<InvokeRequest>, JsonRejection>,
) -> AppResult<impl IntoResponse> {
    let Json(request) = payload?;

    let output = invoke_processor(
        state.images.as_ref(),
        &state.annotator,
        &request.image,
        &request.processor,
        request.context,
    )
    .await?;

    Ok(Json(DataResponse { data: output }))
}
