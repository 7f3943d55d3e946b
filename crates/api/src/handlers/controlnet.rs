use axum::extract::rejection::JsonRejection;
use axum::response::IntoResponse;
use axum::Json;

use muse_core::control::{ControlField, ControlNetParams, ControlOutput};

use crate::error::AppResult;
use crate::response::DataResponse;

/// POST /api/v1/controlnet
///
/// Validate ControlNet settings and return them as a `control_output`.
pub async fn build(
    payload: Result<Json<ControlNetParams>, JsonRejection>,
) -> AppResult<impl IntoResponse> {
    let Json(params) = payload?;
    let control = ControlField::new(params)?;
    tracing::debug!(
        image_name = %control.image.image_name,
        model = %control.control_model.model_name,
        "ControlNet descriptor built",
    );
    Ok(Json(DataResponse {
        data: ControlOutput { control },
    }))
}
