//! Handlers for stored images.

use axum::extract::{Multipart, Path, State};
use axum::http::{header, StatusCode};
use axum::response::IntoResponse;
use axum::Json;

use muse_pipeline::codec::decode;
use muse_pipeline::NewImage;

use crate::error::{AppError, AppResult};
use crate::response::DataResponse;
use crate::state::AppState;

/// POST /api/v1/images
///
/// Upload an image (multipart, first file part). Any format the decoder
/// understands is accepted; it is stored as PNG with origin `external` and
/// category `user`.
pub async fn upload(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> AppResult<impl IntoResponse> {
    let mut data = None;
    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::BadRequest(e.to_string()))?
    {
        if field.file_name().is_none() && field.name() != Some("file") {
            continue;
        }
        data = Some(
            field
                .bytes()
                .await
                .map_err(|e| AppError::BadRequest(e.to_string()))?,
        );
        break;
    }
    let data = data.ok_or_else(|| {
        AppError::BadRequest("No file received in multipart upload".to_string())
    })?;

    let image = tokio::task::spawn_blocking(move || decode(&data))
        .await
        .map_err(|e| AppError::InternalError(e.to_string()))?
        .map_err(|e| AppError::BadRequest(format!("Unsupported image: {e}")))?;

    let stored = state.images.save(image, NewImage::upload()).await?;
    tracing::info!(
        image_name = %stored.image_name,
        width = stored.width,
        height = stored.height,
        "Image uploaded",
    );

    Ok((StatusCode::CREATED, Json(DataResponse { data: stored })))
}

/// GET /api/v1/images/{image_name}
pub async fn get_metadata(
    State(state): State<AppState>,
    Path(image_name): Path<String>,
) -> AppResult<impl IntoResponse> {
    let meta = state.images.metadata(&image_name).await?;
    Ok(Json(DataResponse { data: meta }))
}

/// GET /api/v1/images/{image_name}/full
pub async fn get_full(
    State(state): State<AppState>,
    Path(image_name): Path<String>,
) -> AppResult<impl IntoResponse> {
    let png = state.images.read_png(&image_name).await?;
    Ok(([(header::CONTENT_TYPE, "image/png")], png))
}
