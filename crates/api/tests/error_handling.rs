//! `AppError` mapping to HTTP responses and GraphQL error extensions.
//!
//! No server is needed: errors are converted directly. The database-backed
//! cases provoke real constraint violations.

use assert_matches::assert_matches;
use async_graphql::ErrorExtensions;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use http_body_util::BodyExt;
use muse_annotators::AnnotatorError;
use muse_api::error::AppError;
use muse_core::error::CoreError;
use muse_db::models::painting::CreatePainting;
use muse_db::repositories::{PaintingRepo, UserRepo};
use muse_pipeline::PipelineError;
use sqlx::PgPool;

async fn error_to_response(err: AppError) -> (StatusCode, serde_json::Value) {
    let response = err.into_response();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let json: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
    (status, json)
}

#[tokio::test]
async fn not_found_error_returns_404() {
    let err = AppError::Core(CoreError::NotFound {
        entity: "Painting",
        id: 42,
    });

    let (status, json) = error_to_response(err).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(json["code"], "NOT_FOUND");
    assert_eq!(json["error"], "Painting with id 42 not found");
}

#[tokio::test]
async fn validation_error_returns_400() {
    let err = AppError::Core(CoreError::Validation("title too long".into()));

    let (status, json) = error_to_response(err).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["code"], "VALIDATION_ERROR");
    assert_eq!(json["error"], "title too long");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn duplicate_username_returns_409(pool: PgPool) {
    let err = UserRepo::create(&pool, "admin").await.unwrap_err();

    let (status, json) = error_to_response(AppError::Database(err)).await;

    assert_eq!(status, StatusCode::CONFLICT);
    assert_eq!(json["code"], "CONFLICT");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn missing_creator_foreign_key_returns_404(pool: PgPool) {
    let input = CreatePainting {
        title: "Orphan".into(),
        creator_id: 9999,
        prompt: None,
        inspiration_image_url: None,
        width: None,
        height: None,
    };
    let err = PaintingRepo::create(&pool, &input).await.unwrap_err();

    let (status, json) = error_to_response(AppError::Database(err)).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(json["code"], "NOT_FOUND");
}

#[tokio::test]
async fn internal_error_returns_500_and_sanitizes_message() {
    let err = AppError::InternalError("secret database credentials leaked".into());

    let (status, json) = error_to_response(err).await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(json["code"], "INTERNAL_ERROR");
    assert_eq!(json["error"], "An internal error occurred");
}

#[tokio::test]
async fn row_not_found_returns_404() {
    let (status, json) = error_to_response(AppError::Database(sqlx::Error::RowNotFound)).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(json["code"], "NOT_FOUND");
}

#[tokio::test]
async fn missing_image_returns_404_with_name() {
    let err = AppError::Pipeline(PipelineError::ImageNotFound("gone.png".into()));

    let (status, json) = error_to_response(err).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(json["error"], "Image gone.png not found");
}

#[tokio::test]
async fn annotator_failure_returns_502_with_upstream_message() {
    let err = AppError::Pipeline(PipelineError::Annotator(AnnotatorError::Api {
        status: 503,
        body: "checkpoint missing".into(),
    }));

    let (status, json) = error_to_response(err).await;

    assert_eq!(status, StatusCode::BAD_GATEWAY);
    assert_eq!(json["code"], "PROCESSOR_FAILED");
    assert!(json["error"].as_str().unwrap().contains("checkpoint missing"));
}

#[tokio::test]
async fn io_failures_are_sanitized() {
    let err = AppError::Pipeline(PipelineError::Io(std::io::Error::other("disk /var/x full")));

    let (status, json) = error_to_response(err).await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(json["error"], "An internal error occurred");
}

#[test]
fn graphql_errors_carry_the_code_extension() {
    let err = AppError::Core(CoreError::NotFound {
        entity: "Painting",
        id: 7,
    })
    .extend();

    assert_eq!(err.message, "Painting with id 7 not found");
    let extensions = err.extensions.expect("extensions should be set");
    assert_matches!(
        extensions.get("code"),
        Some(async_graphql::Value::String(code)) if code == "NOT_FOUND"
    );
}
