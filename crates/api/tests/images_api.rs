//! Image upload and retrieval endpoints.

mod common;

use axum::http::StatusCode;
use common::{body_bytes, body_json, get, post_file, sample_png, upload_sample};
use sqlx::PgPool;

#[sqlx::test(migrations = "../../db/migrations")]
async fn upload_stores_png_with_external_user_tags(pool: PgPool) {
    let app = common::build_test_app(pool).await;

    let response = post_file(&app, "/api/v1/images", "photo.png", &sample_png(40, 30)).await;
    assert_eq!(response.status(), StatusCode::CREATED);

    let json = body_json(response).await;
    let data = &json["data"];
    assert!(data["image_name"].as_str().unwrap().ends_with(".png"));
    assert_eq!(data["origin"], "external");
    assert_eq!(data["category"], "user");
    assert_eq!(data["width"], 40);
    assert_eq!(data["height"], 30);
    assert_eq!(data["is_intermediate"], false);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn metadata_and_full_image_are_served(pool: PgPool) {
    let app = common::build_test_app(pool).await;
    let name = upload_sample(&app, 24, 16).await;

    let response = get(&app, &format!("/api/v1/images/{name}")).await;
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["data"]["image_name"], name.as_str());

    let response = get(&app, &format!("/api/v1/images/{name}/full")).await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(response.headers()["content-type"], "image/png");
    let decoded = image::load_from_memory(&body_bytes(response).await).unwrap();
    assert_eq!((decoded.width(), decoded.height()), (24, 16));
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn undecodable_upload_is_bad_request(pool: PgPool) {
    let app = common::build_test_app(pool).await;

    let response = post_file(&app, "/api/v1/images", "notes.txt", b"definitely not an image").await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = body_json(response).await;
    assert_eq!(json["code"], "BAD_REQUEST");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn missing_image_is_not_found(pool: PgPool) {
    let app = common::build_test_app(pool).await;

    let response = get(&app, "/api/v1/images/does-not-exist.png").await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    assert_eq!(body_json(response).await["code"], "NOT_FOUND");

    let response = get(&app, "/api/v1/images/does-not-exist.png/full").await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn unsafe_image_name_is_rejected(pool: PgPool) {
    let app = common::build_test_app(pool).await;

    let response = get(&app, "/api/v1/images/..%2Fsecret.png/full").await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(body_json(response).await["code"], "VALIDATION_ERROR");
}
