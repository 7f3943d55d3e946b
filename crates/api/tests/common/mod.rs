#![allow(dead_code)]

use std::io::Cursor;
use std::sync::Arc;
use std::time::Duration;

use axum::body::Body;
use axum::http::{Request, Response, StatusCode};
use axum::Router;
use http_body_util::BodyExt;
use serde_json::Value;
use sqlx::PgPool;
use tempfile::TempDir;
use tower::ServiceExt;

use muse_annotators::AnnotatorClient;
use muse_api::config::ServerConfig;
use muse_api::graphql::build_schema;
use muse_api::router::build_app_router;
use muse_api::state::AppState;
use muse_pipeline::LocalImageStore;

/// Nothing listens here, so remote processors fail fast.
pub const UNREACHABLE_ANNOTATOR: &str = "http://127.0.0.1:9";

/// A running app plus the temporary directories it writes to. Keep it alive
/// for the duration of the test.
pub struct TestApp {
    pub router: Router,
    pub dir: TempDir,
}

/// Build a test `ServerConfig` with safe defaults rooted in `dir`.
pub fn test_config(dir: &TempDir) -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        cors_origins: vec!["http://localhost:5173".to_string()],
        request_timeout_secs: 30,
        shutdown_timeout_secs: 30,
        database_url: String::new(),
        image_storage_dir: dir.path().join("images"),
        annotator_url: UNREACHABLE_ANNOTATOR.to_string(),
        annotator_timeout_secs: 5,
        graphiql_enabled: true,
        static_dir: dir.path().join("static"),
    }
}

/// Build the full application router with all middleware layers, using the
/// given database pool.
pub async fn build_test_app(pool: PgPool) -> TestApp {
    let dir = tempfile::tempdir().unwrap();
    let config = test_config(&dir);
    build_test_app_with(pool, dir, config).await
}

/// Like [`build_test_app`] but with a caller-adjusted config.
pub async fn build_test_app_with(pool: PgPool, dir: TempDir, config: ServerConfig) -> TestApp {
    std::fs::create_dir_all(&config.static_dir).unwrap();
    std::fs::write(
        config.static_dir.join("index.html"),
        "<html><body>legacy page</body></html>",
    )
    .unwrap();

    let images = LocalImageStore::open(&config.image_storage_dir, pool.clone())
        .await
        .unwrap();
    let annotator = AnnotatorClient::new(
        config.annotator_url.clone(),
        Duration::from_secs(config.annotator_timeout_secs),
    )
    .unwrap();

    let state = AppState {
        pool: pool.clone(),
        config: Arc::new(config.clone()),
        images: Arc::new(images),
        annotator,
        schema: build_schema(pool),
    };

    TestApp {
        router: build_app_router(state, &config),
        dir,
    }
}

// ---------------------------------------------------------------------------
// Request helpers
// ---------------------------------------------------------------------------

pub async fn get(app: &TestApp, uri: &str) -> Response<Body> {
    let request = Request::get(uri).body(Body::empty()).unwrap();
    app.router.clone().oneshot(request).await.unwrap()
}

pub async fn post_json(app: &TestApp, uri: &str, body: Value) -> Response<Body> {
    let request = Request::post(uri)
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap();
    app.router.clone().oneshot(request).await.unwrap()
}

/// POST a multipart body with a single `file` part.
pub async fn post_file(app: &TestApp, uri: &str, filename: &str, bytes: &[u8]) -> Response<Body> {
    let boundary = "muse-test-boundary";
    let mut body = Vec::new();
    body.extend_from_slice(
        format!(
            "--{boundary}\r\n\
             Content-Disposition: form-data; name=\"file\"; filename=\"{filename}\"\r\n\
             Content-Type: application/octet-stream\r\n\r\n"
        )
        .as_bytes(),
    );
    body.extend_from_slice(bytes);
    body.extend_from_slice(format!("\r\n--{boundary}--\r\n").as_bytes());

    let request = Request::post(uri)
        .header(
            "content-type",
            format!("multipart/form-data; boundary={boundary}"),
        )
        .body(Body::from(body))
        .unwrap();
    app.router.clone().oneshot(request).await.unwrap()
}

/// Run a GraphQL operation and return the full response JSON
/// (`data` and/or `errors`).
pub async fn graphql(app: &TestApp, query: &str, variables: Value) -> Value {
    let response = post_json(
        app,
        "/graphql",
        serde_json::json!({ "query": query, "variables": variables }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
    body_json(response).await
}

pub async fn body_bytes(response: Response<Body>) -> Vec<u8> {
    response.into_body().collect().await.unwrap().to_bytes().to_vec()
}

pub async fn body_json(response: Response<Body>) -> Value {
    serde_json::from_slice(&body_bytes(response).await).unwrap()
}

// ---------------------------------------------------------------------------
// Fixtures
// ---------------------------------------------------------------------------

/// A small PNG with a vertical edge down the middle.
pub fn sample_png(width: u32, height: u32) -> Vec<u8> {
    let img = image::RgbImage::from_fn(width, height, |x, _| {
        if x < width / 2 {
            image::Rgb([10, 10, 10])
        } else {
            image::Rgb([240, 240, 240])
        }
    });
    let mut buf = Cursor::new(Vec::new());
    image::DynamicImage::ImageRgb8(img)
        .write_to(&mut buf, image::ImageFormat::Png)
        .unwrap();
    buf.into_inner()
}

/// Upload [`sample_png`] and return its stored name.
pub async fn upload_sample(app: &TestApp, width: u32, height: u32) -> String {
    let response = post_file(app, "/api/v1/images", "sample.png", &sample_png(width, height)).await;
    assert_eq!(response.status(), StatusCode::CREATED);
    let json = body_json(response).await;
    json["data"]["image_name"].as_str().unwrap().to_string()
}
