//! Health check, root pages, and general HTTP behaviour.

mod common;

use axum::body::Body;
use axum::http::{Method, Request, StatusCode};
use common::{body_bytes, body_json, get};
use sqlx::PgPool;
use tower::ServiceExt;

#[sqlx::test(migrations = "../../db/migrations")]
async fn health_check_returns_ok_with_json(pool: PgPool) {
    let app = common::build_test_app(pool).await;
    let response = get(&app, "/health").await;

    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert_eq!(json["status"], "ok");
    assert!(json["version"].is_string());
    assert_eq!(json["db_healthy"], true);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn unknown_route_returns_404(pool: PgPool) {
    let app = common::build_test_app(pool).await;
    let response = get(&app, "/this-route-does-not-exist").await;

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn response_contains_x_request_id_header(pool: PgPool) {
    let app = common::build_test_app(pool).await;
    let response = get(&app, "/health").await;

    let request_id = response
        .headers()
        .get("x-request-id")
        .expect("Response must contain an x-request-id header");
    assert_eq!(request_id.to_str().unwrap().len(), 36, "x-request-id should be a UUID string");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn cors_preflight_returns_correct_headers(pool: PgPool) {
    let app = common::build_test_app(pool).await;

    let request = Request::builder()
        .method(Method::OPTIONS)
        .uri("/graphql")
        .header("Origin", "http://localhost:5173")
        .header("Access-Control-Request-Method", "POST")
        .header("Access-Control-Request-Headers", "content-type")
        .body(Body::empty())
        .unwrap();
    let response = app.router.clone().oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        response.headers()["access-control-allow-origin"],
        "http://localhost:5173"
    );
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn index_returns_text(pool: PgPool) {
    let app = common::build_test_app(pool).await;
    let response = get(&app, "/").await;

    assert_eq!(response.status(), StatusCode::OK);
    let text = String::from_utf8(body_bytes(response).await).unwrap();
    assert!(text.contains("Painting Muse index"));
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn old_serves_static_page(pool: PgPool) {
    let app = common::build_test_app(pool).await;
    let response = get(&app, "/old").await;

    assert_eq!(response.status(), StatusCode::OK);
    assert!(response.headers()["content-type"]
        .to_str()
        .unwrap()
        .starts_with("text/html"));
    let text = String::from_utf8(body_bytes(response).await).unwrap();
    assert!(text.contains("legacy page"));
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn graphiql_is_served_when_enabled(pool: PgPool) {
    let app = common::build_test_app(pool).await;
    let response = get(&app, "/graphql").await;

    assert_eq!(response.status(), StatusCode::OK);
    let text = String::from_utf8(body_bytes(response).await).unwrap();
    assert!(text.to_lowercase().contains("graphiql"));
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn graphiql_is_hidden_when_disabled(pool: PgPool) {
    let dir = tempfile::tempdir().unwrap();
    let mut config = common::test_config(&dir);
    config.graphiql_enabled = false;
    let app = common::build_test_app_with(pool, dir, config).await;

    let response = get(&app, "/graphql").await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}
