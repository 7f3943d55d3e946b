//! Integration tests for painting, user, and image repositories.

use assert_matches::assert_matches;
use sqlx::PgPool;
use muse_core::images::{ImageCategory, ResourceOrigin};
use muse_core::painting::{DEFAULT_CREATOR_ID, DEFAULT_TITLE};
use muse_db::models::image::CreateImageRecord;
use muse_db::models::painting::CreatePainting;
use muse_db::repositories::{ImageRepo, PaintingRepo, UserRepo};

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

fn new_painting(title: &str, creator_id: i64) -> CreatePainting {
    CreatePainting {
        title: title.to_string(),
        creator_id,
        prompt: None,
        inspiration_image_url: None,
        width: None,
        height: None,
    }
}

fn new_image(name: &str) -> CreateImageRecord {
    CreateImageRecord {
        image_name: name.to_string(),
        origin: ResourceOrigin::Internal,
        category: ImageCategory::Control,
        width: 64,
        height: 32,
        session_id: Some("session-1".to_string()),
        node_id: None,
        is_intermediate: true,
    }
}

// ---------------------------------------------------------------------------
// Paintings
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_create_and_find_painting(pool: PgPool) {
    let mut input = new_painting("Sunset", DEFAULT_CREATOR_ID);
    input.prompt = Some("a red sky over the sea".to_string());
    input.width = Some(512);
    input.height = Some(768);

    let created = PaintingRepo::create(&pool, &input).await.unwrap();
    assert_eq!(created.title, "Sunset");
    assert_eq!(created.creator_id, DEFAULT_CREATOR_ID);
    assert_eq!(created.prompt.as_deref(), Some("a red sky over the sea"));
    assert_eq!(created.width, Some(512));
    assert_eq!(created.height, Some(768));
    assert!(created.inspiration_image_url.is_none());

    let found = PaintingRepo::find_by_id(&pool, created.id)
        .await
        .unwrap()
        .expect("painting should exist");
    assert_eq!(found.id, created.id);
    assert_eq!(found.title, "Sunset");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_find_missing_painting_returns_none(pool: PgPool) {
    let found = PaintingRepo::find_by_id(&pool, 999_999).await.unwrap();
    assert!(found.is_none());
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_list_paintings_in_insertion_order(pool: PgPool) {
    assert!(PaintingRepo::list(&pool).await.unwrap().is_empty());

    for title in ["First", "Second", "Third"] {
        PaintingRepo::create(&pool, &new_painting(title, DEFAULT_CREATOR_ID))
            .await
            .unwrap();
    }

    let titles: Vec<String> = PaintingRepo::list(&pool)
        .await
        .unwrap()
        .into_iter()
        .map(|p| p.title)
        .collect();
    assert_eq!(titles, ["First", "Second", "Third"]);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_title_column_default(pool: PgPool) {
    let row: (String,) = sqlx::query_as(
        "INSERT INTO paintings (creator_id) VALUES ($1) RETURNING title",
    )
    .bind(DEFAULT_CREATOR_ID)
    .fetch_one(&pool)
    .await
    .unwrap();
    assert_eq!(row.0, DEFAULT_TITLE);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_update_title(pool: PgPool) {
    let created = PaintingRepo::create(&pool, &new_painting("Draft", DEFAULT_CREATOR_ID))
        .await
        .unwrap();

    let updated = PaintingRepo::update_title(&pool, created.id, "Final")
        .await
        .unwrap()
        .expect("painting should exist");
    assert_eq!(updated.id, created.id);
    assert_eq!(updated.title, "Final");
    assert_eq!(updated.created_at, created.created_at);

    let missing = PaintingRepo::update_title(&pool, 999_999, "Nope").await.unwrap();
    assert!(missing.is_none());
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_unknown_creator_is_fk_violation(pool: PgPool) {
    let result = PaintingRepo::create(&pool, &new_painting("Orphan", 999_999)).await;
    assert_matches!(result, Err(sqlx::Error::Database(ref e)) if e.is_foreign_key_violation());
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_title_longer_than_column_is_rejected(pool: PgPool) {
    let long = "x".repeat(281);
    let result = PaintingRepo::create(&pool, &new_painting(&long, DEFAULT_CREATOR_ID)).await;
    assert!(result.is_err());
}

// ---------------------------------------------------------------------------
// Users
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_deleting_user_cascades_to_paintings(pool: PgPool) {
    let artist = UserRepo::create(&pool, "claude_monet").await.unwrap();
    let painting = PaintingRepo::create(&pool, &new_painting("Water Lilies", artist.id))
        .await
        .unwrap();

    assert!(UserRepo::delete(&pool, artist.id).await.unwrap());
    assert!(PaintingRepo::find_by_id(&pool, painting.id).await.unwrap().is_none());
    assert!(!UserRepo::delete(&pool, artist.id).await.unwrap());
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_duplicate_username_is_unique_violation(pool: PgPool) {
    UserRepo::create(&pool, "duplicate").await.unwrap();
    let result = UserRepo::create(&pool, "duplicate").await;
    assert_matches!(result, Err(sqlx::Error::Database(ref e)) if e.is_unique_violation());
}

// ---------------------------------------------------------------------------
// Images
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_create_and_find_image(pool: PgPool) {
    let created = ImageRepo::create(&pool, &new_image("abc.png")).await.unwrap();
    assert_eq!(created.origin, "internal");
    assert_eq!(created.category, "control");
    assert_eq!((created.width, created.height), (64, 32));
    assert!(created.is_intermediate);

    let found = ImageRepo::find_by_name(&pool, "abc.png")
        .await
        .unwrap()
        .expect("image should exist");
    assert_eq!(found.id, created.id);
    assert_eq!(found.session_id.as_deref(), Some("session-1"));

    assert!(ImageRepo::find_by_name(&pool, "missing.png").await.unwrap().is_none());
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_duplicate_image_name_is_rejected(pool: PgPool) {
    ImageRepo::create(&pool, &new_image("dup.png")).await.unwrap();
    let result = ImageRepo::create(&pool, &new_image("dup.png")).await;
    assert_matches!(result, Err(sqlx::Error::Database(ref e)) if e.is_unique_violation());
}
