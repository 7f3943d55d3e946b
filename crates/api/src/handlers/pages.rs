//! Plain pages outside the API.

/// GET /
pub async fn index() -> &'static str {
    "Hello, world. You're at the Painting Muse index."
}
