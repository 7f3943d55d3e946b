//! GraphQL object and input types.

use async_graphql::{Context, ErrorExtensions, InputObject, Object, SimpleObject, ID};
use muse_core::error::CoreError;
use muse_core::painting::DEFAULT_TITLE;
use muse_core::types::Timestamp;
use muse_db::models::painting::Painting;
use muse_db::models::user::User;
use muse_db::repositories::UserRepo;

use crate::error::AppError;

/// A stored painting.
pub struct PaintingObject(pub Painting);

#[Object(name = "PaintingType")]
impl PaintingObject {
    async fn id(&self) -> ID {
        ID(self.0.id.to_string())
    }

    async fn title(&self) -> &str {
        &self.0.title
    }

    async fn created_at(&self) -> Timestamp {
        self.0.created_at
    }

    async fn inspiration_image_url(&self) -> Option<&str> {
        self.0.inspiration_image_url.as_deref()
    }

    /// Id of the creating user, as a string.
    async fn artist_id(&self) -> String {
        self.0.creator_id.to_string()
    }

    /// The creating user.
    async fn user(&self, ctx: &Context<'_>) -> async_graphql::Result<UserObject> {
        let pool = super::pool(ctx)?;
        let id = self.0.creator_id;
        UserRepo::find_by_id(pool, id)
            .await
            .map_err(|e| AppError::from(e).extend())?
            .map(UserObject::from)
            .ok_or_else(|| {
                AppError::from(CoreError::NotFound { entity: "User", id }).extend()
            })
    }

    async fn width(&self) -> Option<i32> {
        self.0.width
    }

    async fn height(&self) -> Option<i32> {
        self.0.height
    }

    async fn prompt(&self) -> Option<&str> {
        self.0.prompt.as_deref()
    }
}

#[derive(SimpleObject)]
#[graphql(name = "UserType")]
pub struct UserObject {
    pub id: ID,
    pub username: String,
    pub created_at: Timestamp,
}

impl From<User> for UserObject {
    fn from(user: User) -> Self {
        Self {
            id: ID(user.id.to_string()),
            username: user.username,
            created_at: user.created_at,
        }
    }
}

/// Input for `createPainting`.
#[derive(InputObject)]
#[graphql(name = "PaintingInput")]
pub struct PaintingInput {
    /// Accepted for compatibility; ids are always assigned by the database.
    pub id: Option<ID>,
    #[graphql(default_with = "Some(DEFAULT_TITLE.to_string())")]
    pub title: Option<String>,
    /// Creating user id. Defaults to the seeded admin account.
    pub artist_id: Option<String>,
    pub prompt: Option<String>,
    pub inspiration_image_url: Option<String>,
    pub width: Option<i32>,
    pub height: Option<i32>,
}
