use async_graphql::{Context, ErrorExtensions, Object};
use muse_core::error::CoreError;

use super::types::PaintingObject;
use crate::error::AppError;
use crate::paintings;

pub struct QueryRoot;

#[Object]
impl QueryRoot {
    /// Every painting, ordered by id.
    async fn all_paintings(
        &self,
        ctx: &Context<'_>,
    ) -> async_graphql::Result<Vec<PaintingObject>> {
        let pool = super::pool(ctx)?;
        let list = paintings::list(pool).await.map_err(|e| e.extend())?;
        Ok(list.into_iter().map(PaintingObject).collect())
    }

    /// One painting by id. Unknown ids are a `NOT_FOUND` error.
    async fn painting(
        &self,
        ctx: &Context<'_>,
        painting_id: Option<i32>,
    ) -> async_graphql::Result<Option<PaintingObject>> {
        let pool = super::pool(ctx)?;
        let id = painting_id.ok_or_else(|| {
            AppError::from(CoreError::Validation("paintingId is required".into())).extend()
        })?;
        let painting = paintings::get(pool, id.into()).await.map_err(|e| e.extend())?;
        Ok(Some(PaintingObject(painting)))
    }
}
