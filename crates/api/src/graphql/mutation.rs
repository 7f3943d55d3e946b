use async_graphql::{Context, ErrorExtensions, Object, SimpleObject, ID};
use muse_core::error::CoreError;
use muse_core::painting::{parse_id, DEFAULT_CREATOR_ID, DEFAULT_TITLE};
use muse_db::models::painting::CreatePainting;

use super::types::{PaintingInput, PaintingObject};
use crate::error::AppError;
use crate::paintings;

#[derive(SimpleObject)]
#[graphql(name = "CreatePainting")]
pub struct CreatePaintingPayload {
    pub painting: PaintingObject,
}

#[derive(SimpleObject)]
#[graphql(name = "UpdatePainting")]
pub struct UpdatePaintingPayload {
    pub painting: PaintingObject,
}

pub struct MutationRoot;

#[Object]
impl MutationRoot {
    /// Create a painting. `title` defaults to "Untitled" and `artistId` to
    /// the admin account.
    async fn create_painting(
        &self,
        ctx: &Context<'_>,
        painting_data: PaintingInput,
    ) -> async_graphql::Result<CreatePaintingPayload> {
        let pool = super::pool(ctx)?;
        let input = to_create_dto(painting_data).map_err(|e| AppError::from(e).extend())?;
        let painting = paintings::create(pool, &input)
            .await
            .map_err(|e| e.extend())?;
        Ok(CreatePaintingPayload {
            painting: PaintingObject(painting),
        })
    }

    /// Change only the title of an existing painting.
    async fn update_painting(
        &self,
        ctx: &Context<'_>,
        title: String,
        id: Option<ID>,
    ) -> async_graphql::Result<UpdatePaintingPayload> {
        let pool = super::pool(ctx)?;
        let id = id
            .ok_or_else(|| CoreError::Validation("id is required".into()))
            .and_then(|id| parse_id(&id, "id"))
            .map_err(|e| AppError::from(e).extend())?;
        let painting = paintings::update_title(pool, id, &title)
            .await
            .map_err(|e| e.extend())?;
        Ok(UpdatePaintingPayload {
            painting: PaintingObject(painting),
        })
    }
}

fn to_create_dto(data: PaintingInput) -> Result<CreatePainting, CoreError> {
    let creator_id = match data.artist_id.as_deref() {
        Some(raw) if !raw.trim().is_empty() => parse_id(raw, "artistId")?,
        _ => DEFAULT_CREATOR_ID,
    };
    Ok(CreatePainting {
        title: data.title.unwrap_or_else(|| DEFAULT_TITLE.to_string()),
        creator_id,
        prompt: data.prompt,
        inspiration_image_url: data.inspiration_image_url,
        width: data.width,
        height: data.height,
    })
}

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;

    use super::*;

    fn input() -> PaintingInput {
        PaintingInput {
            id: None,
            title: None,
            artist_id: None,
            prompt: Some("a lighthouse at dusk".into()),
            inspiration_image_url: None,
            width: None,
            height: None,
        }
    }

    #[test]
    fn missing_title_and_artist_fall_back_to_defaults() {
        let dto = to_create_dto(input()).unwrap();
        assert_eq!(dto.title, DEFAULT_TITLE);
        assert_eq!(dto.creator_id, DEFAULT_CREATOR_ID);
        assert_eq!(dto.prompt.as_deref(), Some("a lighthouse at dusk"));
    }

    #[test]
    fn artist_id_is_parsed() {
        let dto = to_create_dto(PaintingInput {
            artist_id: Some(" 7 ".into()),
            ..input()
        })
        .unwrap();
        assert_eq!(dto.creator_id, 7);
    }

    #[test]
    fn non_numeric_artist_id_is_a_validation_error() {
        let result = to_create_dto(PaintingInput {
            artist_id: Some("monet".into()),
            ..input()
        });
        assert_matches!(result, Err(CoreError::Validation(_)));
    }
}
