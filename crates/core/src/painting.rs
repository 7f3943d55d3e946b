//! Painting field defaults and constraints.

use crate::error::CoreError;
use crate::types::DbId;

/// Title given to paintings created without one.
pub const DEFAULT_TITLE: &str = "Untitled";

/// Maximum title length in characters (`paintings.title` is `VARCHAR(280)`).
pub const MAX_TITLE_LEN: usize = 280;

/// Maximum inspiration image URL length (`VARCHAR(1000)`).
pub const MAX_INSPIRATION_URL_LEN: usize = 1000;

/// Creator assigned when a create request does not name one.
///
/// Matches the `admin` account seeded by the initial migration.
pub const DEFAULT_CREATOR_ID: DbId = 1;

/// Validate a painting title against the column length.
pub fn validate_title(title: &str) -> Result<(), CoreError> {
    let len = title.chars().count();
    if len > MAX_TITLE_LEN {
        return Err(CoreError::Validation(format!(
            "title must be at most {MAX_TITLE_LEN} characters (got {len})"
        )));
    }
    Ok(())
}

/// Validate an optional inspiration image URL against the column length.
pub fn validate_inspiration_url(url: Option<&str>) -> Result<(), CoreError> {
    if let Some(url) = url {
        let len = url.chars().count();
        if len > MAX_INSPIRATION_URL_LEN {
            return Err(CoreError::Validation(format!(
                "inspiration_image_url must be at most {MAX_INSPIRATION_URL_LEN} characters (got {len})"
            )));
        }
    }
    Ok(())
}

/// Parse a GraphQL/REST identifier into a [`DbId`].
pub fn parse_id(raw: &str, field: &str) -> Result<DbId, CoreError> {
    raw.trim()
        .parse::<DbId>()
        .map_err(|_| CoreError::Validation(format!("{field} must be an integer id, got '{raw}'")))
}
