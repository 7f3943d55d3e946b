//! Stored image references, origin/category tags, and image naming.

use serde::{Deserialize, Serialize};

use crate::error::CoreError;

/// Extension used for every image written by the store.
pub const IMAGE_EXTENSION: &str = "png";

/// Where an image came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ResourceOrigin {
    /// Produced by this server (processor outputs).
    Internal,
    /// Uploaded by a client.
    External,
}

impl ResourceOrigin {
    /// Parse from the database `origin` column.
    pub fn from_name(name: &str) -> Result<Self, CoreError> {
        match name {
            "internal" => Ok(Self::Internal),
            "external" => Ok(Self::External),
            other => Err(CoreError::Validation(format!(
                "Unknown resource origin '{other}'"
            ))),
        }
    }

    /// Database name value.
    pub fn name(self) -> &'static str {
        match self {
            Self::Internal => "internal",
            Self::External => "external",
        }
    }
}

/// What an image is used for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ImageCategory {
    General,
    Mask,
    /// ControlNet conditioning images (every processor output).
    Control,
    User,
    Other,
}

impl ImageCategory {
    /// Parse from the database `category` column.
    pub fn from_name(name: &str) -> Result<Self, CoreError> {
        match name {
            "general" => Ok(Self::General),
            "mask" => Ok(Self::Mask),
            "control" => Ok(Self::Control),
            "user" => Ok(Self::User),
            "other" => Ok(Self::Other),
            other => Err(CoreError::Validation(format!(
                "Unknown image category '{other}'"
            ))),
        }
    }

    /// Database name value.
    pub fn name(self) -> &'static str {
        match self {
            Self::General => "general",
            Self::Mask => "mask",
            Self::Control => "control",
            Self::User => "user",
            Self::Other => "other",
        }
    }
}

/// Reference to a stored image by name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImageField {
    pub image_name: String,
}

/// Result of an image-producing invocation.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename = "image_output")]
pub struct ImageOutput {
    pub image: ImageField,
    pub width: u32,
    pub height: u32,
}

/// Generate a fresh, collision-free image name (`<uuid-v4>.png`).
pub fn new_image_name() -> String {
    format!("{}.{IMAGE_EXTENSION}", uuid::Uuid::new_v4())
}

/// Reject names that could escape the storage directory.
///
/// Allowed: ASCII alphanumerics, `-`, `_` and `.`, not starting with `.`.
pub fn validate_image_name(name: &str) -> Result<(), CoreError> {
    let valid = !name.is_empty()
        && !name.starts_with('.')
        && name
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || matches!(c, '-' | '_' | '.'));

    if valid {
        Ok(())
    } else {
        Err(CoreError::Validation(format!("Invalid image name '{name}'")))
    }
}
