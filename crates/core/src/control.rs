//! ControlNet descriptor types.
//!
//! A [`ControlField`] bundles everything a generation step needs to apply a
//! ControlNet: the control image, which model to use, how strongly and over
//! which portion of the denoising schedule to apply it, and how to reconcile
//! the control image's size with the generation size.
//!
//! Construction goes through [`ControlField::new`], which enforces the weight
//! and step-percentage ranges. `begin_step_percent <= end_step_percent` is
//! expected but deliberately not checked.

use serde::{Deserialize, Serialize};

use crate::error::CoreError;
use crate::images::ImageField;

/// Lowest accepted control weight.
pub const MIN_CONTROL_WEIGHT: f64 = -1.0;

/// Highest accepted control weight.
pub const MAX_CONTROL_WEIGHT: f64 = 2.0;

/// Model used when a request does not name one.
pub const DEFAULT_CONTROL_MODEL: &str = "lllyasviel/sd-controlnet-canny";

/// Base model family a ControlNet was trained against.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum BaseModelType {
    #[default]
    #[serde(rename = "sd-1")]
    StableDiffusion1,
    #[serde(rename = "sd-2")]
    StableDiffusion2,
    #[serde(rename = "sdxl")]
    StableDiffusionXL,
    #[serde(rename = "sdxl-refiner")]
    StableDiffusionXLRefiner,
}

/// How the ControlNet is balanced against the text prompt.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ControlMode {
    #[default]
    Balanced,
    MorePrompt,
    MoreControl,
    Unbalanced,
}

/// How the control image is fitted to the generation size.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ResizeMode {
    #[default]
    JustResize,
    CropResize,
    FillResize,
    JustResizeSimple,
}

/// Named ControlNet model.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ControlNetModelField {
    pub model_name: String,
    pub base_model: BaseModelType,
}

impl Default for ControlNetModelField {
    fn default() -> Self {
        Self {
            model_name: DEFAULT_CONTROL_MODEL.to_string(),
            base_model: BaseModelType::default(),
        }
    }
}

/// A single weight for every step, or one weight per step.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ControlWeight {
    Single(f64),
    PerStep(Vec<f64>),
}

impl Default for ControlWeight {
    fn default() -> Self {
        ControlWeight::Single(1.0)
    }
}

impl ControlWeight {
    /// Check every weight lies within `[-1, 2]`. NaN is rejected.
    pub fn validate(&self) -> Result<(), CoreError> {
        let in_range = |w: f64| (MIN_CONTROL_WEIGHT..=MAX_CONTROL_WEIGHT).contains(&w);
        let valid = match self {
            ControlWeight::Single(w) => in_range(*w),
            ControlWeight::PerStep(weights) => weights.iter().copied().all(in_range),
        };
        if valid {
            Ok(())
        } else {
            Err(CoreError::Validation(
                "Control weights must be within -1 to 2 range".to_string(),
            ))
        }
    }
}

/// Request payload for the `controlnet` operation; every field but the image
/// has a default.
#[derive(Debug, Clone, Deserialize)]
pub struct ControlNetParams {
    pub image: ImageField,
    #[serde(default)]
    pub control_model: ControlNetModelField,
    #[serde(default)]
    pub control_weight: ControlWeight,
    #[serde(default)]
    pub begin_step_percent: f64,
    #[serde(default = "default_end_step_percent")]
    pub end_step_percent: f64,
    #[serde(default)]
    pub control_mode: ControlMode,
    #[serde(default)]
    pub resize_mode: ResizeMode,
}

fn default_end_step_percent() -> f64 {
    1.0
}

/// Validated ControlNet descriptor.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ControlField {
    pub image: ImageField,
    pub control_model: ControlNetModelField,
    pub control_weight: ControlWeight,
    pub begin_step_percent: f64,
    pub end_step_percent: f64,
    pub control_mode: ControlMode,
    pub resize_mode: ResizeMode,
}

impl ControlField {
    /// Build a descriptor, rejecting out-of-range weights and step percentages.
    pub fn new(params: ControlNetParams) -> Result<Self, CoreError> {
        params.control_weight.validate()?;
        validate_step_percent("begin_step_percent", params.begin_step_percent)?;
        validate_step_percent("end_step_percent", params.end_step_percent)?;

        Ok(Self {
            image: params.image,
            control_model: params.control_model,
            control_weight: params.control_weight,
            begin_step_percent: params.begin_step_percent,
            end_step_percent: params.end_step_percent,
            control_mode: params.control_mode,
            resize_mode: params.resize_mode,
        })
    }
}

/// Output of the `controlnet` operation.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename = "control_output")]
pub struct ControlOutput {
    pub control: ControlField,
}

fn validate_step_percent(field: &str, value: f64) -> Result<(), CoreError> {
    if (0.0..=1.0).contains(&value) {
        Ok(())
    } else {
        Err(CoreError::Validation(format!(
            "{field} must be within 0 to 1 range, got {value}"
        )))
    }
}
