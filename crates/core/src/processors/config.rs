//! Per-processor configuration records.
//!
//! Every record deserializes with the processor's defaults filled in and
//! carries its numeric ranges as `validator` attributes; call
//! [`super::ProcessorConfig::validate`] before running anything.

use serde::{Deserialize, Serialize};
use validator::Validate;

/// Default detect/image resolution for model-backed detectors.
pub const DEFAULT_RESOLUTION: i32 = 512;

/// Upper bound on every resolution and output dimension.
pub const MAX_RESOLUTION: i32 = 8192;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
#[serde(default)]
pub struct CannyConfig {
    #[validate(range(min = 0, max = 255))]
    pub low_threshold: i32,
    #[validate(range(min = 0, max = 255))]
    pub high_threshold: i32,
}

impl Default for CannyConfig {
    fn default() -> Self {
        Self {
            low_threshold: 100,
            high_threshold: 200,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
#[serde(default)]
pub struct HedConfig {
    #[validate(range(min = 0, max = 8192))]
    pub detect_resolution: i32,
    #[validate(range(min = 0, max = 8192))]
    pub image_resolution: i32,
    pub scribble: bool,
}

impl Default for HedConfig {
    fn default() -> Self {
        Self {
            detect_resolution: DEFAULT_RESOLUTION,
            image_resolution: DEFAULT_RESOLUTION,
            scribble: false,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
#[serde(default)]
pub struct LineartConfig {
    #[validate(range(min = 0, max = 8192))]
    pub detect_resolution: i32,
    #[validate(range(min = 0, max = 8192))]
    pub image_resolution: i32,
    pub coarse: bool,
}

impl Default for LineartConfig {
    fn default() -> Self {
        Self {
            detect_resolution: DEFAULT_RESOLUTION,
            image_resolution: DEFAULT_RESOLUTION,
            coarse: false,
        }
    }
}

/// Resolution-only settings shared by lineart anime and NormalBae.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
#[serde(default)]
pub struct ResolutionConfig {
    #[validate(range(min = 0, max = 8192))]
    pub detect_resolution: i32,
    #[validate(range(min = 0, max = 8192))]
    pub image_resolution: i32,
}

impl Default for ResolutionConfig {
    fn default() -> Self {
        Self {
            detect_resolution: DEFAULT_RESOLUTION,
            image_resolution: DEFAULT_RESOLUTION,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
#[serde(default)]
pub struct OpenposeConfig {
    pub hand_and_face: bool,
    #[validate(range(min = 0, max = 8192))]
    pub detect_resolution: i32,
    #[validate(range(min = 0, max = 8192))]
    pub image_resolution: i32,
}

impl Default for OpenposeConfig {
    fn default() -> Self {
        Self {
            hand_and_face: false,
            detect_resolution: DEFAULT_RESOLUTION,
            image_resolution: DEFAULT_RESOLUTION,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
#[serde(default)]
pub struct MidasDepthConfig {
    /// Multiplier of pi; the detector receives `a = pi * a_mult`.
    #[validate(range(min = 0.0))]
    pub a_mult: f64,
    #[validate(range(min = 0.0))]
    pub bg_th: f64,
}

impl Default for MidasDepthConfig {
    fn default() -> Self {
        Self {
            a_mult: 2.0,
            bg_th: 0.1,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
#[serde(default)]
pub struct MlsdConfig {
    #[validate(range(min = 0, max = 8192))]
    pub detect_resolution: i32,
    #[validate(range(min = 0, max = 8192))]
    pub image_resolution: i32,
    #[validate(range(min = 0.0))]
    pub thr_v: f64,
    #[validate(range(min = 0.0))]
    pub thr_d: f64,
}

impl Default for MlsdConfig {
    fn default() -> Self {
        Self {
            detect_resolution: DEFAULT_RESOLUTION,
            image_resolution: DEFAULT_RESOLUTION,
            thr_v: 0.1,
            thr_d: 0.1,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
#[serde(default)]
pub struct PidiConfig {
    #[validate(range(min = 0, max = 8192))]
    pub detect_resolution: i32,
    #[validate(range(min = 0, max = 8192))]
    pub image_resolution: i32,
    pub safe: bool,
    pub scribble: bool,
}

impl Default for PidiConfig {
    fn default() -> Self {
        Self {
            detect_resolution: DEFAULT_RESOLUTION,
            image_resolution: DEFAULT_RESOLUTION,
            safe: false,
            scribble: false,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
#[serde(default)]
pub struct ContentShuffleConfig {
    #[validate(range(min = 0, max = 8192))]
    pub detect_resolution: i32,
    #[validate(range(min = 0, max = 8192))]
    pub image_resolution: i32,
    /// Height of the shuffled output before the final resize.
    #[validate(range(min = 0, max = 8192))]
    pub h: i32,
    /// Width of the shuffled output before the final resize.
    #[validate(range(min = 0, max = 8192))]
    pub w: i32,
    /// Feature size of the noise field; larger means smoother displacement.
    #[validate(range(min = 0, max = 8192))]
    pub f: i32,
}

impl Default for ContentShuffleConfig {
    fn default() -> Self {
        Self {
            detect_resolution: DEFAULT_RESOLUTION,
            image_resolution: DEFAULT_RESOLUTION,
            h: 512,
            w: 512,
            f: 256,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
#[serde(default)]
pub struct MediapipeFaceConfig {
    #[validate(range(min = 1))]
    pub max_faces: i32,
    #[validate(range(min = 0.0, max = 1.0))]
    pub min_confidence: f64,
}

impl Default for MediapipeFaceConfig {
    fn default() -> Self {
        Self {
            max_faces: 1,
            min_confidence: 0.5,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
#[serde(default)]
pub struct LeresConfig {
    pub thr_a: f64,
    pub thr_b: f64,
    pub boost: bool,
    #[validate(range(min = 0, max = 8192))]
    pub detect_resolution: i32,
    #[validate(range(min = 0, max = 8192))]
    pub image_resolution: i32,
}

impl Default for LeresConfig {
    fn default() -> Self {
        Self {
            thr_a: 0.0,
            thr_b: 0.0,
            boost: false,
            detect_resolution: DEFAULT_RESOLUTION,
            image_resolution: DEFAULT_RESOLUTION,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
#[serde(default)]
pub struct TileConfig {
    #[validate(range(min = 1.0, max = 8.0))]
    pub down_sampling_rate: f64,
}

impl Default for TileConfig {
    fn default() -> Self {
        Self {
            down_sampling_rate: 1.0,
        }
    }
}
