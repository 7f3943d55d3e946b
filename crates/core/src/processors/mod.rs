//! ControlNet preprocessor catalogue.
//!
//! [`ProcessorConfig`] is the tagged union of every processor's settings; the
//! `type` tag is the processor identifier used on the wire. Processors either
//! run in-process ([`Execution::Local`]), are delegated to the external
//! annotator service ([`Execution::Remote`]), or both (segment anything:
//! masks come from the service, colouring happens here).

pub mod canny;
pub mod config;
pub mod resize;
pub mod segmentation;
pub mod shuffle;
pub mod tile;

use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::error::CoreError;

pub use config::{
    CannyConfig, ContentShuffleConfig, HedConfig, LeresConfig, LineartConfig,
    MediapipeFaceConfig, MidasDepthConfig, MlsdConfig, OpenposeConfig, PidiConfig,
    ResolutionConfig, TileConfig, MAX_RESOLUTION,
};

/// Where a processor's work happens.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Execution {
    Local,
    Remote,
    Mixed,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum ProcessorConfig {
    #[serde(rename = "canny_image_processor")]
    Canny(CannyConfig),
    #[serde(rename = "hed_image_processor")]
    Hed(HedConfig),
    #[serde(rename = "lineart_image_processor")]
    Lineart(LineartConfig),
    #[serde(rename = "lineart_anime_image_processor")]
    LineartAnime(ResolutionConfig),
    #[serde(rename = "openpose_image_processor")]
    Openpose(OpenposeConfig),
    #[serde(rename = "midas_depth_image_processor")]
    MidasDepth(MidasDepthConfig),
    #[serde(rename = "normalbae_image_processor")]
    NormalBae(ResolutionConfig),
    #[serde(rename = "mlsd_image_processor")]
    Mlsd(MlsdConfig),
    #[serde(rename = "pidi_image_processor")]
    Pidi(PidiConfig),
    #[serde(rename = "content_shuffle_image_processor")]
    ContentShuffle(ContentShuffleConfig),
    #[serde(rename = "zoe_depth_image_processor")]
    ZoeDepth,
    #[serde(rename = "mediapipe_face_processor")]
    MediapipeFace(MediapipeFaceConfig),
    #[serde(rename = "leres_image_processor")]
    Leres(LeresConfig),
    #[serde(rename = "tile_image_processor")]
    Tile(TileConfig),
    #[serde(rename = "segment_anything_processor")]
    SegmentAnything,
}

impl ProcessorConfig {
    /// Check the processor's numeric ranges.
    pub fn validate(&self) -> Result<(), CoreError> {
        match self {
            Self::Canny(c) => c.validate()?,
            Self::Hed(c) => c.validate()?,
            Self::Lineart(c) => c.validate()?,
            Self::LineartAnime(c) | Self::NormalBae(c) => c.validate()?,
            Self::Openpose(c) => c.validate()?,
            Self::MidasDepth(c) => c.validate()?,
            Self::Mlsd(c) => c.validate()?,
            Self::Pidi(c) => c.validate()?,
            Self::ContentShuffle(c) => c.validate()?,
            Self::MediapipeFace(c) => c.validate()?,
            Self::Leres(c) => c.validate()?,
            Self::Tile(c) => c.validate()?,
            Self::ZoeDepth | Self::SegmentAnything => {}
        }
        Ok(())
    }

    /// The wire identifier (`type` tag) of this processor.
    pub fn kind(&self) -> ProcessorKind {
        match self {
            Self::Canny(_) => ProcessorKind::Canny,
            Self::Hed(_) => ProcessorKind::Hed,
            Self::Lineart(_) => ProcessorKind::Lineart,
            Self::LineartAnime(_) => ProcessorKind::LineartAnime,
            Self::Openpose(_) => ProcessorKind::Openpose,
            Self::MidasDepth(_) => ProcessorKind::MidasDepth,
            Self::NormalBae(_) => ProcessorKind::NormalBae,
            Self::Mlsd(_) => ProcessorKind::Mlsd,
            Self::Pidi(_) => ProcessorKind::Pidi,
            Self::ContentShuffle(_) => ProcessorKind::ContentShuffle,
            Self::ZoeDepth => ProcessorKind::ZoeDepth,
            Self::MediapipeFace(_) => ProcessorKind::MediapipeFace,
            Self::Leres(_) => ProcessorKind::Leres,
            Self::Tile(_) => ProcessorKind::Tile,
            Self::SegmentAnything => ProcessorKind::SegmentAnything,
        }
    }
}

/// Processor identifiers, independent of their settings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ProcessorKind {
    Canny,
    Hed,
    Lineart,
    LineartAnime,
    Openpose,
    MidasDepth,
    NormalBae,
    Mlsd,
    Pidi,
    ContentShuffle,
    ZoeDepth,
    MediapipeFace,
    Leres,
    Tile,
    SegmentAnything,
}

impl ProcessorKind {
    pub const ALL: [ProcessorKind; 15] = [
        ProcessorKind::Canny,
        ProcessorKind::Hed,
        ProcessorKind::Lineart,
        ProcessorKind::LineartAnime,
        ProcessorKind::Openpose,
        ProcessorKind::MidasDepth,
        ProcessorKind::NormalBae,
        ProcessorKind::Mlsd,
        ProcessorKind::Pidi,
        ProcessorKind::ContentShuffle,
        ProcessorKind::ZoeDepth,
        ProcessorKind::MediapipeFace,
        ProcessorKind::Leres,
        ProcessorKind::Tile,
        ProcessorKind::SegmentAnything,
    ];

    /// Wire identifier, identical to the serde `type` tag.
    pub fn type_name(self) -> &'static str {
        match self {
            Self::Canny => "canny_image_processor",
            Self::Hed => "hed_image_processor",
            Self::Lineart => "lineart_image_processor",
            Self::LineartAnime => "lineart_anime_image_processor",
            Self::Openpose => "openpose_image_processor",
            Self::MidasDepth => "midas_depth_image_processor",
            Self::NormalBae => "normalbae_image_processor",
            Self::Mlsd => "mlsd_image_processor",
            Self::Pidi => "pidi_image_processor",
            Self::ContentShuffle => "content_shuffle_image_processor",
            Self::ZoeDepth => "zoe_depth_image_processor",
            Self::MediapipeFace => "mediapipe_face_processor",
            Self::Leres => "leres_image_processor",
            Self::Tile => "tile_image_processor",
            Self::SegmentAnything => "segment_anything_processor",
        }
    }

    pub fn title(self) -> &'static str {
        match self {
            Self::Canny => "Canny Processor",
            Self::Hed => "HED (softedge) Processor",
            Self::Lineart => "Lineart Processor",
            Self::LineartAnime => "Lineart Anime Processor",
            Self::Openpose => "Openpose Processor",
            Self::MidasDepth => "Midas (Depth) Processor",
            Self::NormalBae => "Normal BAE Processor",
            Self::Mlsd => "MLSD Processor",
            Self::Pidi => "PIDI Processor",
            Self::ContentShuffle => "Content Shuffle Processor",
            Self::ZoeDepth => "Zoe (Depth) Processor",
            Self::MediapipeFace => "Mediapipe Face Processor",
            Self::Leres => "Leres (Depth) Processor",
            Self::Tile => "Tile Resample Processor",
            Self::SegmentAnything => "Segment Anything Processor",
        }
    }

    pub fn tags(self) -> &'static [&'static str] {
        match self {
            Self::Canny => &["controlnet", "canny"],
            Self::Hed => &["controlnet", "hed", "softedge"],
            Self::Lineart => &["controlnet", "lineart"],
            Self::LineartAnime => &["controlnet", "lineart", "anime"],
            Self::Openpose => &["controlnet", "openpose", "pose"],
            Self::MidasDepth => &["controlnet", "midas", "depth"],
            Self::NormalBae => &["controlnet", "normal", "bae"],
            Self::Mlsd => &["controlnet", "mlsd"],
            Self::Pidi => &["controlnet", "pidi"],
            Self::ContentShuffle => &["controlnet", "contentshuffle"],
            Self::ZoeDepth => &["controlnet", "zoe", "depth"],
            Self::MediapipeFace => &["controlnet", "mediapipe", "face"],
            Self::Leres => &["controlnet", "leres", "depth"],
            Self::Tile => &["controlnet", "tile"],
            Self::SegmentAnything => &["controlnet", "segmentanything"],
        }
    }

    pub fn execution(self) -> Execution {
        match self {
            Self::Canny | Self::ContentShuffle | Self::Tile => Execution::Local,
            Self::SegmentAnything => Execution::Mixed,
            _ => Execution::Remote,
        }
    }
}

/// Catalogue entry describing one processor.
#[derive(Debug, Clone, Serialize)]
pub struct ProcessorInfo {
    #[serde(rename = "type")]
    pub type_name: &'static str,
    pub title: &'static str,
    pub tags: &'static [&'static str],
    pub execution: Execution,
}

/// Every available processor, in catalogue order.
pub fn catalogue() -> Vec<ProcessorInfo> {
    ProcessorKind::ALL
        .iter()
        .map(|&kind| ProcessorInfo {
            type_name: kind.type_name(),
            title: kind.title(),
            tags: kind.tags(),
            execution: kind.execution(),
        })
        .collect()
}
