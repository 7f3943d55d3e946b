//! Mapping from processor settings to annotator service requests.

use std::f64::consts::PI;

use muse_core::processors::ProcessorConfig;
use serde_json::{json, Value};

/// Checkpoint repository shared by the ControlNet detectors.
pub const ANNOTATORS_CHECKPOINT: &str = "lllyasviel/Annotators";

/// Checkpoint repository and subfolder for segment anything.
pub const SAM_CHECKPOINT: &str = "ybelkada/segment-anything";
pub const SAM_SUBFOLDER: &str = "checkpoints";

/// One detector call: the path segment under `/annotators/` and the JSON
/// parameters sent alongside the image.
#[derive(Debug, Clone, PartialEq)]
pub struct RemoteRequest {
    pub detector: &'static str,
    pub params: Value,
}

/// Build the detector call for a remote processor.
///
/// Returns `None` for processors that run in-process. Segment anything is
/// not mapped here; its masks come from [`crate::AnnotatorClient::segment_masks`].
pub fn remote_request(config: &ProcessorConfig) -> Option<RemoteRequest> {
    let (detector, params) = match config {
        ProcessorConfig::Hed(c) => (
            "hed",
            json!({
                "detect_resolution": c.detect_resolution,
                "image_resolution": c.image_resolution,
                "scribble": c.scribble,
            }),
        ),
        ProcessorConfig::Lineart(c) => (
            "lineart",
            json!({
                "detect_resolution": c.detect_resolution,
                "image_resolution": c.image_resolution,
                "coarse": c.coarse,
            }),
        ),
        ProcessorConfig::LineartAnime(c) => (
            "lineart_anime",
            json!({
                "detect_resolution": c.detect_resolution,
                "image_resolution": c.image_resolution,
            }),
        ),
        ProcessorConfig::Openpose(c) => (
            "openpose",
            json!({
                "detect_resolution": c.detect_resolution,
                "image_resolution": c.image_resolution,
                "hand_and_face": c.hand_and_face,
            }),
        ),
        ProcessorConfig::MidasDepth(c) => (
            "midas",
            json!({
                "a": PI * c.a_mult,
                "bg_th": c.bg_th,
            }),
        ),
        ProcessorConfig::NormalBae(c) => (
            "normalbae",
            json!({
                "detect_resolution": c.detect_resolution,
                "image_resolution": c.image_resolution,
            }),
        ),
        ProcessorConfig::Mlsd(c) => (
            "mlsd",
            json!({
                "detect_resolution": c.detect_resolution,
                "image_resolution": c.image_resolution,
                "thr_v": c.thr_v,
                "thr_d": c.thr_d,
            }),
        ),
        ProcessorConfig::Pidi(c) => (
            "pidi",
            json!({
                "detect_resolution": c.detect_resolution,
                "image_resolution": c.image_resolution,
                "safe": c.safe,
                "scribble": c.scribble,
            }),
        ),
        ProcessorConfig::ZoeDepth => ("zoe", json!({})),
        ProcessorConfig::MediapipeFace(c) => (
            "mediapipe_face",
            json!({
                "max_faces": c.max_faces,
                "min_confidence": c.min_confidence,
            }),
        ),
        ProcessorConfig::Leres(c) => (
            "leres",
            json!({
                "detect_resolution": c.detect_resolution,
                "image_resolution": c.image_resolution,
                "thr_a": c.thr_a,
                "thr_b": c.thr_b,
                "boost": c.boost,
            }),
        ),
        ProcessorConfig::Canny(_)
        | ProcessorConfig::ContentShuffle(_)
        | ProcessorConfig::Tile(_)
        | ProcessorConfig::SegmentAnything => return None,
    };

    Some(RemoteRequest {
        detector,
        params: with_checkpoint(params, ANNOTATORS_CHECKPOINT, None),
    })
}

/// Parameters for the segment anything mask generator.
pub fn sam_params() -> Value {
    with_checkpoint(json!({}), SAM_CHECKPOINT, Some(SAM_SUBFOLDER))
}

fn with_checkpoint(mut params: Value, pretrained: &str, subfolder: Option<&str>) -> Value {
    if let Value::Object(map) = &mut params {
        map.insert("pretrained".into(), json!(pretrained));
        if let Some(subfolder) = subfolder {
            map.insert("subfolder".into(), json!(subfolder));
        }
    }
    params
}
