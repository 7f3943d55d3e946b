//! Running a processor over a stored image.
//!
//! The flow is the same for every processor: validate the settings, load
//! the input, produce the control image, store it as an internal `control`
//! image tagged with the caller's session/node, and return its reference.

use image::DynamicImage;
use serde::Deserialize;
use validator::Validate;

use muse_annotators::{remote_request, AnnotatorClient, AnnotatorError};
use muse_core::error::CoreError;
use muse_core::images::{ImageField, ImageOutput};
use muse_core::processors::canny::canny_edges;
use muse_core::processors::segmentation::{render_annotations, ADE_PALETTE};
use muse_core::processors::shuffle::content_shuffle;
use muse_core::processors::tile::tile_resample;
use muse_core::processors::ProcessorConfig;

use crate::codec::{decode, encode_png};
use crate::store::{ImageStore, NewImage};
use crate::PipelineError;

/// Longest session or node id the `images` table accepts.
pub const MAX_TAG_LEN: u64 = 255;

/// Caller-supplied tags for the output image.
#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct InvocationContext {
    #[validate(length(max = 255))]
    pub session_id: Option<String>,
    #[validate(length(max = 255))]
    pub node_id: Option<String>,
    #[serde(default)]
    pub is_intermediate: bool,
}

/// Run `config` over `image` and store the result.
pub async fn invoke_processor(
    store: &dyn ImageStore,
    annotator: &AnnotatorClient,
    image: &ImageField,
    config: &ProcessorConfig,
    context: InvocationContext,
) -> Result<ImageOutput, PipelineError> {
    config.validate()?;
    context.validate().map_err(CoreError::from)?;
    let processor = config.kind().type_name();

    let input = store.load(&image.image_name).await?;
    let output = run(annotator, input, config).await?;

    let stored = store
        .save(
            output,
            NewImage::control(context.session_id, context.node_id, context.is_intermediate),
        )
        .await?;

    tracing::info!(
        processor,
        input = %image.image_name,
        output = %stored.image_name,
        width = stored.width,
        height = stored.height,
        "Processor invocation complete",
    );

    Ok(ImageOutput {
        image: ImageField {
            image_name: stored.image_name,
        },
        width: stored.width,
        height: stored.height,
    })
}

/// Produce the control image for `config`. Validation is the caller's job.
async fn run(
    annotator: &AnnotatorClient,
    input: DynamicImage,
    config: &ProcessorConfig,
) -> Result<DynamicImage, PipelineError> {
    let image = match config {
        ProcessorConfig::Canny(c) => {
            let c = c.clone();
            let edges = tokio::task::spawn_blocking(move || canny_edges(&input, &c)).await?;
            DynamicImage::ImageRgb8(edges)
        }
        ProcessorConfig::ContentShuffle(c) => {
            let c = c.clone();
            let shuffled = tokio::task::spawn_blocking(move || {
                content_shuffle(&input, &c, &mut rand::rng())
            })
            .await??;
            DynamicImage::ImageRgb8(shuffled)
        }
        ProcessorConfig::Tile(c) => {
            let rate = c.down_sampling_rate;
            let resampled =
                tokio::task::spawn_blocking(move || tile_resample(&input, rate)).await?;
            DynamicImage::ImageRgb8(resampled)
        }
        ProcessorConfig::SegmentAnything => {
            let png = tokio::task::spawn_blocking(move || encode_png(&input)).await??;
            let annotations = annotator.segment_masks(png).await?;
            tracing::debug!(regions = annotations.len(), "Rendering segment anything masks");
            let rendered = tokio::task::spawn_blocking(move || {
                render_annotations(&annotations, &ADE_PALETTE)
            })
            .await??;
            DynamicImage::ImageRgb8(rendered)
        }
        remote => {
            let request = remote_request(remote).ok_or_else(|| {
                let name = remote.kind().type_name();
                CoreError::Internal(format!("{name} has no remote detector"))
            })?;
            // The face detector only accepts three channels.
            let input = match remote {
                ProcessorConfig::MediapipeFace(_) => DynamicImage::ImageRgb8(input.to_rgb8()),
                _ => input,
            };
            let png = tokio::task::spawn_blocking(move || encode_png(&input)).await??;
            let result = annotator.annotate(&request, png).await?;
            tokio::task::spawn_blocking(move || decode(&result))
                .await?
                .map_err(|e| AnnotatorError::Decode(e.to_string()))?
        }
    };
    Ok(image)
}
