//! Reproducible colouring of segment-anything masks.
//!
//! The annotator service returns one binary mask per region. Regions are
//! painted largest first onto a black canvas, region `i` taking
//! `palette[i % palette.len()]`, so identical masks always render to an
//! identical image.

use image::{Rgb, RgbImage};
use serde::{Deserialize, Serialize};

use crate::error::CoreError;

/// COCO uncompressed run-length encoding of a binary mask.
///
/// `counts` alternates background/foreground run lengths, starting with
/// background, over the pixels in column-major order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RleMask {
    /// `[height, width]`.
    pub size: [u32; 2],
    pub counts: Vec<u32>,
}

/// One annotated region as returned by the annotator service.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SegmentAnnotation {
    /// Foreground pixel count.
    pub area: u64,
    pub segmentation: RleMask,
}

/// Decoded binary mask, row-major.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Mask {
    width: u32,
    height: u32,
    bits: Vec<bool>,
}

impl Mask {
    /// Expand an RLE mask, checking the runs cover exactly `height * width`.
    pub fn decode(rle: &RleMask) -> Result<Self, CoreError> {
        let [height, width] = rle.size;
        let total = height as usize * width as usize;
        let covered: u64 = rle.counts.iter().map(|&c| u64::from(c)).sum();
        if covered != total as u64 {
            return Err(CoreError::Validation(format!(
                "mask runs cover {covered} pixels, expected {total} ({width}x{height})"
            )));
        }

        let mut bits = vec![false; total];
        let mut index = 0usize;
        for (run, &count) in rle.counts.iter().enumerate() {
            let foreground = run % 2 == 1;
            for i in index..index + count as usize {
                if foreground {
                    // Column-major position -> row-major slot.
                    let x = i / height as usize;
                    let y = i % height as usize;
                    bits[y * width as usize + x] = true;
                }
            }
            index += count as usize;
        }

        Ok(Self {
            width,
            height,
            bits,
        })
    }

    pub fn dimensions(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    pub fn contains(&self, x: u32, y: u32) -> bool {
        self.bits[(y * self.width + x) as usize]
    }
}

/// Paint `annotations` onto a black canvas, largest region first.
///
/// The canvas takes the size of the first annotation's mask; every other
/// mask must match it.
pub fn render_annotations(
    annotations: &[SegmentAnnotation],
    palette: &[[u8; 3]],
) -> Result<RgbImage, CoreError> {
    let first = annotations
        .first()
        .ok_or_else(|| CoreError::Validation("no annotated regions to render".to_string()))?;
    if palette.is_empty() {
        return Err(CoreError::Validation("palette is empty".to_string()));
    }

    let [height, width] = first.segmentation.size;
    let mut canvas = RgbImage::new(width, height);

    let mut ordered: Vec<&SegmentAnnotation> = annotations.iter().collect();
    ordered.sort_by(|a, b| b.area.cmp(&a.area));

    for (i, annotation) in ordered.into_iter().enumerate() {
        let mask = Mask::decode(&annotation.segmentation)?;
        if mask.dimensions() != (width, height) {
            return Err(CoreError::Validation(format!(
                "mask is {}x{}, expected {width}x{height}",
                mask.width, mask.height
            )));
        }

        let color = Rgb(palette[i % palette.len()]);
        for (x, y, pixel) in canvas.enumerate_pixels_mut() {
            if mask.contains(x, y) {
                *pixel = color;
            }
        }
    }

    Ok(canvas)
}

/// ADE20K colour palette (150 classes).
pub const ADE_PALETTE: [[u8; 3]; 150] = [
    [120, 120, 120], [180, 120, 120], [6, 230, 230], [80, 50, 50], [4, 200, 3],
    [120, 120, 80], [140, 140, 140], [204, 5, 255], [230, 230, 230], [4, 250, 7],
    [224, 5, 255], [235, 255, 7], [150, 5, 61], [120, 120, 70], [8, 255, 51],
    [255, 6, 82], [143, 255, 140], [204, 255, 4], [255, 51, 7], [204, 70, 3],
    [0, 102, 200], [61, 230, 250], [255, 6, 51], [11, 102, 255], [255, 7, 71],
    [255, 9, 224], [9, 7, 230], [220, 220, 220], [255, 9, 92], [112, 9, 255],
    [8, 255, 214], [7, 255, 224], [255, 184, 6], [10, 255, 71], [255, 41, 10],
    [7, 255, 255], [224, 255, 8], [102, 8, 255], [255, 61, 6], [255, 194, 7],
    [255, 122, 8], [0, 255, 20], [255, 8, 41], [255, 5, 153], [6, 51, 255],
    [235, 12, 255], [160, 150, 20], [0, 163, 255], [140, 140, 140], [250, 10, 15],
    [20, 255, 0], [31, 255, 0], [255, 31, 0], [255, 224, 0], [153, 255, 0],
    [0, 0, 255], [255, 71, 0], [0, 235, 255], [0, 173, 255], [31, 0, 255],
    [11, 200, 200], [255, 82, 0], [0, 255, 245], [0, 61, 255], [0, 255, 112],
    [0, 255, 133], [255, 0, 0], [255, 163, 0], [255, 102, 0], [194, 255, 0],
    [0, 143, 255], [51, 255, 0], [0, 82, 255], [0, 255, 41], [0, 255, 173],
    [10, 0, 255], [173, 255, 0], [0, 255, 153], [255, 92, 0], [255, 0, 255],
    [255, 0, 245], [255, 0, 102], [255, 173, 0], [255, 0, 20], [255, 184, 184],
    [0, 31, 255], [0, 255, 61], [0, 71, 255], [255, 0, 204], [0, 255, 194],
    [0, 255, 82], [0, 10, 255], [0, 112, 255], [51, 0, 255], [0, 194, 255],
    [0, 122, 255], [0, 255, 163], [255, 153, 0], [0, 255, 10], [255, 112, 0],
    [143, 255, 0], [82, 0, 255], [163, 255, 0], [255, 235, 0], [8, 184, 170],
    [133, 0, 255], [0, 255, 92], [184, 0, 255], [255, 0, 31], [0, 184, 255],
    [0, 214, 255], [255, 0, 112], [92, 255, 0], [0, 224, 255], [112, 224, 255],
    [70, 184, 160], [163, 0, 255], [153, 0, 255], [71, 255, 0], [255, 0, 163],
    [255, 204, 0], [255, 0, 143], [0, 255, 235], [133, 255, 0], [255, 0, 235],
    [245, 0, 255], [255, 0, 122], [255, 245, 0], [10, 190, 212], [214, 255, 0],
    [0, 204, 255], [20, 0, 255], [255, 255, 0], [0, 153, 255], [0, 41, 255],
    [0, 255, 204], [41, 0, 255], [41, 255, 0], [173, 0, 255], [0, 245, 255],
    [71, 0, 255], [122, 0, 255], [0, 255, 184], [0, 92, 255], [184, 255, 0],
    [0, 133, 255], [255, 214, 0], [25, 194, 194], [102, 255, 0], [92, 0, 255],
];
