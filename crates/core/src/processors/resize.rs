//! Resampling helpers shared by the local processors.

use image::imageops::{self, FilterType};
use image::{Rgb, RgbImage};

use crate::error::CoreError;

/// Resize by area averaging: every destination pixel is the coverage-weighted
/// mean of the source pixels under its footprint.
///
/// This is the interpolation of choice for down-sampling since it does not
/// alias. Zero target dimensions are clamped to one pixel.
pub fn resize_area(image: &RgbImage, width: u32, height: u32) -> RgbImage {
    let width = width.max(1);
    let height = height.max(1);
    if image.dimensions() == (width, height) {
        return image.clone();
    }

    let x_weights = area_weights(image.width(), width);
    let y_weights = area_weights(image.height(), height);

    RgbImage::from_fn(width, height, |dx, dy| {
        let mut acc = [0.0f64; 3];
        for &(sy, wy) in &y_weights[dy as usize] {
            for &(sx, wx) in &x_weights[dx as usize] {
                let weight = wx * wy;
                let px = image.get_pixel(sx, sy);
                for (channel, value) in acc.iter_mut().zip(px.0) {
                    *channel += weight * f64::from(value);
                }
            }
        }
        Rgb(acc.map(|v| v.round().clamp(0.0, 255.0) as u8))
    })
}

/// For every destination index along one axis, the contributing source
/// indices and their normalised coverage weights.
fn area_weights(src: u32, dst: u32) -> Vec<Vec<(u32, f64)>> {
    let scale = f64::from(src) / f64::from(dst);
    (0..dst)
        .map(|d| {
            let start = f64::from(d) * scale;
            let end = (f64::from(d + 1) * scale).min(f64::from(src));
            let span = end - start;

            let mut weights = Vec::new();
            let mut s = start.floor() as u32;
            while f64::from(s) < end && s < src {
                let lo = f64::from(s).max(start);
                let hi = f64::from(s + 1).min(end);
                if hi > lo {
                    weights.push((s, (hi - lo) / span));
                }
                s += 1;
            }
            weights
        })
        .collect()
}

/// Dimensions after scaling the short side to `resolution`, each rounded to
/// the nearest multiple of 64.
pub fn resolution_dimensions(width: u32, height: u32, resolution: u32) -> (u32, u32) {
    let short = f64::from(width.min(height).max(1));
    let k = f64::from(resolution) / short;
    let round64 = |v: f64| ((v / 64.0).round() * 64.0) as u32;
    (round64(f64::from(width) * k), round64(f64::from(height) * k))
}

/// Scale an image so its short side matches `resolution` (multiples of 64).
///
/// Up-scaling uses Lanczos, down-scaling uses area averaging.
pub fn resize_to_resolution(image: &RgbImage, resolution: u32) -> Result<RgbImage, CoreError> {
    let (width, height) = resolution_dimensions(image.width(), image.height(), resolution);
    if width == 0 || height == 0 {
        return Err(CoreError::Validation(format!(
            "resolution {resolution} is too small for a {}x{} image",
            image.width(),
            image.height()
        )));
    }

    let upscaling = u64::from(width) * u64::from(height)
        > u64::from(image.width()) * u64::from(image.height());
    if upscaling {
        Ok(imageops::resize(image, width, height, FilterType::Lanczos3))
    } else {
        Ok(resize_area(image, width, height))
    }
}
