//! Content shuffle: scramble an image through a smooth random displacement
//! field, keeping colours and textures while destroying layout.

use image::imageops::{self, FilterType};
use image::{DynamicImage, ImageBuffer, Luma, Rgb, RgbImage};
use rand::Rng;

use super::config::ContentShuffleConfig;
use super::resize::{resize_to_resolution, resolution_dimensions};
use crate::error::CoreError;

type NoiseField = ImageBuffer<Luma<f32>, Vec<f32>>;

/// Shuffle `image` using randomness from `rng`.
///
/// Same seed, same output.
pub fn content_shuffle<R: Rng + ?Sized>(
    image: &DynamicImage,
    config: &ContentShuffleConfig,
    rng: &mut R,
) -> Result<RgbImage, CoreError> {
    let (h, w, f) = (
        positive("h", config.h)?,
        positive("w", config.w)?,
        positive("f", config.f)?,
    );

    let input = resize_to_resolution(&image.to_rgb8(), config.detect_resolution as u32)?;
    let (width, height) = input.dimensions();

    let flow_x = noise_disk(h, w, f, rng);
    let flow_y = noise_disk(h, w, f, rng);
    let max_x = (width - 1) as f32;
    let max_y = (height - 1) as f32;

    let shuffled = RgbImage::from_fn(w, h, |x, y| {
        let sx = flow_x.get_pixel(x, y).0[0] * max_x;
        let sy = flow_y.get_pixel(x, y).0[0] * max_y;
        sample_bilinear(&input, sx, sy)
    });

    let (target_w, target_h) =
        resolution_dimensions(width, height, config.image_resolution as u32);
    if target_w == 0 || target_h == 0 {
        return Err(CoreError::Validation(format!(
            "image_resolution {} is too small",
            config.image_resolution
        )));
    }
    Ok(imageops::resize(&shuffled, target_w, target_h, FilterType::Triangle))
}

fn positive(field: &str, value: i32) -> Result<u32, CoreError> {
    u32::try_from(value)
        .ok()
        .filter(|v| *v > 0)
        .ok_or_else(|| CoreError::Validation(format!("{field} must be positive, got {value}")))
}

/// Smooth noise in `[0, 1]`: a coarse uniform grid cubic-upsampled past the
/// target size, cropped by `f` on each side, then min-max normalised.
fn noise_disk<R: Rng + ?Sized>(h: u32, w: u32, f: u32, rng: &mut R) -> NoiseField {
    let grid = NoiseField::from_fn(w / f + 2, h / f + 2, |_, _| Luma([rng.random::<f32>()]));
    let upsampled = imageops::resize(&grid, w + 2 * f, h + 2 * f, FilterType::CatmullRom);
    let mut noise = imageops::crop_imm(&upsampled, f, f, w, h).to_image();

    let (min, max) = noise
        .pixels()
        .fold((f32::MAX, f32::MIN), |(lo, hi), p| (lo.min(p.0[0]), hi.max(p.0[0])));
    let range = max - min;
    for p in noise.pixels_mut() {
        p.0[0] = if range > 0.0 { (p.0[0] - min) / range } else { 0.0 };
    }
    noise
}

fn sample_bilinear(image: &RgbImage, x: f32, y: f32) -> Rgb<u8> {
    let (width, height) = image.dimensions();
    let x0 = (x.floor().max(0.0) as u32).min(width - 1);
    let y0 = (y.floor().max(0.0) as u32).min(height - 1);
    let x1 = (x0 + 1).min(width - 1);
    let y1 = (y0 + 1).min(height - 1);
    let fx = (x - x0 as f32).clamp(0.0, 1.0);
    let fy = (y - y0 as f32).clamp(0.0, 1.0);

    let p00 = image.get_pixel(x0, y0).0;
    let p10 = image.get_pixel(x1, y0).0;
    let p01 = image.get_pixel(x0, y1).0;
    let p11 = image.get_pixel(x1, y1).0;

    let mut out = [0u8; 3];
    for c in 0..3 {
        let top = f32::from(p00[c]) * (1.0 - fx) + f32::from(p10[c]) * fx;
        let bottom = f32::from(p01[c]) * (1.0 - fx) + f32::from(p11[c]) * fx;
        out[c] = (top * (1.0 - fy) + bottom * fy).round().clamp(0.0, 255.0) as u8;
    }
    Rgb(out)
}
