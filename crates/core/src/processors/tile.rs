//! Tile resampler: deterministic down-sampling for the tile ControlNet.

use image::{DynamicImage, RgbImage};

use super::resize::resize_area;

/// Rates below this leave the image untouched.
pub const MIN_EFFECTIVE_RATE: f64 = 1.1;

/// Down-sample `image` by `down_sampling_rate` using area averaging.
///
/// The image is always normalised to 3-channel RGB. When the rate is below
/// [`MIN_EFFECTIVE_RATE`] it is returned at its original size; otherwise both
/// dimensions are divided by the rate and truncated.
pub fn tile_resample(image: &DynamicImage, down_sampling_rate: f64) -> RgbImage {
    let rgb = image.to_rgb8();
    if down_sampling_rate < MIN_EFFECTIVE_RATE {
        return rgb;
    }

    let (width, height) = rgb.dimensions();
    let width = (f64::from(width) / down_sampling_rate) as u32;
    let height = (f64::from(height) / down_sampling_rate) as u32;
    resize_area(&rgb, width, height)
}

#[cfg(test)]
mod tests {
    use image::{Rgb, RgbaImage};

    use super::*;

    fn gradient(width: u32, height: u32) -> DynamicImage {
        DynamicImage::ImageRgb8(RgbImage::from_fn(width, height, |x, y| {
            Rgb([(x % 256) as u8, (y % 256) as u8, ((x + y) % 256) as u8])
        }))
    }

    #[test]
    fn rate_below_threshold_keeps_dimensions() {
        let img = gradient(100, 60);
        for rate in [1.0, 1.05, 1.0999] {
            let out = tile_resample(&img, rate);
            assert_eq!(out.dimensions(), (100, 60), "rate {rate}");
            assert_eq!(out.as_raw(), img.to_rgb8().as_raw());
        }
    }

    #[test]
    fn rate_at_or_above_threshold_truncates() {
        let img = gradient(100, 60);
        assert_eq!(tile_resample(&img, 1.1).dimensions(), (90, 54));
        assert_eq!(tile_resample(&img, 2.0).dimensions(), (50, 30));
        assert_eq!(tile_resample(&img, 3.0).dimensions(), (33, 20));
        assert_eq!(tile_resample(&img, 8.0).dimensions(), (12, 7));
    }

    #[test]
    fn output_is_rgb_even_for_rgba_input() {
        let img = DynamicImage::ImageRgba8(RgbaImage::new(20, 20));
        let out = tile_resample(&img, 2.0);
        assert_eq!(out.dimensions(), (10, 10));
        assert_eq!(out.as_raw().len(), 10 * 10 * 3);
    }

    #[test]
    fn resampling_is_deterministic() {
        let img = gradient(64, 48);
        assert_eq!(tile_resample(&img, 2.5), tile_resample(&img, 2.5));
    }
}
