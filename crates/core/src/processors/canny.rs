//! Canny edge map.

use image::{DynamicImage, RgbImage};

use super::config::CannyConfig;

/// Run Canny edge detection and return the edge map as 3-channel RGB
/// (white edges on black).
pub fn canny_edges(image: &DynamicImage, config: &CannyConfig) -> RgbImage {
    let gray = image.to_luma8();
    let edges = imageproc::edges::canny(
        &gray,
        config.low_threshold as f32,
        config.high_threshold as f32,
    );
    DynamicImage::ImageLuma8(edges).to_rgb8()
}

#[cfg(test)]
mod tests {
    use image::{Rgb, RgbImage};

    use super::*;

    #[test]
    fn flat_image_has_no_edges() {
        let img = DynamicImage::ImageRgb8(RgbImage::from_pixel(32, 32, Rgb([90, 90, 90])));
        let out = canny_edges(&img, &CannyConfig::default());
        assert_eq!(out.dimensions(), (32, 32));
        assert!(out.pixels().all(|p| p.0 == [0, 0, 0]));
    }

    #[test]
    fn step_edge_is_detected() {
        let img = DynamicImage::ImageRgb8(RgbImage::from_fn(32, 32, |x, _| {
            if x < 16 {
                Rgb([0, 0, 0])
            } else {
                Rgb([255, 255, 255])
            }
        }));
        let out = canny_edges(&img, &CannyConfig::default());
        assert!(out.pixels().any(|p| p.0 == [255, 255, 255]));
        // Edge pixels are grey-level copies across all three channels.
        assert!(out.pixels().all(|p| p.0[0] == p.0[1] && p.0[1] == p.0[2]));
    }
}
