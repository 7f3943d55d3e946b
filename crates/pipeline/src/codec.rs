//! PNG encoding and image decoding. Call these from blocking contexts.

use std::io::Cursor;

use image::{DynamicImage, ImageFormat};

/// Encode as PNG.
pub fn encode_png(image: &DynamicImage) -> Result<Vec<u8>, image::ImageError> {
    let mut buf = Cursor::new(Vec::new());
    image.write_to(&mut buf, ImageFormat::Png)?;
    Ok(buf.into_inner())
}

/// Decode any supported format, sniffing it from the bytes.
pub fn decode(bytes: &[u8]) -> Result<DynamicImage, image::ImageError> {
    image::load_from_memory(bytes)
}
