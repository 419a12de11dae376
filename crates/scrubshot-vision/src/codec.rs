// SPDX-License-Identifier: MIT
//
// Image codec — decode uploaded bytes into an RGB buffer and encode results
// back to PNG for download.

use std::io::Cursor;

use image::{DynamicImage, ImageFormat, RgbImage};
use scrubshot_core::{Result, ScrubError};
use tracing::{debug, instrument};

/// Decode uploaded image bytes (PNG, JPEG, ...) into an RGB pixel buffer.
#[instrument(skip(data), fields(data_len = data.len()))]
pub fn decode_image(data: &[u8]) -> Result<RgbImage> {
    let img = image::load_from_memory(data)
        .map_err(|err| ScrubError::Decode(err.to_string()))?
        .to_rgb8();
    debug!(width = img.width(), height = img.height(), "Image decoded");
    Ok(img)
}

/// Encode an RGB buffer as PNG bytes.
#[instrument(skip(img), fields(width = img.width(), height = img.height()))]
pub fn encode_png(img: &RgbImage) -> Result<Vec<u8>> {
    let mut buf = Vec::new();
    DynamicImage::ImageRgb8(img.clone())
        .write_to(&mut Cursor::new(&mut buf), ImageFormat::Png)
        .map_err(|err| ScrubError::Encode(err.to_string()))?;
    Ok(buf)
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::Rgb;

    #[test]
    fn png_round_trip_preserves_dimensions() {
        let img = RgbImage::from_pixel(64, 48, Rgb([10, 200, 30]));
        let bytes = encode_png(&img).expect("encode");
        let decoded = decode_image(&bytes).expect("decode");
        assert_eq!(decoded.dimensions(), (64, 48));
        assert_eq!(decoded.get_pixel(0, 0), &Rgb([10, 200, 30]));
    }

    #[test]
    fn garbage_bytes_fail_to_decode() {
        let err = decode_image(b"definitely not an image").unwrap_err();
        assert!(matches!(err, ScrubError::Decode(_)));
    }
}
