// SPDX-License-Identifier: MIT
//
// Quality enhancement — three fixed-factor adjustments applied in sequence
// to a copy of the input: sharpness, contrast, color saturation. Each is a
// per-pixel interpolation between the image and a reference version of
// itself (blurred, mean-gray, desaturated); factor 1.0 is the identity.

use image::{Rgb, RgbImage, imageops};
use imageproc::filter::gaussian_blur_f32;
use tracing::{debug, instrument};

use crate::stats::mean_brightness;

const SHARPNESS_FACTOR: f32 = 1.2;
const CONTRAST_FACTOR: f32 = 1.1;
const SATURATION_FACTOR: f32 = 1.05;

/// Sigma of the smoothing pass the sharpness blend works against.
const SHARPNESS_SIGMA: f32 = 1.0;

/// Apply the fixed enhancement chain. Pure and deterministic; the input is
/// untouched and the output has its dimensions.
#[instrument(skip(img), fields(width = img.width(), height = img.height()))]
pub fn enhance_quality(img: &RgbImage) -> RgbImage {
    let sharpened = adjust_sharpness(img, SHARPNESS_FACTOR);
    let contrasted = adjust_contrast(&sharpened, CONTRAST_FACTOR);
    let result = adjust_saturation(&contrasted, SATURATION_FACTOR);
    debug!("Enhancement chain applied");
    result
}

fn lerp(reference: f32, value: f32, factor: f32) -> u8 {
    (reference + (value - reference) * factor).round().clamp(0.0, 255.0) as u8
}

/// Interpolate away from a Gaussian-smoothed copy: factor > 1 sharpens.
fn adjust_sharpness(img: &RgbImage, factor: f32) -> RgbImage {
    let smooth = gaussian_blur_f32(img, SHARPNESS_SIGMA);
    RgbImage::from_fn(img.width(), img.height(), |x, y| {
        let p = img.get_pixel(x, y).0;
        let s = smooth.get_pixel(x, y).0;
        Rgb([
            lerp(s[0] as f32, p[0] as f32, factor),
            lerp(s[1] as f32, p[1] as f32, factor),
            lerp(s[2] as f32, p[2] as f32, factor),
        ])
    })
}

/// Interpolate away from the image's mean grayscale level: factor > 1
/// increases contrast.
fn adjust_contrast(img: &RgbImage, factor: f32) -> RgbImage {
    let mean = mean_brightness(&imageops::grayscale(img));
    RgbImage::from_fn(img.width(), img.height(), |x, y| {
        let p = img.get_pixel(x, y).0;
        Rgb([
            lerp(mean, p[0] as f32, factor),
            lerp(mean, p[1] as f32, factor),
            lerp(mean, p[2] as f32, factor),
        ])
    })
}

/// Interpolate away from the per-pixel luma: factor > 1 saturates colors.
fn adjust_saturation(img: &RgbImage, factor: f32) -> RgbImage {
    RgbImage::from_fn(img.width(), img.height(), |x, y| {
        let p = img.get_pixel(x, y).0;
        let luma = 0.299 * p[0] as f32 + 0.587 * p[1] as f32 + 0.114 * p[2] as f32;
        Rgb([
            lerp(luma, p[0] as f32, factor),
            lerp(luma, p[1] as f32, factor),
            lerp(luma, p[2] as f32, factor),
        ])
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn output_keeps_input_dimensions() {
        let img = RgbImage::from_fn(123, 77, |x, y| Rgb([x as u8, y as u8, 100]));
        let out = enhance_quality(&img);
        assert_eq!(out.dimensions(), (123, 77));
    }

    #[test]
    fn uniform_gray_image_is_unchanged() {
        // Every reference (blur, mean, luma) equals the pixel itself, so all
        // three interpolations are identities.
        let img = RgbImage::from_pixel(60, 60, Rgb([128, 128, 128]));
        assert_eq!(enhance_quality(&img), img);
    }

    #[test]
    fn enhancement_is_deterministic() {
        let img = RgbImage::from_fn(50, 50, |x, y| Rgb([(x * 5) as u8, (y * 5) as u8, 40]));
        assert_eq!(enhance_quality(&img), enhance_quality(&img));
    }

    #[test]
    fn contrast_pushes_values_away_from_the_mean() {
        // Half dark, half light: the dark half should get darker and the
        // light half lighter after a contrast factor above 1.
        let img = RgbImage::from_fn(40, 40, |x, _| {
            if x < 20 { Rgb([60, 60, 60]) } else { Rgb([200, 200, 200]) }
        });
        let out = adjust_contrast(&img, CONTRAST_FACTOR);
        assert!(out.get_pixel(5, 20).0[0] < 60);
        assert!(out.get_pixel(35, 20).0[0] > 200);
    }

    #[test]
    fn saturation_spreads_channels_apart() {
        let img = RgbImage::from_pixel(10, 10, Rgb([100, 150, 200]));
        let out = adjust_saturation(&img, SATURATION_FACTOR);
        let p = out.get_pixel(5, 5).0;
        // The below-luma channel drops, the above-luma channel rises.
        assert!(p[0] < 100);
        assert!(p[2] > 200);
    }
}
