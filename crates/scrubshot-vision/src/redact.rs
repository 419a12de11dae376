// SPDX-License-Identifier: MIT
//
// Redaction applier — Gaussian-blurs the regions and bands flagged by a
// sensitivity report. Each blur is crop → filter → paste-back on a copy of
// the input; the operations are independent and commute.

use image::{RgbImage, imageops};
use imageproc::filter::gaussian_blur_f32;
use scrubshot_core::config::{MAX_BLUR_STRENGTH, MIN_BLUR_STRENGTH};
use scrubshot_core::{BoundingBox, Result, ScrubError, SensitivityReport};
use tracing::{debug, info, instrument};

use crate::sensitivity::BAND_FRACTION;

/// Blur every flagged region and band of `img` with the given strength.
///
/// Returns a new image with the input's dimensions; the input is untouched.
/// A report whose locations include the entire image blurs the whole frame
/// (the conservative fallback path).
#[instrument(skip(img, report), fields(width = img.width(), height = img.height(), blur_strength))]
pub fn apply_smart_blur(
    img: &RgbImage,
    report: &SensitivityReport,
    blur_strength: u8,
) -> Result<RgbImage> {
    if !(MIN_BLUR_STRENGTH..=MAX_BLUR_STRENGTH).contains(&blur_strength) {
        return Err(ScrubError::InvalidParameter {
            name: "blur_strength",
            value: blur_strength.to_string(),
            expected: "1 to 30",
        });
    }
    let sigma = f32::from(blur_strength);
    let (width, height) = img.dimensions();

    if report.blur_everything() {
        info!("Analysis was degraded; blurring the entire frame");
        return Ok(gaussian_blur_f32(img, sigma));
    }

    let mut result = img.clone();

    for region in &report.regions {
        // Boxes from the detector are already clamped; re-clamp anyway so a
        // hand-built report cannot push the crop out of bounds.
        if let Some(b) = region.clamp_to(width, height) {
            blur_rect(&mut result, b, sigma);
        }
    }

    let band_height = ((height as f32 * BAND_FRACTION) as u32).max(1);
    if report.covers_top() {
        blur_rect(&mut result, BoundingBox::new(0, 0, width, band_height), sigma);
    }
    if report.covers_bottom() {
        blur_rect(
            &mut result,
            BoundingBox::new(0, height - band_height, width, height),
            sigma,
        );
    }

    debug!(regions = report.regions.len(), "Smart blur applied");
    Ok(result)
}

/// Blur one rectangle of `img` in place: crop a fresh copy of the current
/// pixels, filter it, paste it back at the same coordinates.
fn blur_rect(img: &mut RgbImage, rect: BoundingBox, sigma: f32) {
    let crop = imageops::crop_imm(img, rect.x1, rect.y1, rect.width(), rect.height()).to_image();
    let blurred = gaussian_blur_f32(&crop, sigma);
    imageops::replace(img, &blurred, i64::from(rect.x1), i64::from(rect.y1));
}
