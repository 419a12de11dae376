// SPDX-License-Identifier: MIT
//
// Sensitivity detection — heuristic judgment of whether a screenshot likely
// contains personal or private content, and where. Combines fixed top/bottom
// band checks with the text-region detector.

use image::{GrayImage, RgbImage, imageops};
use scrubshot_core::{SensitiveLocation, SensitivityReport};
use tracing::{debug, instrument, warn};

use crate::detect::RegionDetector;
use crate::stats::mean_brightness;

/// Fraction of the image height covered by each scanned band.
pub const BAND_FRACTION: f32 = 0.15;

/// Band mean brightness below this means "not just white space".
pub const BLANK_BAND_THRESHOLD: f32 = 240.0;

/// Band checks only apply to images taller than this.
const MIN_BAND_IMAGE_HEIGHT: u32 = 100;

/// More regions than this flips `found` regardless of the band checks.
pub const REGION_COUNT_THRESHOLD: usize = 3;

/// Region count above which a "multiple text regions" note is added.
const MANY_REGIONS: usize = 5;

/// Detects likely-sensitive areas of a screenshot.
#[derive(Debug, Clone, Copy, Default)]
pub struct SensitivityDetector {
    regions: RegionDetector,
}

impl SensitivityDetector {
    /// Analyze `img` and report flagged areas.
    ///
    /// Never fails: a region-detector error degrades to "no regions" with a
    /// note (the band checks still run). Callers that cannot even reach this
    /// point use [`SensitivityReport::degraded`] to blur the whole frame.
    #[instrument(skip(self, img), fields(width = img.width(), height = img.height()))]
    pub fn analyze(&self, img: &RgbImage) -> SensitivityReport {
        let (width, height) = img.dimensions();
        let gray = imageops::grayscale(img);

        let mut locations = Vec::new();
        let mut details = Vec::new();

        // Headers often carry names and emails; footers signatures and
        // contact info. Blank (near-white) bands are left alone.
        if height > MIN_BAND_IMAGE_HEIGHT {
            if band_mean(&gray, Band::Top) < BLANK_BAND_THRESHOLD {
                locations.push(SensitiveLocation::Top);
                details.push("header area with potential personal info".to_string());
            }
            if band_mean(&gray, Band::Bottom) < BLANK_BAND_THRESHOLD {
                locations.push(SensitiveLocation::Bottom);
                details.push("footer area with potential contact details".to_string());
            }
        }

        let regions = match self.regions.detect(img) {
            Ok(boxes) => boxes,
            Err(err) => {
                warn!(error = %err, "region detection failed; continuing without regions");
                details.push("text-region detection unavailable".to_string());
                Vec::new()
            }
        };

        if regions.len() > MANY_REGIONS {
            details.push("multiple text regions that may contain sensitive data".to_string());
        }

        // Dimension-based notes about the likely screenshot type.
        if width > 800 && height > 600 {
            details.push("desktop screenshot that may show personal information".to_string());
        } else if width < 500 {
            details.push("mobile screenshot that may contain private messages or data".to_string());
        }

        let found = !locations.is_empty() || regions.len() > REGION_COUNT_THRESHOLD;
        debug!(
            found,
            regions = regions.len(),
            ?locations,
            "Sensitivity analysis complete"
        );

        SensitivityReport {
            found,
            degraded: false,
            details,
            locations,
            regions,
        }
    }
}

#[derive(Debug, Clone, Copy)]
enum Band {
    Top,
    Bottom,
}

/// Mean brightness of the top or bottom 15% horizontal band.
fn band_mean(gray: &GrayImage, band: Band) -> f32 {
    let height = gray.height();
    let band_height = ((height as f32 * BAND_FRACTION) as u32).max(1);
    let rows = match band {
        Band::Top => 0..band_height,
        Band::Bottom => height - band_height..height,
    };

    let view = imageops::crop_imm(gray, 0, rows.start, gray.width(), rows.end - rows.start);
    mean_brightness(&view.to_image())
}
