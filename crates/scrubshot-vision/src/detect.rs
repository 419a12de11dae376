// SPDX-License-Identifier: MIT
//
// Text-region detection — finds candidate text/content regions as bounding
// boxes. The heavy lifting is a single call into imageproc's contour tracer
// over a Canny edge map; the only custom logic is the size filter.

use image::{RgbImage, imageops};
use imageproc::contours::find_contours_with_threshold;
use imageproc::edges::canny;
use scrubshot_core::{BoundingBox, Result, ScrubError};
use tracing::{debug, instrument};

use crate::stats::{CANNY_HIGH, CANNY_LOW};

/// Detects candidate text regions in a screenshot.
///
/// Regions narrower than `min_width` or shorter than `min_height` are
/// discarded as noise (single glyph fragments, speckles). Callers treat an
/// `Err` as "the detector failed" and degrade to an empty sequence with a
/// warning; an empty `Ok` means the detector genuinely found nothing.
#[derive(Debug, Clone, Copy)]
pub struct RegionDetector {
    /// Boxes must be strictly wider than this to survive the filter.
    pub min_width: u32,
    /// Boxes must be strictly taller than this to survive the filter.
    pub min_height: u32,
}

impl Default for RegionDetector {
    fn default() -> Self {
        Self {
            min_width: 20,
            min_height: 10,
        }
    }
}

impl RegionDetector {
    /// Detect candidate regions in `img`.
    ///
    /// Every returned box satisfies the size filter and lies within the
    /// image bounds.
    #[instrument(skip(self, img), fields(width = img.width(), height = img.height()))]
    pub fn detect(&self, img: &RgbImage) -> Result<Vec<BoundingBox>> {
        let (width, height) = img.dimensions();
        if width == 0 || height == 0 {
            return Err(ScrubError::Detection("image has zero dimensions".into()));
        }

        let gray = imageops::grayscale(img);
        let edges = canny(&gray, CANNY_LOW, CANNY_HIGH);
        let contours = find_contours_with_threshold::<i32>(&edges, 0);

        let mut boxes = Vec::new();
        for contour in &contours {
            if contour.points.is_empty() {
                continue;
            }
            let (mut min_x, mut min_y) = (i32::MAX, i32::MAX);
            let (mut max_x, mut max_y) = (i32::MIN, i32::MIN);
            for p in &contour.points {
                min_x = min_x.min(p.x);
                min_y = min_y.min(p.y);
                max_x = max_x.max(p.x);
                max_y = max_y.max(p.y);
            }

            let candidate = BoundingBox::new(
                min_x.max(0) as u32,
                min_y.max(0) as u32,
                (max_x.max(0) as u32).saturating_add(1),
                (max_y.max(0) as u32).saturating_add(1),
            );
            let Some(clamped) = candidate.clamp_to(width, height) else {
                continue;
            };
            if clamped.width() > self.min_width && clamped.height() > self.min_height {
                boxes.push(clamped);
            }
        }

        debug!(
            contours = contours.len(),
            regions = boxes.len(),
            "Region detection complete"
        );
        Ok(boxes)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::Rgb;

    fn white_with_block(w: u32, h: u32, x1: u32, y1: u32, x2: u32, y2: u32) -> RgbImage {
        RgbImage::from_fn(w, h, |x, y| {
            if x >= x1 && x < x2 && y >= y1 && y < y2 {
                Rgb([0, 0, 0])
            } else {
                Rgb([255, 255, 255])
            }
        })
    }

    #[test]
    fn blank_image_has_no_regions() {
        let img = RgbImage::from_pixel(300, 200, Rgb([255, 255, 255]));
        let boxes = RegionDetector::default().detect(&img).expect("detect");
        assert!(boxes.is_empty());
    }

    #[test]
    fn dark_block_on_white_is_detected() {
        let img = white_with_block(300, 200, 50, 60, 150, 100);
        let boxes = RegionDetector::default().detect(&img).expect("detect");
        assert!(!boxes.is_empty());
        // At least one box roughly covers the block.
        assert!(
            boxes
                .iter()
                .any(|b| b.x1 <= 55 && b.x2 >= 145 && b.y1 <= 65 && b.y2 >= 95)
        );
    }

    #[test]
    fn every_box_passes_filter_and_lies_in_bounds() {
        let img = white_with_block(300, 200, 10, 10, 250, 180);
        let detector = RegionDetector::default();
        for b in detector.detect(&img).expect("detect") {
            assert!(b.width() > detector.min_width);
            assert!(b.height() > detector.min_height);
            assert!(b.x2 <= 300 && b.y2 <= 200);
            assert!(b.x1 < b.x2 && b.y1 < b.y2);
        }
    }

    #[test]
    fn tiny_specks_are_filtered_out() {
        // 5x5 block: above Canny's notice threshold but below the size filter.
        let img = white_with_block(300, 200, 100, 100, 105, 105);
        let boxes = RegionDetector::default().detect(&img).expect("detect");
        assert!(boxes.is_empty());
    }
}
