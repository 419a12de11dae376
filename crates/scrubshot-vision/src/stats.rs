// SPDX-License-Identifier: MIT
//
// Scalar image statistics — the inputs to every heuristic classifier:
// aspect ratio, mean brightness, Canny edge density, and an approximate
// unique-color count from a small downsample.

use std::collections::HashSet;

use image::{GrayImage, RgbImage, imageops};
use imageproc::edges::canny;
use scrubshot_core::{Result, ScrubError};
use serde::Serialize;
use tracing::{debug, instrument};

/// Canny thresholds used for the edge-density measure.
pub const CANNY_LOW: f32 = 50.0;
pub const CANNY_HIGH: f32 = 150.0;

/// Side length of the downsample used for unique-color counting.
const COLOR_SAMPLE_SIZE: u32 = 50;

/// Scalar statistics of one image.
///
/// Deterministic given identical pixel input: computing these twice on the
/// same buffer always yields the same values.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ImageStats {
    pub width: u32,
    pub height: u32,
    /// width / height.
    pub aspect_ratio: f32,
    /// Mean grayscale value, 0–255.
    pub brightness: f32,
    /// Fraction of pixels the Canny filter marks as edges, 0–1.
    pub edge_density: f32,
    /// Distinct RGB triples on a 50x50 nearest-neighbour downsample.
    pub unique_colors: usize,
}

impl ImageStats {
    /// Compute all statistics for `img` in one pass over the derived buffers.
    ///
    /// Fails only for a zero-dimension buffer, which no decoder produces;
    /// callers treat the error as "analysis failed" and degrade.
    #[instrument(skip(img), fields(width = img.width(), height = img.height()))]
    pub fn compute(img: &RgbImage) -> Result<Self> {
        let (width, height) = img.dimensions();
        if width == 0 || height == 0 {
            return Err(ScrubError::Analysis("image has zero dimensions".into()));
        }
        let gray = imageops::grayscale(img);

        let brightness = mean_brightness(&gray);

        let edges = canny(&gray, CANNY_LOW, CANNY_HIGH);
        let edge_pixels = edges.pixels().filter(|p| p.0[0] > 0).count();
        let edge_density = edge_pixels as f32 / (width as f32 * height as f32);

        let unique_colors = count_unique_colors(img);

        let stats = Self {
            width,
            height,
            aspect_ratio: width as f32 / height as f32,
            brightness,
            edge_density,
            unique_colors,
        };
        debug!(?stats, "Image statistics computed");
        Ok(stats)
    }
}

/// Mean grayscale value of an image, 0–255.
pub fn mean_brightness(gray: &GrayImage) -> f32 {
    let total: u64 = gray.pixels().map(|p| u64::from(p.0[0])).sum();
    total as f32 / (gray.width() as f32 * gray.height() as f32)
}

/// Approximate color diversity: distinct RGB triples after shrinking the
/// image to a 50x50 grid. The downsample caps the cost regardless of input
/// size; the exact count is not a contract, only the rough magnitude.
fn count_unique_colors(img: &RgbImage) -> usize {
    let small = imageops::resize(
        img,
        COLOR_SAMPLE_SIZE,
        COLOR_SAMPLE_SIZE,
        imageops::FilterType::Nearest,
    );
    let distinct: HashSet<[u8; 3]> = small.pixels().map(|p| p.0).collect();
    distinct.len()
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::Rgb;

    #[test]
    fn uniform_white_image_stats() {
        let img = RgbImage::from_pixel(200, 100, Rgb([255, 255, 255]));
        let stats = ImageStats::compute(&img).expect("stats");

        assert_eq!(stats.width, 200);
        assert_eq!(stats.height, 100);
        assert!((stats.aspect_ratio - 2.0).abs() < 1e-6);
        assert!(stats.brightness > 254.0);
        assert_eq!(stats.edge_density, 0.0);
        assert_eq!(stats.unique_colors, 1);
    }

    #[test]
    fn checkerboard_has_edges_and_two_colors() {
        let img = RgbImage::from_fn(100, 100, |x, y| {
            if ((x / 10) + (y / 10)) % 2 == 0 {
                Rgb([0, 0, 0])
            } else {
                Rgb([255, 255, 255])
            }
        });
        let stats = ImageStats::compute(&img).expect("stats");
        assert!(stats.edge_density > 0.0);
        assert_eq!(stats.unique_colors, 2);
        // Half black, half white.
        assert!((stats.brightness - 127.5).abs() < 5.0);
    }

    #[test]
    fn stats_are_deterministic() {
        let img = RgbImage::from_fn(80, 120, |x, y| Rgb([(x * 3) as u8, (y * 2) as u8, 77]));
        assert_eq!(
            ImageStats::compute(&img).expect("stats"),
            ImageStats::compute(&img).expect("stats")
        );
    }

    #[test]
    fn zero_dimension_image_is_an_analysis_error() {
        let img = RgbImage::new(0, 0);
        assert!(matches!(
            ImageStats::compute(&img),
            Err(ScrubError::Analysis(_))
        ));
    }
}
