// SPDX-License-Identifier: MIT
//
// Core domain types for the Scrubshot screenshot editor.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Unique identifier for an editing session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SessionId(pub Uuid);

impl SessionId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for SessionId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for SessionId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// The four user-selectable editing features.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Feature {
    /// Describe the screenshot in a sentence of alt text.
    AltText,
    /// Detect and blur likely sensitive regions.
    PrivacyBlur,
    /// Generate a caption and stamp it on the image.
    MemeCaption,
    /// Fixed-factor sharpness/contrast/saturation boost.
    Enhance,
}

/// Where a caption block is anchored on the image.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CaptionAnchor {
    Top,
    Bottom,
}

/// An axis-aligned integer rectangle in image coordinates.
///
/// Invariant once clamped: `x1 < x2 <= width` and `y1 < y2 <= height`.
/// A box has no identity beyond its coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BoundingBox {
    pub x1: u32,
    pub y1: u32,
    pub x2: u32,
    pub y2: u32,
}

impl BoundingBox {
    pub fn new(x1: u32, y1: u32, x2: u32, y2: u32) -> Self {
        Self { x1, y1, x2, y2 }
    }

    /// Width in pixels.
    pub fn width(&self) -> u32 {
        self.x2.saturating_sub(self.x1)
    }

    /// Height in pixels.
    pub fn height(&self) -> u32 {
        self.y2.saturating_sub(self.y1)
    }

    /// Clamp the box to an image of `width` x `height`.
    ///
    /// Returns `None` when the clamped box is empty (fully outside the
    /// image, or zero-sized).
    pub fn clamp_to(&self, width: u32, height: u32) -> Option<Self> {
        let clamped = Self {
            x1: self.x1.min(width),
            y1: self.y1.min(height),
            x2: self.x2.min(width),
            y2: self.y2.min(height),
        };
        if clamped.x1 < clamped.x2 && clamped.y1 < clamped.y2 {
            Some(clamped)
        } else {
            None
        }
    }
}

/// A flagged location within the image.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SensitiveLocation {
    /// The top band (headers often carry names and addresses).
    Top,
    /// The bottom band (footers often carry signatures and contact details).
    Bottom,
    /// Analysis could not complete; the whole frame is treated as sensitive.
    EntireImage,
}

impl std::fmt::Display for SensitiveLocation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SensitiveLocation::Top => write!(f, "top"),
            SensitiveLocation::Bottom => write!(f, "bottom"),
            SensitiveLocation::EntireImage => write!(f, "entire image"),
        }
    }
}

/// Heuristic judgment of whether an image likely contains private content.
///
/// Transient: recomputed for every blur request, never persisted.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SensitivityReport {
    /// Whether anything worth blurring was found.
    pub found: bool,
    /// True when this report came from the conservative fallback path
    /// rather than a completed analysis.
    pub degraded: bool,
    /// Human-readable notes about what was flagged.
    pub details: Vec<String>,
    /// Which fixed areas of the image were flagged.
    pub locations: Vec<SensitiveLocation>,
    /// Candidate text regions from the detector.
    pub regions: Vec<BoundingBox>,
}

impl SensitivityReport {
    /// A report that found nothing.
    pub fn clean() -> Self {
        Self {
            found: false,
            degraded: false,
            details: Vec::new(),
            locations: Vec::new(),
            regions: Vec::new(),
        }
    }

    /// Conservative fallback: analysis failed, so flag the entire frame and
    /// bias toward over-redaction rather than leaking content.
    pub fn degraded(reason: impl Into<String>) -> Self {
        Self {
            found: true,
            degraded: true,
            details: vec![format!(
                "Unable to fully analyze - applying protective blur. {}",
                reason.into()
            )],
            locations: vec![SensitiveLocation::EntireImage],
            regions: Vec::new(),
        }
    }

    pub fn covers_top(&self) -> bool {
        self.locations.contains(&SensitiveLocation::Top)
    }

    pub fn covers_bottom(&self) -> bool {
        self.locations.contains(&SensitiveLocation::Bottom)
    }

    /// Whether the redactor should blur the whole frame.
    pub fn blur_everything(&self) -> bool {
        self.locations.contains(&SensitiveLocation::EntireImage)
    }
}

/// Overall shape of the screenshot, from its aspect ratio.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum LayoutShape {
    /// Aspect ratio above 1.5 — a wide horizontal interface.
    Wide,
    /// Aspect ratio below 0.7 — a tall vertical layout.
    Tall,
    /// Everything in between.
    Standard,
}

/// Visual complexity, from edge density.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DetailLevel {
    Detailed,
    Moderate,
    Minimal,
}

/// Overall lighting, from mean grayscale brightness.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Lighting {
    Bright,
    Dark,
    Balanced,
}

/// Color diversity, from the downsampled unique-color count.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Palette {
    Rich,
    Moderate,
    Limited,
}

/// Which caption template bucket an image falls into.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CaptionBucket {
    MobileScreenshot,
    DarkTheme,
    BrightColorful,
    ComplexDesktop,
    SimpleClean,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bounding_box_dimensions() {
        let b = BoundingBox::new(10, 20, 110, 50);
        assert_eq!(b.width(), 100);
        assert_eq!(b.height(), 30);
    }

    #[test]
    fn bounding_box_clamps_to_image() {
        let b = BoundingBox::new(50, 50, 500, 500);
        let clamped = b.clamp_to(200, 100).expect("overlaps the image");
        assert_eq!(clamped, BoundingBox::new(50, 50, 200, 100));
    }

    #[test]
    fn bounding_box_outside_image_is_rejected() {
        let b = BoundingBox::new(300, 300, 400, 400);
        assert!(b.clamp_to(200, 200).is_none());
    }

    #[test]
    fn degraded_report_flags_entire_image() {
        let report = SensitivityReport::degraded("canny blew up");
        assert!(report.found);
        assert!(report.degraded);
        assert!(report.blur_everything());
        assert!(!report.covers_top());
        assert_eq!(report.locations, vec![SensitiveLocation::EntireImage]);
    }

    #[test]
    fn clean_report_finds_nothing() {
        let report = SensitivityReport::clean();
        assert!(!report.found);
        assert!(!report.blur_everything());
        assert!(report.regions.is_empty());
    }

    #[test]
    fn sensitive_location_display() {
        assert_eq!(SensitiveLocation::Top.to_string(), "top");
        assert_eq!(SensitiveLocation::EntireImage.to_string(), "entire image");
    }
}
