// SPDX-License-Identifier: MIT
//
// scrubshot-vision — Pixel-level processing for the Scrubshot editor.
//
// Provides the image codec, scalar image statistics, heuristic text-region
// detection, the sensitivity detector, and the three appliers (smart blur,
// caption overlay, quality enhancement). Everything operates on in-memory
// `image::RgbImage` buffers; data flows one way and no module keeps state
// between calls.

pub mod caption;
pub mod classify;
pub mod codec;
pub mod detect;
pub mod enhance;
pub mod overlay;
pub mod redact;
pub mod sensitivity;
pub mod stats;

// Re-export the primary entry points so callers can use
// `scrubshot_vision::RegionDetector` etc.
pub use caption::{CaptionGenerator, fallback_caption};
pub use classify::{compose_alt_text, fallback_alt_text};
pub use codec::{decode_image, encode_png};
pub use detect::RegionDetector;
pub use enhance::enhance_quality;
pub use overlay::draw_caption;
pub use redact::apply_smart_blur;
pub use sensitivity::SensitivityDetector;
pub use stats::ImageStats;
