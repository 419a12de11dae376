// SPDX-License-Identifier: MIT
//
// Application configuration.

use serde::{Deserialize, Serialize};

use crate::error::{Result, ScrubError};
use crate::types::CaptionAnchor;

/// Smallest accepted blur strength.
pub const MIN_BLUR_STRENGTH: u8 = 1;
/// Largest accepted blur strength.
pub const MAX_BLUR_STRENGTH: u8 = 30;

/// User-adjustable editor settings.
///
/// Only the knobs the host UI exposes live here; fixed algorithm tuning
/// values (thresholds, margins, enhancement factors) are constants in the
/// processing modules.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EditorConfig {
    /// Gaussian blur strength for privacy blur (1–30).
    pub blur_strength: u8,
    /// Where meme captions are anchored.
    pub caption_anchor: CaptionAnchor,
}

impl Default for EditorConfig {
    fn default() -> Self {
        Self {
            blur_strength: 15,
            caption_anchor: CaptionAnchor::Bottom,
        }
    }
}

impl EditorConfig {
    /// Check that every setting is within its accepted range.
    pub fn validate(&self) -> Result<()> {
        if !(MIN_BLUR_STRENGTH..=MAX_BLUR_STRENGTH).contains(&self.blur_strength) {
            return Err(ScrubError::InvalidParameter {
                name: "blur_strength",
                value: self.blur_strength.to_string(),
                expected: "1 to 30",
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_is_valid() {
        assert!(EditorConfig::default().validate().is_ok());
    }

    #[test]
    fn out_of_range_blur_strength_is_rejected() {
        let mut config = EditorConfig::default();
        config.blur_strength = 0;
        assert!(config.validate().is_err());
        config.blur_strength = 31;
        assert!(config.validate().is_err());
        config.blur_strength = 30;
        assert!(config.validate().is_ok());
    }
}
