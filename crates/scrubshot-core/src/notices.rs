// SPDX-License-Identifier: MIT
//
// User-facing notices for degraded processing steps.
//
// Nothing in the pipeline is fatal: each step absorbs its own failures and
// falls back to a safe default. This module turns the underlying error into
// a plain-language notice the host UI can show without blocking the result.

use crate::error::ScrubError;

/// How a notice should be presented.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    /// Informational — the requested operation completed.
    Info,
    /// The step failed internally and a safe default was used instead.
    Degraded,
}

/// A plain-language notice with an actionable suggestion.
#[derive(Debug, Clone)]
pub struct UserNotice {
    /// Short summary (shown as a heading).
    pub message: String,
    /// What the user can do about it (shown as body text).
    pub suggestion: String,
    /// Drives icon/colour in the host UI.
    pub severity: Severity,
}

impl UserNotice {
    /// Informational notice with no follow-up action.
    pub fn info(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            suggestion: String::new(),
            severity: Severity::Info,
        }
    }
}

/// Convert a `ScrubError` into the notice shown alongside the degraded result.
pub fn notice_for(err: &ScrubError) -> UserNotice {
    match err {
        ScrubError::Decode(detail) => UserNotice {
            message: "We couldn't read that image.".into(),
            suggestion: format!("Try uploading it as a PNG or JPEG. ({detail})"),
            severity: Severity::Degraded,
        },

        ScrubError::Encode(detail) => UserNotice {
            message: "The processed image couldn't be saved.".into(),
            suggestion: format!("Try processing the image again. ({detail})"),
            severity: Severity::Degraded,
        },

        ScrubError::Detection(detail) => UserNotice {
            message: "Text-region detection didn't complete.".into(),
            suggestion: format!("Results continue without detected regions. ({detail})"),
            severity: Severity::Degraded,
        },

        ScrubError::Analysis(detail) => UserNotice {
            message: "Image analysis didn't complete.".into(),
            suggestion: format!("A generic description was used instead. ({detail})"),
            severity: Severity::Degraded,
        },

        ScrubError::Caption(detail) => UserNotice {
            message: "The caption couldn't be drawn.".into(),
            suggestion: format!("Your image is unchanged. ({detail})"),
            severity: Severity::Degraded,
        },

        ScrubError::FontUnavailable => UserNotice {
            message: "No caption font is installed.".into(),
            suggestion: "Install a common sans-serif font (e.g. DejaVu Sans) and try again."
                .into(),
            severity: Severity::Degraded,
        },

        ScrubError::InvalidParameter {
            name,
            value,
            expected,
        } => UserNotice {
            message: format!("The {name} setting isn't valid."),
            suggestion: format!("Got {value}; pick a value {expected}."),
            severity: Severity::Degraded,
        },

        ScrubError::Io(detail) => UserNotice {
            message: "A file couldn't be read or written.".into(),
            suggestion: format!("Check disk space and permissions. ({detail})"),
            severity: Severity::Degraded,
        },

        ScrubError::Serialization(detail) => UserNotice {
            message: "Settings couldn't be loaded.".into(),
            suggestion: format!("Defaults were used instead. ({detail})"),
            severity: Severity::Degraded,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn font_unavailable_maps_to_degraded_notice() {
        let notice = notice_for(&ScrubError::FontUnavailable);
        assert_eq!(notice.severity, Severity::Degraded);
        assert!(notice.message.contains("font"));
    }

    #[test]
    fn invalid_parameter_names_the_setting() {
        let err = ScrubError::InvalidParameter {
            name: "blur_strength",
            value: "42".into(),
            expected: "1 to 30",
        };
        let notice = notice_for(&err);
        assert!(notice.message.contains("blur_strength"));
        assert!(notice.suggestion.contains("42"));
    }
}
