// SPDX-License-Identifier: MIT
//
// Unified error types for Scrubshot.

use thiserror::Error;

/// Top-level error type for all Scrubshot operations.
///
/// `Detection`, `Analysis` and `Caption` deliberately mean "the step failed",
/// never "the step found nothing" — an empty detection result is `Ok(vec![])`.
#[derive(Debug, Error)]
pub enum ScrubError {
    // -- Codec errors --
    #[error("image decode failed: {0}")]
    Decode(String),

    #[error("image encode failed: {0}")]
    Encode(String),

    // -- Analysis errors --
    #[error("region detection failed: {0}")]
    Detection(String),

    #[error("image analysis failed: {0}")]
    Analysis(String),

    // -- Editing errors --
    #[error("caption rendering failed: {0}")]
    Caption(String),

    #[error("no usable font found for caption rendering")]
    FontUnavailable,

    #[error("invalid {name}: {value} (expected {expected})")]
    InvalidParameter {
        name: &'static str,
        value: String,
        expected: &'static str,
    },

    // -- I/O and serialization --
    #[error("file I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Alias used throughout the codebase.
pub type Result<T> = std::result::Result<T, ScrubError>;
