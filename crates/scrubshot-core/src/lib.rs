// SPDX-License-Identifier: MIT
//
// Scrubshot — Core types and error definitions shared across all crates.

pub mod config;
pub mod error;
pub mod notices;
pub mod types;

pub use config::EditorConfig;
pub use error::{Result, ScrubError};
pub use notices::{Severity, UserNotice, notice_for};
pub use types::*;
