// SPDX-License-Identifier: MIT
//
// scrubshot-app — Application layer for the Scrubshot editor.
//
// Owns the per-upload session lifecycle and the request/response pipeline
// the hosting UI drives: create a session on upload, process one
// `EditRequest` at a time, replace the processed image with each result,
// discard the session on a new upload. The UI itself (widgets, upload and
// download controls) is an external collaborator.

pub mod pipeline;
pub mod session;

pub use pipeline::{EditOutcome, EditRequest, process};
pub use session::EditSession;

/// Install the fmt tracing subscriber, honouring `RUST_LOG` with an `info`
/// default. Embedding hosts call this once at startup.
pub fn init_logging() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    tracing::info!("Scrubshot logging initialised");
}
