// SPDX-License-Identifier: MIT
//
// Request pipeline — dispatches one editing request against a session.
//
// No step is fatal: every internal failure is logged, converted to a
// `UserNotice`, and replaced by its safe default (generic alt text, an
// unmodified image, a skipped caption). The host shows the notices without
// blocking the result.

use image::RgbImage;
use scrubshot_core::{
    CaptionAnchor, EditorConfig, Feature, SensitivityReport, UserNotice, notice_for,
};
use scrubshot_vision::{
    CaptionGenerator, ImageStats, SensitivityDetector, apply_smart_blur, compose_alt_text,
    draw_caption, enhance_quality, fallback_alt_text, fallback_caption,
};
use serde::{Deserialize, Serialize};
use tracing::{info, instrument, warn};

use crate::session::EditSession;

/// One user-triggered editing action.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct EditRequest {
    pub feature: Feature,
    /// Gaussian blur strength for privacy blur (1–30).
    pub blur_strength: u8,
    /// Caption anchor for the meme generator.
    pub caption_anchor: CaptionAnchor,
}

impl EditRequest {
    /// A request using the editor's default settings.
    pub fn new(feature: Feature) -> Self {
        Self::from_config(feature, &EditorConfig::default())
    }

    /// A request using the host's current settings.
    pub fn from_config(feature: Feature, config: &EditorConfig) -> Self {
        Self {
            feature,
            blur_strength: config.blur_strength,
            caption_anchor: config.caption_anchor,
        }
    }
}

/// The result of one editing action.
#[derive(Debug, Clone)]
pub struct EditOutcome {
    /// The image to display; `None` for text-only features (alt text).
    pub image: Option<RgbImage>,
    /// Generated alt text or meme caption.
    pub text: Option<String>,
    /// The sensitivity report behind a privacy blur.
    pub report: Option<SensitivityReport>,
    /// Non-blocking notices for the host to surface.
    pub notices: Vec<UserNotice>,
}

impl EditOutcome {
    fn empty() -> Self {
        Self {
            image: None,
            text: None,
            report: None,
            notices: Vec::new(),
        }
    }
}

/// Run one request against the session, replacing its processed image when
/// the feature produces one. Runs to completion; never returns an error.
#[instrument(skip(session), fields(session = %session.id, feature = ?request.feature))]
pub fn process(session: &mut EditSession, request: &EditRequest) -> EditOutcome {
    match request.feature {
        Feature::AltText => alt_text(session),
        Feature::PrivacyBlur => privacy_blur(session, request.blur_strength),
        Feature::MemeCaption => meme_caption(session, request.caption_anchor),
        Feature::Enhance => enhance(session),
    }
}

/// Describe the screenshot. The image is not modified; a failed analysis
/// degrades to the generic dimensions-only description.
fn alt_text(session: &EditSession) -> EditOutcome {
    let mut outcome = EditOutcome::empty();
    outcome.text = Some(match ImageStats::compute(session.original()) {
        Ok(stats) => compose_alt_text(&stats),
        Err(err) => {
            warn!(error = %err, "analysis failed; using the generic description");
            outcome.notices.push(notice_for(&err));
            let (w, h) = session.dimensions();
            fallback_alt_text(w, h)
        }
    });
    outcome
}

/// Detect and blur likely sensitive areas.
///
/// A failed blur degrades to the unmodified original; a clean report
/// returns output pixel-identical to the input.
fn privacy_blur(session: &mut EditSession, blur_strength: u8) -> EditOutcome {
    let mut outcome = EditOutcome::empty();
    let report = SensitivityDetector::default().analyze(session.original());

    if report.found {
        match apply_smart_blur(session.original(), &report, blur_strength) {
            Ok(blurred) => {
                session.set_processed(blurred.clone());
                outcome.image = Some(blurred);
                outcome.notices.push(UserNotice::info(format!(
                    "Privacy protection applied to: {}",
                    report
                        .locations
                        .iter()
                        .map(|l| l.to_string())
                        .collect::<Vec<_>>()
                        .join(", ")
                )));
            }
            Err(err) => {
                warn!(error = %err, "smart blur failed; returning the original image");
                outcome.notices.push(notice_for(&err));
                outcome.image = Some(session.original().clone());
            }
        }
    } else {
        info!("no sensitive content detected; image unchanged");
        outcome
            .notices
            .push(UserNotice::info("No obvious sensitive content detected."));
        outcome.image = Some(session.original().clone());
    }

    outcome.report = Some(report);
    outcome
}

/// Generate a caption and stamp it on the image.
///
/// Caption drawing fails closed: on any error the original image is
/// returned unmodified, with the generated text still reported.
fn meme_caption(session: &mut EditSession, anchor: CaptionAnchor) -> EditOutcome {
    let mut outcome = EditOutcome::empty();

    let caption = match ImageStats::compute(session.original()) {
        Ok(stats) => CaptionGenerator::generate(&stats),
        Err(err) => {
            warn!(error = %err, "analysis failed; using the fallback caption");
            outcome.notices.push(notice_for(&err));
            fallback_caption().to_string()
        }
    };

    match draw_caption(session.original(), &caption, anchor) {
        Ok(captioned) => {
            session.set_processed(captioned.clone());
            outcome.image = Some(captioned);
        }
        Err(err) => {
            warn!(error = %err, "caption overlay failed; returning the original image");
            outcome.notices.push(notice_for(&err));
            outcome.image = Some(session.original().clone());
        }
    }

    outcome.text = Some(caption);
    outcome
}

/// Fixed-factor quality enhancement. Pure; cannot fail.
fn enhance(session: &mut EditSession) -> EditOutcome {
    let enhanced = enhance_quality(session.original());
    session.set_processed(enhanced.clone());

    let mut outcome = EditOutcome::empty();
    outcome.image = Some(enhanced);
    outcome
}
