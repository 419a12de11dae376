// SPDX-License-Identifier: MIT
//
// Heuristic classification — maps the scalar image statistics through fixed
// threshold ladders to categorical labels, and composes those labels into a
// sentence of alt text.
//
// Each ladder is an explicit ordered list of (rule, label) steps with a
// fallback, so "every value maps to exactly one label" holds by construction
// and is checked mechanically in the tests.

use scrubshot_core::{DetailLevel, LayoutShape, Lighting, Palette};

use crate::stats::ImageStats;

/// A single comparison against a fixed threshold.
#[derive(Debug, Clone, Copy)]
pub enum Rule {
    Above(f32),
    Below(f32),
}

impl Rule {
    fn matches(&self, value: f32) -> bool {
        match *self {
            Rule::Above(t) => value > t,
            Rule::Below(t) => value < t,
        }
    }
}

/// Ordered (rule, label) steps evaluated in priority order, with a fallback
/// label when no rule matches. Total over all finite inputs.
#[derive(Debug, Clone, Copy)]
pub struct ThresholdLadder<L: Copy + 'static> {
    steps: &'static [(Rule, L)],
    fallback: L,
}

impl<L: Copy> ThresholdLadder<L> {
    pub const fn new(steps: &'static [(Rule, L)], fallback: L) -> Self {
        Self { steps, fallback }
    }

    /// First matching step's label, else the fallback.
    pub fn classify(&self, value: f32) -> L {
        for (rule, label) in self.steps {
            if rule.matches(value) {
                return *label;
            }
        }
        self.fallback
    }
}

/// Layout shape from the aspect ratio.
pub const LAYOUT: ThresholdLadder<LayoutShape> = ThresholdLadder::new(
    &[
        (Rule::Above(1.5), LayoutShape::Wide),
        (Rule::Below(0.7), LayoutShape::Tall),
    ],
    LayoutShape::Standard,
);

/// Visual complexity from the edge density.
pub const DETAIL: ThresholdLadder<DetailLevel> = ThresholdLadder::new(
    &[
        (Rule::Above(0.1), DetailLevel::Detailed),
        (Rule::Above(0.05), DetailLevel::Moderate),
    ],
    DetailLevel::Minimal,
);

/// Lighting from the mean brightness.
pub const LIGHTING: ThresholdLadder<Lighting> = ThresholdLadder::new(
    &[
        (Rule::Above(200.0), Lighting::Bright),
        (Rule::Below(100.0), Lighting::Dark),
    ],
    Lighting::Balanced,
);

/// Color diversity from the downsampled unique-color count.
pub const PALETTE: ThresholdLadder<Palette> = ThresholdLadder::new(
    &[
        (Rule::Above(1000.0), Palette::Rich),
        (Rule::Above(500.0), Palette::Moderate),
    ],
    Palette::Limited,
);

/// Compose a sentence of alt text from the classified labels.
///
/// Deterministic: identical stats always produce the identical sentence.
pub fn compose_alt_text(stats: &ImageStats) -> String {
    let layout = match LAYOUT.classify(stats.aspect_ratio) {
        LayoutShape::Wide => "a wide horizontal interface ",
        LayoutShape::Tall => "a tall vertical layout ",
        LayoutShape::Standard => "a standard rectangular interface ",
    };
    let detail = match DETAIL.classify(stats.edge_density) {
        DetailLevel::Detailed => "with detailed content and multiple elements",
        DetailLevel::Moderate => "with moderate detail and various UI components",
        DetailLevel::Minimal => "with clean, minimal design",
    };
    let lighting = match LIGHTING.classify(stats.brightness) {
        Lighting::Bright => ", featuring bright colors and high contrast",
        Lighting::Dark => ", with dark theme or low lighting",
        Lighting::Balanced => ", with balanced lighting",
    };
    let palette = match PALETTE.classify(stats.unique_colors as f32) {
        Palette::Rich => " and rich color palette.",
        Palette::Moderate => " and moderate color variety.",
        Palette::Limited => " and limited color scheme.",
    };

    format!("Screenshot showing {layout}{detail}{lighting}{palette}")
}

/// Generic description used when analysis fails.
pub fn fallback_alt_text(width: u32, height: u32) -> String {
    format!("Screenshot image with dimensions {width}x{height} pixels.")
}
