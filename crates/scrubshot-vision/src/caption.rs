// SPDX-License-Identifier: MIT
//
// Meme caption generation — buckets an image by its statistics, then draws
// a caption uniformly at random from the matched template bucket plus a
// fixed generic pool. The pick is the only randomness in the system.

use rand::Rng;
use rand::seq::IndexedRandom;
use scrubshot_core::CaptionBucket;
use tracing::debug;

use crate::stats::ImageStats;

const MOBILE_SCREENSHOT: &[&str] = &[
    "When your phone knows more about you than you do",
    "Mobile screenshot: Because desktop was too mainstream",
    "POV: You're about to show someone something but panic about your notifications",
    "This app has seen things... terrible things",
];

const DARK_THEME: &[&str] = &[
    "Dark mode: Because my soul matches my UI",
    "When you're trying to save battery but really you're just emo",
    "Dark theme supremacy ⚫",
    "My screen is darker than my coffee",
];

const BRIGHT_COLORFUL: &[&str] = &[
    "When your screen is brighter than your future",
    "This has more colors than a unicorn explosion 🌈",
    "RGB keyboard users be like:",
    "Brightness level: Retina damage",
];

const COMPLEX_DESKTOP: &[&str] = &[
    "When you have 47 tabs open but still can't find what you're looking for",
    "POV: Your desktop after 3 months of 'I'll organize it later'",
    "This screenshot has more layers than my emotional problems",
    "When your screen looks like a puzzle but you're the missing piece",
];

const SIMPLE_CLEAN: &[&str] = &[
    "Minimalism: Because sometimes less is more... or you just gave up",
    "Clean desktop energy ✨ (Trash folder has entered the chat)",
    "When you finally organize your life for 5 seconds",
    "This is what peak performance looks like",
];

/// Generic tech humor mixed into every bucket's pool.
const GENERIC_CAPTIONS: &[&str] = &[
    "Error 404: Social life not found",
    "It ain't much, but it's honest work",
    "Me explaining this screenshot to my mom:",
    "When the screenshot is more organized than your life",
    "This screenshot brought to you by caffeine and poor life choices",
];

fn is_mobile(s: &ImageStats) -> bool {
    s.width < 500
}
fn is_dark(s: &ImageStats) -> bool {
    s.brightness < 100.0
}
fn is_bright(s: &ImageStats) -> bool {
    s.brightness > 200.0
}
fn is_complex(s: &ImageStats) -> bool {
    s.edge_density > 0.1
}

/// Ordered bucket predicates; the first match wins, `SimpleClean` is the
/// fallback, so every image lands in exactly one bucket.
const BUCKET_RULES: &[(fn(&ImageStats) -> bool, CaptionBucket)] = &[
    (is_mobile, CaptionBucket::MobileScreenshot),
    (is_dark, CaptionBucket::DarkTheme),
    (is_bright, CaptionBucket::BrightColorful),
    (is_complex, CaptionBucket::ComplexDesktop),
];

/// Generates meme captions from image statistics.
#[derive(Debug, Clone, Copy, Default)]
pub struct CaptionGenerator;

impl CaptionGenerator {
    /// Which template bucket the image falls into.
    pub fn select_bucket(stats: &ImageStats) -> CaptionBucket {
        for (rule, bucket) in BUCKET_RULES {
            if rule(stats) {
                return *bucket;
            }
        }
        CaptionBucket::SimpleClean
    }

    /// Templates belonging to one bucket (without the generic pool).
    pub fn templates_for(bucket: CaptionBucket) -> &'static [&'static str] {
        match bucket {
            CaptionBucket::MobileScreenshot => MOBILE_SCREENSHOT,
            CaptionBucket::DarkTheme => DARK_THEME,
            CaptionBucket::BrightColorful => BRIGHT_COLORFUL,
            CaptionBucket::ComplexDesktop => COMPLEX_DESKTOP,
            CaptionBucket::SimpleClean => SIMPLE_CLEAN,
        }
    }

    /// Pick a caption with the supplied RNG (seedable in tests).
    ///
    /// The pool is the matched bucket's templates plus the generic captions;
    /// the draw is uniform over the combined pool.
    pub fn generate_with<R: Rng + ?Sized>(stats: &ImageStats, rng: &mut R) -> String {
        let bucket = Self::select_bucket(stats);
        let mut pool: Vec<&str> = Self::templates_for(bucket).to_vec();
        pool.extend_from_slice(GENERIC_CAPTIONS);

        debug!(?bucket, pool_size = pool.len(), "Caption bucket selected");
        pool.choose(rng)
            .copied()
            .unwrap_or(fallback_caption())
            .to_string()
    }

    /// Pick a caption with the thread RNG.
    pub fn generate(stats: &ImageStats) -> String {
        Self::generate_with(stats, &mut rand::rng())
    }

    /// The combined pool a caption for `stats` may be drawn from.
    pub fn pool_for(stats: &ImageStats) -> Vec<&'static str> {
        let mut pool: Vec<&str> = Self::templates_for(Self::select_bucket(stats)).to_vec();
        pool.extend_from_slice(GENERIC_CAPTIONS);
        pool
    }
}

/// Caption used when analysis fails entirely.
pub fn fallback_caption() -> &'static str {
    "When your screenshot editor works better than your life decisions 😅"
}
