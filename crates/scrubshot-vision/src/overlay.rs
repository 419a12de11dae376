// SPDX-License-Identifier: MIT
//
// Caption overlay — greedy word wrap against measured text widths, then
// centred meme-style lettering: white fill over a black stroke built from
// 8-directional offset stamps.

use ab_glyph::{FontVec, PxScale};
use image::{Rgb, RgbImage};
use imageproc::drawing::{draw_text_mut, text_size};
use scrubshot_core::{CaptionAnchor, Result, ScrubError};
use tracing::{debug, instrument, warn};

/// Horizontal margin kept clear on each side of the caption.
const MARGIN: u32 = 20;

/// Vertical gap between the caption block and the image edge.
const VERTICAL_OFFSET: u32 = 20;

/// Caption font size in pixels.
const FONT_SIZE: f32 = 28.0;

/// Fixed line advance for the caption block.
const LINE_HEIGHT: u32 = 35;

/// Stroke thickness of the black outline.
const OUTLINE_PX: i32 = 3;

/// System font locations probed for a usable sans-serif face.
const FONT_PATHS: &[&str] = &[
    "/usr/share/fonts/truetype/dejavu/DejaVuSans.ttf",
    "/usr/share/fonts/truetype/liberation/LiberationSans-Regular.ttf",
    "/System/Library/Fonts/Arial.ttf",
    "C:\\Windows\\Fonts\\arial.ttf",
    "C:\\Windows\\Fonts\\calibri.ttf",
];

/// Load the first usable system font, if any.
pub fn load_font() -> Option<FontVec> {
    for path in FONT_PATHS {
        if let Ok(data) = std::fs::read(path)
            && let Ok(font) = FontVec::try_from_vec(data)
        {
            debug!(path, "Caption font loaded");
            return Some(font);
        }
    }
    warn!("no usable caption font found on this system");
    None
}

/// Greedy word wrap: append a word while the candidate line still fits
/// within `max_width` per the `measure` closure, else start a new line.
/// A single word wider than the limit still gets a line of its own.
pub fn wrap_lines<F>(text: &str, max_width: u32, measure: F) -> Vec<String>
where
    F: Fn(&str) -> u32,
{
    let mut lines = Vec::new();
    let mut current = String::new();

    for word in text.split_whitespace() {
        let candidate = if current.is_empty() {
            word.to_string()
        } else {
            format!("{current} {word}")
        };
        if measure(&candidate) < max_width {
            current = candidate;
        } else if current.is_empty() {
            lines.push(word.to_string());
        } else {
            lines.push(std::mem::take(&mut current));
            current = word.to_string();
        }
    }
    if !current.is_empty() {
        lines.push(current);
    }
    lines
}

/// Stamp `text` onto a copy of `img`, word-wrapped and anchored at the top
/// or bottom. Fails with `FontUnavailable` when no system font loads;
/// callers fall back to the unmodified image.
#[instrument(skip(img, text), fields(width = img.width(), height = img.height(), ?anchor))]
pub fn draw_caption(img: &RgbImage, text: &str, anchor: CaptionAnchor) -> Result<RgbImage> {
    let font = load_font().ok_or(ScrubError::FontUnavailable)?;
    let scale = PxScale::from(FONT_SIZE);
    let (width, height) = img.dimensions();

    let max_width = width
        .checked_sub(2 * MARGIN)
        .filter(|w| *w > 0)
        .ok_or_else(|| ScrubError::Caption(format!("image too narrow for a caption: {width}px")))?;

    let lines = wrap_lines(text, max_width, |s| text_size(scale, &font, s).0);
    if lines.is_empty() {
        return Ok(img.clone());
    }

    let block_height = lines.len() as u32 * LINE_HEIGHT;
    let start_y = match anchor {
        CaptionAnchor::Top => VERTICAL_OFFSET as i32,
        CaptionAnchor::Bottom => {
            height as i32 - block_height as i32 - VERTICAL_OFFSET as i32
        }
    };

    let mut result = img.clone();
    for (i, line) in lines.iter().enumerate() {
        let (line_width, _) = text_size(scale, &font, line);
        let x = (width.saturating_sub(line_width) / 2) as i32;
        let y = start_y + i as i32 * LINE_HEIGHT as i32;

        // Black stroke: stamp the line in 8 directions at 1..=3 px offsets.
        for d in 1..=OUTLINE_PX {
            for (dx, dy) in [
                (-1, -1),
                (0, -1),
                (1, -1),
                (-1, 0),
                (1, 0),
                (-1, 1),
                (0, 1),
                (1, 1),
            ] {
                draw_text_mut(
                    &mut result,
                    Rgb([0, 0, 0]),
                    x + dx * d,
                    y + dy * d,
                    scale,
                    &font,
                    line,
                );
            }
        }
        draw_text_mut(&mut result, Rgb([255, 255, 255]), x, y, scale, &font, line);
    }

    debug!(lines = lines.len(), "Caption drawn");
    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;

    // 10 px per character, spaces included — a stand-in for font metrics so
    // the wrap logic is testable without a system font.
    fn measure(s: &str) -> u32 {
        s.chars().count() as u32 * 10
    }

    #[test]
    fn short_text_stays_on_one_line() {
        let lines = wrap_lines("hello world", 400, measure);
        assert_eq!(lines, vec!["hello world"]);
    }

    #[test]
    fn long_text_wraps_and_every_line_fits() {
        let text = "when the screenshot is more organized than your entire life somehow";
        let max = 200;
        let lines = wrap_lines(text, max, measure);
        assert!(lines.len() > 1);
        for line in &lines {
            assert!(measure(line) < max, "line too wide: {line:?}");
        }
        // No words lost or reordered.
        assert_eq!(lines.join(" "), text);
    }

    #[test]
    fn overlong_word_gets_its_own_line() {
        let lines = wrap_lines("hi supercalifragilistic yo", 100, measure);
        assert_eq!(lines, vec!["hi", "supercalifragilistic", "yo"]);
    }

    #[test]
    fn empty_text_produces_no_lines() {
        assert!(wrap_lines("   ", 100, measure).is_empty());
    }

    #[test]
    fn draw_caption_preserves_dimensions() {
        // Skip silently where no system font is installed.
        if load_font().is_none() {
            return;
        }
        let img = RgbImage::from_pixel(640, 480, Rgb([30, 30, 30]));
        let out = draw_caption(&img, "It ain't much, but it's honest work", CaptionAnchor::Bottom)
            .expect("draw");
        assert_eq!(out.dimensions(), img.dimensions());
        assert_ne!(out, img);
    }
}
