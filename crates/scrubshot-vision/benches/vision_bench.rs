// SPDX-License-Identifier: MIT
//
// Criterion benchmarks for the scrubshot-vision crate. Currently benchmarks
// the smart-blur pipeline (sensitivity analysis + redaction) on a small
// synthetic screenshot.

use criterion::{Criterion, black_box, criterion_group, criterion_main};
use image::{Rgb, RgbImage};

use scrubshot_vision::{SensitivityDetector, apply_smart_blur};

// ---------------------------------------------------------------------------
// Benchmarks
// ---------------------------------------------------------------------------

/// Benchmark privacy blur end to end on a 320x240 synthetic screenshot.
///
/// The image has a dark header band and a text-like block in the middle, so
/// both the band heuristics and the region detector have work to do — the
/// realistic hot path for a screenshot with visible chrome and content.
fn bench_smart_blur(c: &mut Criterion) {
    let (width, height) = (320u32, 240u32);
    let img = RgbImage::from_fn(width, height, |x, y| {
        if y < 36 {
            Rgb([50, 50, 60])
        } else if (60..200).contains(&x) && (100..140).contains(&y) && x % 7 < 4 {
            Rgb([20, 20, 20])
        } else {
            Rgb([245, 245, 245])
        }
    });

    let detector = SensitivityDetector::default();

    c.bench_function("smart_blur (320x240)", |b| {
        b.iter(|| {
            let report = detector.analyze(black_box(&img));
            let out = apply_smart_blur(black_box(&img), &report, 15).expect("blur");
            black_box(out);
        });
    });
}

criterion_group!(benches, bench_smart_blur);
criterion_main!(benches);
