//! Test sample generation
//!
//! Deterministic inputs shared by the integration tests.

use hsluv_core::{Hsluv, Rgb};
use rand::prelude::*;
use rand_chacha::ChaCha8Rng;

/// Every hex digit, in order
pub const NIBBLES: &str = "0123456789abcdef";

/// `#rrggbb` strings whose channels are equal-nibble bytes (`00`, `11`, ... `ff`)
///
/// With [`NIBBLES`] this is the full 16³ = 4096 sample table.
pub fn hex_samples_from(nibbles: &str) -> Vec<String> {
    let mut samples = Vec::with_capacity(nibbles.len().pow(3));
    for r in nibbles.chars() {
        for g in nibbles.chars() {
            for b in nibbles.chars() {
                samples.push(format!("#{r}{r}{g}{g}{b}{b}"));
            }
        }
    }
    samples
}

/// The full 4096-entry equal-nibble hex table
pub fn hex_samples() -> Vec<String> {
    hex_samples_from(NIBBLES)
}

/// `[h, s, l]` triples covering h in [0, 360] and s, l in [0, 100] at `step`
pub fn hsl_grid(step: usize) -> Vec<[f64; 3]> {
    let mut grid = Vec::new();
    for h in (0..=360).step_by(step) {
        for s in (0..=100).step_by(step) {
            for l in (0..=100).step_by(step) {
                grid.push([h as f64, s as f64, l as f64]);
            }
        }
    }
    grid
}

/// Seeded random colors inside the RGB cube
pub fn random_rgb(seed: u64, count: usize) -> Vec<Rgb> {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    (0..count)
        .map(|_| {
            Rgb::new(
                rng.gen_range(0.0..=1.0),
                rng.gen_range(0.0..=1.0),
                rng.gen_range(0.0..=1.0),
            )
        })
        .collect()
}

/// Seeded random HSLuv coordinates in their nominal ranges
pub fn random_hsluv(seed: u64, count: usize) -> Vec<Hsluv> {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    (0..count)
        .map(|_| {
            Hsluv::new(
                rng.gen_range(0.0..360.0),
                rng.gen_range(0.0..=100.0),
                rng.gen_range(0.0..=100.0),
            )
        })
        .collect()
}

/// Saturated colors on the faces of the RGB cube
pub fn gamut_boundary() -> Vec<Rgb> {
    vec![
        Rgb::RED,
        Rgb::GREEN,
        Rgb::BLUE,
        Rgb::new(1.0, 1.0, 0.0),
        Rgb::new(1.0, 0.0, 1.0),
        Rgb::new(0.0, 1.0, 1.0),
        Rgb::new(1.0, 0.5, 0.0),
        Rgb::new(0.5, 0.0, 1.0),
    ]
}
