//! Concurrent use
//!
//! Conversions are pure functions over `Copy` values, so results computed
//! on a rayon pool must match the sequential ones exactly.

use hsluv_core::{GamutBounds, Hex, Hsluv, Rgb, max_chroma_for_hue};
use hsluv_tests::patterns::{hex_samples, random_hsluv};
use rayon::prelude::*;

#[test]
fn test_parallel_matches_sequential() {
    let samples = hex_samples();

    let sequential: Vec<Hsluv> = samples
        .iter()
        .map(|s| Hex::new(s).unwrap().to_rgb().to_hsluv())
        .collect();
    let parallel: Vec<Hsluv> = samples
        .par_iter()
        .map(|s| Hex::new(s).unwrap().to_rgb().to_hsluv())
        .collect();

    assert_eq!(sequential, parallel);
}

#[test]
fn test_parallel_hex_encoding() {
    let colors = random_hsluv(7, 10_000);

    let sequential: Vec<Hex> = colors.iter().map(|c| c.to_hex().unwrap()).collect();
    let parallel: Vec<Hex> = colors.par_iter().map(|c| c.to_hex().unwrap()).collect();

    assert_eq!(sequential, parallel);
}

#[test]
fn test_shared_bounds_across_threads() {
    let bounds = GamutBounds::new(62.5);

    let chromas: Vec<(f64, f64)> = (0..3600)
        .into_par_iter()
        .map(|i| {
            let h = f64::from(i) / 10.0;
            (bounds.max_chroma_for_hue(h), max_chroma_for_hue(62.5, h))
        })
        .collect();

    for (shared, fresh) in chromas {
        assert_eq!(shared, fresh);
    }
}

#[test]
fn test_parallel_round_trip() {
    let rgbs: Vec<Rgb> = hex_samples()
        .par_iter()
        .map(|s| Hex::new(s).unwrap().to_rgb())
        .collect();

    rgbs.par_iter().for_each(|rgb| {
        let back = rgb.to_hpluv().to_rgb();
        assert!(rgb.approx_eq(&back, 1e-9), "{:?} → {:?}", rgb, back);
    });
}
