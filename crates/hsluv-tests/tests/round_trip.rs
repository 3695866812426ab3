//! Round-trip consistency tests
//!
//! Walks every equal-nibble hex sample all the way to HSLuv/HPLuv and back,
//! checking each intermediate stage against its forward counterpart.

use hsluv_core::{Hex, Hpluv, Hsluv, Rgb, hpluv_to_rgb, hsluv_to_rgb, rgb_to_hpluv, rgb_to_hsluv};
use hsluv_tests::patterns::{gamut_boundary, hex_samples, random_rgb};

const TOLERANCE: f64 = 1e-9;

fn assert_close(tag: &str, hex: &str, a: [f64; 3], b: [f64; 3]) {
    for i in 0..3 {
        assert!(
            (a[i] - b[i]).abs() < TOLERANCE,
            "{} mismatch for {} at channel {}: {:?} vs {:?}",
            tag,
            hex,
            i,
            a,
            b
        );
    }
}

/// Hex → RGB → XYZ → LUV → LCH → HSLuv → LCH → LUV → XYZ → RGB → Hex
#[test]
fn test_hsluv_conversion_consistency() {
    for sample in hex_samples() {
        let hex = Hex::new(&sample).expect("sample is valid hex");

        let rgb = hex.to_rgb();
        let xyz = rgb.to_xyz();
        let luv = xyz.to_luv();
        let lch = luv.to_lch();
        let hsluv = lch.to_hsluv();

        let to_lch = hsluv.to_lch();
        let to_luv = to_lch.to_luv();
        let to_xyz = to_luv.to_xyz();
        let to_rgb = to_xyz.to_rgb();
        let to_hex = to_rgb.to_hex().expect("round-tripped color is in range");

        assert_close("lch", &sample, lch.into(), to_lch.into());
        assert_close("luv", &sample, luv.into(), to_luv.into());
        assert_close("xyz", &sample, xyz.into(), to_xyz.into());
        assert_close("rgb", &sample, rgb.into(), to_rgb.into());
        assert_eq!(to_hex.as_str(), sample);
    }
}

/// Same walk through the pastel branch
#[test]
fn test_hpluv_conversion_consistency() {
    for sample in hex_samples() {
        let hex = Hex::new(&sample).expect("sample is valid hex");

        let rgb = hex.to_rgb();
        let lch = rgb.to_xyz().to_luv().to_lch();
        let hpluv = lch.to_hpluv();
        let to_lch = hpluv.to_lch();
        let to_rgb = to_lch.to_luv().to_xyz().to_rgb();

        assert_close("lch", &sample, lch.into(), to_lch.into());
        assert_close("rgb", &sample, rgb.into(), to_rgb.into());
        assert_eq!(to_rgb.to_hex().expect("in range").as_str(), sample);
    }
}

/// `Hex(s).to_rgb().to_hex() == s` for every equal-nibble combination
#[test]
fn test_hex_boundary_table() {
    let samples = hex_samples();
    assert_eq!(samples.len(), 16 * 16 * 16);

    for sample in samples {
        let hex: Hex = sample.parse().expect("sample is valid hex");
        let back = hex.to_rgb().to_hex().expect("decoded hex is in range");
        assert_eq!(back.as_str(), sample);
    }
}

#[test]
fn test_random_rgb_round_trip() {
    for rgb in random_rgb(0x5eed, 2000) {
        let via_hsluv = hsluv_to_rgb(rgb_to_hsluv(rgb));
        assert!(rgb.approx_eq(&via_hsluv, TOLERANCE), "{:?} → {:?}", rgb, via_hsluv);

        let via_hpluv = hpluv_to_rgb(rgb_to_hpluv(rgb));
        assert!(rgb.approx_eq(&via_hpluv, TOLERANCE), "{:?} → {:?}", rgb, via_hpluv);
    }
}

#[test]
fn test_gamut_corners_round_trip() {
    for rgb in gamut_boundary() {
        let hsluv = rgb_to_hsluv(rgb);
        assert!(
            (hsluv.s - 100.0).abs() < 1e-6,
            "{:?} should be fully saturated, got {:?}",
            rgb,
            hsluv
        );
        assert_eq!(
            hsluv.to_hex().expect("in range"),
            rgb.to_hex().expect("in range")
        );
    }
}

#[test]
fn test_back_and_forth_consistency() {
    let original = Rgb::new(0.51, 0.251, 0.557);
    let returned = hsluv_to_rgb(rgb_to_hsluv(original));
    assert!(original.approx_eq(&returned, TOLERANCE));

    let hsluv = Hsluv::new(0.0, 100.0, 50.0);
    let returned = rgb_to_hsluv(hsluv_to_rgb(hsluv));
    assert!(returned.h < 360.0, "hue wrapped to {}", returned.h);
    assert!(hsluv.approx_eq(&returned, 1e-8), "{:?}", returned);

    let hpluv = Hpluv::new(300.0, 80.0, 60.0);
    let returned = rgb_to_hpluv(hpluv_to_rgb(hpluv));
    assert!(hpluv.approx_eq(&returned, 1e-8), "{:?}", returned);
}

#[test]
fn test_hue_stays_in_half_open_range() {
    for h in (0..3600).map(|i| f64::from(i) / 10.0) {
        for hsluv in [Hsluv::new(h, 100.0, 50.0), Hsluv::new(h, 40.0, 75.0)] {
            let returned = rgb_to_hsluv(hsluv_to_rgb(hsluv));
            assert!(
                (0.0..360.0).contains(&returned.h),
                "{:?} came back with h = {}",
                hsluv,
                returned.h
            );
        }
    }
}
