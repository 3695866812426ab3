//! Reference implementation wrappers
//!
//! Provides a uniform `[f64; 3]` interface to the implementations we check
//! against.

use palette::white_point::D65;
use palette::{FromColor, Hsluv, LinSrgb, Lchuv, Luv, Srgb, Xyz};

/// HSLuv → RGB using the hsluv crate
pub fn hsluv_crate_hsluv_to_rgb(hsl: [f64; 3]) -> [f64; 3] {
    let (r, g, b) = hsluv::hsluv_to_rgb(hsl[0], hsl[1], hsl[2]);
    [r, g, b]
}

/// RGB → HSLuv using the hsluv crate
pub fn hsluv_crate_rgb_to_hsluv(rgb: [f64; 3]) -> [f64; 3] {
    let (h, s, l) = hsluv::rgb_to_hsluv(rgb[0], rgb[1], rgb[2]);
    [h, s, l]
}

fn palette_linear(rgb: [f64; 3]) -> LinSrgb<f64> {
    Srgb::new(rgb[0], rgb[1], rgb[2]).into_linear()
}

/// RGB → XYZ using palette
pub fn palette_rgb_to_xyz(rgb: [f64; 3]) -> [f64; 3] {
    let xyz = Xyz::<D65, f64>::from_color(palette_linear(rgb));
    [xyz.x, xyz.y, xyz.z]
}

/// RGB → CIELUV using palette
pub fn palette_rgb_to_luv(rgb: [f64; 3]) -> [f64; 3] {
    let luv = Luv::<D65, f64>::from_color(palette_linear(rgb));
    [luv.l, luv.u, luv.v]
}

/// RGB → LCh(uv) using palette
pub fn palette_rgb_to_lch(rgb: [f64; 3]) -> [f64; 3] {
    let lch = Lchuv::<D65, f64>::from_color(palette_linear(rgb));
    [lch.l, lch.chroma, lch.hue.into_positive_degrees()]
}

/// RGB → HSLuv using palette
pub fn palette_rgb_to_hsluv(rgb: [f64; 3]) -> [f64; 3] {
    let hsluv = Hsluv::<D65, f64>::from_color(palette_linear(rgb));
    [
        hsluv.hue.into_positive_degrees(),
        hsluv.saturation,
        hsluv.l,
    ]
}

/// HSLuv → RGB using palette
///
/// palette clamps the linear result into the cube before encoding.
pub fn palette_hsluv_to_rgb(hsl: [f64; 3]) -> [f64; 3] {
    let linear = LinSrgb::<f64>::from_color(Hsluv::<D65, f64>::new(hsl[0], hsl[1], hsl[2]));
    let rgb: Srgb<f64> = Srgb::from_linear(linear);
    [rgb.red, rgb.green, rgb.blue]
}
