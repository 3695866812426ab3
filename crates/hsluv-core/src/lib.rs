//! # hsluv-core
//!
//! Conversions between sRGB, CIE XYZ, CIE LUV, LCh(uv), HSLuv and HPLuv.
//!
//! HSLuv is a human-friendly alternative to HSL built on CIE LUV. Its
//! saturation is chroma measured against the exact edge of the sRGB gamut
//! for the given lightness and hue, so every `(h, s, l)` in range is a
//! displayable color and equal lightness means equal perceived brightness.
//! HPLuv trades the full gamut for a hue-independent limit, giving a pastel
//! palette in which saturation is comparable across hues.
//!
//! ## Pipeline
//!
//! ```text
//! Hex ↔ RGB ↔ XYZ ↔ LUV ↔ LCH ↔ HSLuv
//!                          └──↔ HPLuv
//! ```
//!
//! Each arrow is a method on the value type (`Rgb::to_xyz`, `Xyz::to_luv`,
//! `Lch::to_hsluv`, ...). The [`convert`] module composes them.
//!
//! ## Quick Start
//!
//! ```
//! use hsluv_core::{Hex, Hsluv, hsluv_to_rgb, rgb_to_hsluv};
//!
//! let rgb = hsluv_to_rgb(Hsluv::new(12.177, 100.0, 53.237));
//! assert_eq!(rgb.to_hex().unwrap().as_str(), "#ff0000");
//!
//! let teal: Hex = "#008080".parse().unwrap();
//! let hsluv = rgb_to_hsluv(teal.to_rgb());
//! assert!((hsluv.s - 100.0).abs() < 1e-6);
//! ```
//!
//! All functions are pure and allocation-free apart from hex strings, so
//! they can be called from any number of threads.

pub mod color;
pub mod convert;
pub mod error;
pub mod gamut;
pub mod math;

pub use color::{Hex, Hpluv, Hsluv, Lch, Luv, Rgb, Xyz};
pub use convert::{
    hex_to_hpluv, hex_to_hsluv, hpluv_to_hex, hpluv_to_rgb, hsluv_to_hex, hsluv_to_rgb,
    rgb_to_hpluv, rgb_to_hsluv,
};
pub use error::{Error, Result};
pub use gamut::{GamutBounds, max_chroma_for_hue, max_safe_chroma};

/// Version of hsluv-core
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
