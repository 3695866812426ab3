//! Color value types and the pairwise conversions between them
//!
//! This module provides:
//! - gamma-encoded sRGB and its `#rrggbb` text form
//! - CIE XYZ (D65)
//! - CIE LUV and its polar form LCh(uv)
//! - HSLuv and HPLuv
//! - D65 reference white constants

pub mod hex;
pub mod hsluv;
pub mod lch;
pub mod luv;
pub mod rgb;
pub mod white_point;
pub mod xyz;

pub use hex::Hex;
pub use hsluv::{Hpluv, Hsluv};
pub use lch::Lch;
pub use luv::Luv;
pub use rgb::Rgb;
pub use white_point::D65;
pub use xyz::Xyz;
