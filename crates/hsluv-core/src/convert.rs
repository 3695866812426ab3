//! End-to-end conversions
//!
//! Every path walks the fixed pipeline
//! `RGB ↔ XYZ ↔ LUV ↔ LCH ↔ {HSLuv | HPLuv}` one step at a time.

use crate::color::{Hex, Hpluv, Hsluv, Rgb};
use crate::error::Result;

/// HSLuv → LCH → LUV → XYZ → RGB
pub fn hsluv_to_rgb(hsluv: Hsluv) -> Rgb {
    hsluv.to_lch().to_luv().to_xyz().to_rgb()
}

/// HPLuv → LCH → LUV → XYZ → RGB
pub fn hpluv_to_rgb(hpluv: Hpluv) -> Rgb {
    hpluv.to_lch().to_luv().to_xyz().to_rgb()
}

/// RGB → XYZ → LUV → LCH → HSLuv
pub fn rgb_to_hsluv(rgb: Rgb) -> Hsluv {
    rgb.to_xyz().to_luv().to_lch().to_hsluv()
}

/// RGB → XYZ → LUV → LCH → HPLuv
pub fn rgb_to_hpluv(rgb: Rgb) -> Hpluv {
    rgb.to_xyz().to_luv().to_lch().to_hpluv()
}

/// HSLuv straight to a `#rrggbb` string
pub fn hsluv_to_hex(hsluv: Hsluv) -> Result<Hex> {
    hsluv_to_rgb(hsluv).to_hex()
}

/// HPLuv straight to a `#rrggbb` string
pub fn hpluv_to_hex(hpluv: Hpluv) -> Result<Hex> {
    hpluv_to_rgb(hpluv).to_hex()
}

/// `#rrggbb` string straight to HSLuv
pub fn hex_to_hsluv(hex: &Hex) -> Hsluv {
    rgb_to_hsluv(hex.to_rgb())
}

/// `#rrggbb` string straight to HPLuv
pub fn hex_to_hpluv(hex: &Hex) -> Hpluv {
    rgb_to_hpluv(hex.to_rgb())
}
