//! D65 reference white and CIE LUV constants
//!
//! The whole pipeline is hard-wired to the D65 illuminant with Y
//! normalized to 1.0, so the reference white is expressed directly as the
//! u′v′ chromaticity the LUV formulas need.

use crate::color::Xyz;

/// D65 reference white in XYZ (Y = 1.0), consistent with the sRGB matrices
pub const D65: Xyz = Xyz::new(0.95045592705167173, 1.0, 1.0890577507598784);

/// u′ chromaticity of the D65 reference white
pub const REF_U: f64 = 0.19783000664283681;

/// v′ chromaticity of the D65 reference white
pub const REF_V: f64 = 0.468319994938791;

/// CIE κ = (29/3)³, slope of the linear segment of the lightness curve
pub const KAPPA: f64 = 903.2962962962963;

/// CIE ε = (6/29)³, Y below which lightness is linear
pub const EPSILON: f64 = 0.0088564516790356308;

/// Lightness below which a color is treated as black
pub const L_MIN: f64 = 0.00000001;

/// Lightness above which a color is treated as white
pub const L_MAX: f64 = 99.9999999;

/// Chroma below which hue is meaningless and pinned to zero
pub const CHROMA_MIN: f64 = 0.00000001;

/// u′v′ chromaticity of an XYZ color
///
/// Returns `None` for black, where the chromaticity is undefined.
#[inline]
pub fn uv_chromaticity(xyz: Xyz) -> Option<(f64, f64)> {
    let divisor = xyz.x + 15.0 * xyz.y + 3.0 * xyz.z;
    if divisor == 0.0 {
        None
    } else {
        Some((4.0 * xyz.x / divisor, 9.0 * xyz.y / divisor))
    }
}

/// True when `l` is close enough to black or white that chroma collapses
#[inline]
pub fn is_degenerate_lightness(l: f64) -> bool {
    !(L_MIN..=L_MAX).contains(&l)
}
