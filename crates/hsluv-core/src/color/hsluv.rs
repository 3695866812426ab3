//! HSLuv and HPLuv
//!
//! Both are cylindrical re-parameterisations of LCh(uv) where saturation
//! is chroma expressed as a percentage of a gamut limit:
//!
//! - **HSLuv** divides by the largest chroma that stays inside sRGB for this
//!   particular lightness *and* hue. Every `s` in [0, 100] is displayable
//!   and `s = 100` always touches the gamut wall.
//! - **HPLuv** divides by the largest chroma that is safe for *every* hue at
//!   this lightness. It is still always displayable, but covers only the
//!   pastel core of the gamut.

use bytemuck::{Pod, Zeroable};

use crate::color::white_point::is_degenerate_lightness;
use crate::color::{Hex, Lch, Rgb};
use crate::error::Result;
use crate::gamut::{max_chroma_for_hue, max_safe_chroma};

/// HSLuv: hue, saturation, lightness
#[derive(Debug, Clone, Copy, PartialEq, Default, Pod, Zeroable)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[repr(C)]
pub struct Hsluv {
    /// Hue in degrees (0 to 360)
    pub h: f64,
    /// Saturation (0 to 100)
    pub s: f64,
    /// Lightness (0 to 100)
    pub l: f64,
}

/// HPLuv: hue, pastel saturation, lightness
#[derive(Debug, Clone, Copy, PartialEq, Default, Pod, Zeroable)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[repr(C)]
pub struct Hpluv {
    /// Hue in degrees (0 to 360)
    pub h: f64,
    /// Saturation (0 to 100 inside the pastel core, above 100 for vivid colors)
    pub s: f64,
    /// Lightness (0 to 100)
    pub l: f64,
}

macro_rules! hsl_common {
    ($ty:ident) => {
        impl $ty {
            /// Create a new color
            #[inline]
            pub const fn new(h: f64, s: f64, l: f64) -> Self {
                Self { h, s, l }
            }

            /// Create from an `[h, s, l]` array
            #[inline]
            pub const fn from_array(arr: [f64; 3]) -> Self {
                Self {
                    h: arr[0],
                    s: arr[1],
                    l: arr[2],
                }
            }

            /// Convert to an `[h, s, l]` array
            #[inline]
            pub const fn to_array(&self) -> [f64; 3] {
                [self.h, self.s, self.l]
            }

            /// Check if approximately equal to another color
            #[inline]
            pub fn approx_eq(&self, other: &Self, epsilon: f64) -> bool {
                (self.h - other.h).abs() < epsilon
                    && (self.s - other.s).abs() < epsilon
                    && (self.l - other.l).abs() < epsilon
            }
        }

        impl From<[f64; 3]> for $ty {
            fn from(arr: [f64; 3]) -> Self {
                Self::from_array(arr)
            }
        }

        impl From<$ty> for [f64; 3] {
            fn from(color: $ty) -> Self {
                color.to_array()
            }
        }
    };
}

hsl_common!(Hsluv);
hsl_common!(Hpluv);

impl Hsluv {
    /// Convert to LCH
    ///
    /// Black and white have no chroma regardless of saturation.
    pub fn to_lch(&self) -> Lch {
        if is_degenerate_lightness(self.l) {
            return Lch::new(self.l, 0.0, self.h);
        }

        let max = max_chroma_for_hue(self.l, self.h);
        Lch::new(self.l, max / 100.0 * self.s, self.h)
    }

    /// Convert to gamma-encoded sRGB
    #[inline]
    pub fn to_rgb(&self) -> Rgb {
        crate::convert::hsluv_to_rgb(*self)
    }

    /// Encode as a `#rrggbb` string
    #[inline]
    pub fn to_hex(&self) -> Result<Hex> {
        crate::convert::hsluv_to_hex(*self)
    }
}

impl Hpluv {
    /// Convert to LCH
    ///
    /// Black and white have no chroma regardless of saturation.
    pub fn to_lch(&self) -> Lch {
        if is_degenerate_lightness(self.l) {
            return Lch::new(self.l, 0.0, self.h);
        }

        let max = max_safe_chroma(self.l);
        Lch::new(self.l, max / 100.0 * self.s, self.h)
    }

    /// Convert to gamma-encoded sRGB
    #[inline]
    pub fn to_rgb(&self) -> Rgb {
        crate::convert::hpluv_to_rgb(*self)
    }

    /// Encode as a `#rrggbb` string
    #[inline]
    pub fn to_hex(&self) -> Result<Hex> {
        crate::convert::hpluv_to_hex(*self)
    }
}

impl From<Lch> for Hsluv {
    fn from(lch: Lch) -> Self {
        lch.to_hsluv()
    }
}

impl From<Lch> for Hpluv {
    fn from(lch: Lch) -> Self {
        lch.to_hpluv()
    }
}
