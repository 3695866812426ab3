//! CIE LCh(uv): the polar form of LUV
//!
//! Hue is in degrees in [0, 360). Chroma is the distance from the neutral
//! axis; near zero the hue is pinned to 0 so greys have a canonical form.

use bytemuck::{Pod, Zeroable};

use crate::color::white_point::{CHROMA_MIN, is_degenerate_lightness};
use crate::color::{Hpluv, Hsluv, Luv};
use crate::gamut::{max_chroma_for_hue, max_safe_chroma};

/// Lightness, chroma, hue
#[derive(Debug, Clone, Copy, PartialEq, Default, Pod, Zeroable)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[repr(C)]
pub struct Lch {
    /// Lightness (0 to 100)
    pub l: f64,
    /// Chroma (0 and up)
    pub c: f64,
    /// Hue in degrees (0 to 360)
    pub h: f64,
}

impl Lch {
    /// Create a new LCH color
    #[inline]
    pub const fn new(l: f64, c: f64, h: f64) -> Self {
        Self { l, c, h }
    }

    /// Create LCH from an array
    #[inline]
    pub const fn from_array(arr: [f64; 3]) -> Self {
        Self {
            l: arr[0],
            c: arr[1],
            h: arr[2],
        }
    }

    /// Convert to array
    #[inline]
    pub const fn to_array(&self) -> [f64; 3] {
        [self.l, self.c, self.h]
    }

    /// Check if approximately equal to another LCH color
    #[inline]
    pub fn approx_eq(&self, other: &Self, epsilon: f64) -> bool {
        (self.l - other.l).abs() < epsilon
            && (self.c - other.c).abs() < epsilon
            && (self.h - other.h).abs() < epsilon
    }

    /// Convert from LUV
    pub fn from_luv(luv: Luv) -> Self {
        let c = luv.u.hypot(luv.v);

        // Greys: disambiguate hue
        if c < CHROMA_MIN {
            return Self::new(luv.l, c, 0.0);
        }

        let mut h = luv.v.atan2(luv.u).to_degrees();
        if h < 0.0 {
            h += 360.0;
        }
        // A tiny negative angle rounds up to exactly 360
        if h >= 360.0 {
            h -= 360.0;
        }
        Self::new(luv.l, c, h)
    }

    /// Convert to LUV
    #[inline]
    pub fn to_luv(&self) -> Luv {
        let (sin, cos) = self.h.to_radians().sin_cos();
        Luv::new(self.l, cos * self.c, sin * self.c)
    }

    /// Convert to HSLuv
    ///
    /// Saturation is chroma as a percentage of the largest in-gamut chroma
    /// at this lightness and hue. Black and white get zero saturation.
    pub fn to_hsluv(&self) -> Hsluv {
        if is_degenerate_lightness(self.l) {
            return Hsluv::new(self.h, 0.0, self.l);
        }

        let max = max_chroma_for_hue(self.l, self.h);
        Hsluv::new(self.h, self.c / max * 100.0, self.l)
    }

    /// Convert to HPLuv
    ///
    /// Like [`Lch::to_hsluv`] but normalized against the chroma that is
    /// safe for every hue at this lightness. Colors in the pastel core map
    /// to 0-100; vivid colors outside it exceed 100.
    pub fn to_hpluv(&self) -> Hpluv {
        if is_degenerate_lightness(self.l) {
            return Hpluv::new(self.h, 0.0, self.l);
        }

        let max = max_safe_chroma(self.l);
        Hpluv::new(self.h, self.c / max * 100.0, self.l)
    }
}

impl From<[f64; 3]> for Lch {
    fn from(arr: [f64; 3]) -> Self {
        Self::from_array(arr)
    }
}

impl From<Lch> for [f64; 3] {
    fn from(lch: Lch) -> Self {
        lch.to_array()
    }
}

impl From<Luv> for Lch {
    fn from(luv: Luv) -> Self {
        Self::from_luv(luv)
    }
}

impl From<Hsluv> for Lch {
    fn from(hsluv: Hsluv) -> Self {
        hsluv.to_lch()
    }
}

impl From<Hpluv> for Lch {
    fn from(hpluv: Hpluv) -> Self {
        hpluv.to_lch()
    }
}
