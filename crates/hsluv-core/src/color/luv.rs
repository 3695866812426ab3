//! CIE 1976 L*u*v* Color Space
//!
//! - L*: Lightness (0 = black, 100 = white)
//! - u*, v*: chromaticity offsets from the D65 white point

use bytemuck::{Pod, Zeroable};

use crate::color::white_point::{EPSILON, KAPPA, REF_U, REF_V};
use crate::color::{Lch, Xyz};

/// CIELUV color coordinates
#[derive(Debug, Clone, Copy, PartialEq, Default, Pod, Zeroable)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[repr(C)]
pub struct Luv {
    /// Lightness (0 to 100)
    pub l: f64,
    /// Green-red axis
    pub u: f64,
    /// Blue-yellow axis
    pub v: f64,
}

impl Luv {
    /// Create a new LUV color
    #[inline]
    pub const fn new(l: f64, u: f64, v: f64) -> Self {
        Self { l, u, v }
    }

    /// Create LUV from an array
    #[inline]
    pub const fn from_array(arr: [f64; 3]) -> Self {
        Self {
            l: arr[0],
            u: arr[1],
            v: arr[2],
        }
    }

    /// Convert to array
    #[inline]
    pub const fn to_array(&self) -> [f64; 3] {
        [self.l, self.u, self.v]
    }

    /// Check if approximately equal to another LUV color
    #[inline]
    pub fn approx_eq(&self, other: &Self, epsilon: f64) -> bool {
        (self.l - other.l).abs() < epsilon
            && (self.u - other.u).abs() < epsilon
            && (self.v - other.v).abs() < epsilon
    }

    /// Convert to XYZ
    ///
    /// Recovers u′v′ from u*v*, takes Y from the inverse lightness curve
    /// and solves the remaining 2x2 system for X and Z.
    pub fn to_xyz(&self) -> Xyz {
        if self.l == 0.0 {
            return Xyz::new(0.0, 0.0, 0.0);
        }

        let var_u = self.u / (13.0 * self.l) + REF_U;
        let var_v = self.v / (13.0 * self.l) + REF_V;

        let y = l_to_y(self.l);
        let x = 0.0 - (9.0 * y * var_u) / ((var_u - 4.0) * var_v - var_u * var_v);
        let z = (9.0 * y - (15.0 * var_v * y) - (var_v * x)) / (3.0 * var_v);

        Xyz::new(x, y, z)
    }

    /// Convert to polar LCH form
    pub fn to_lch(&self) -> Lch {
        Lch::from_luv(*self)
    }
}

/// Lightness from relative luminance (D65, Yn = 1)
#[inline]
pub fn y_to_l(y: f64) -> f64 {
    if y <= EPSILON {
        y * KAPPA
    } else {
        116.0 * y.powf(1.0 / 3.0) - 16.0
    }
}

/// Relative luminance from lightness, inverse of [`y_to_l`]
#[inline]
pub fn l_to_y(l: f64) -> f64 {
    if l <= 8.0 {
        l / KAPPA
    } else {
        ((l + 16.0) / 116.0).powi(3)
    }
}

impl From<[f64; 3]> for Luv {
    fn from(arr: [f64; 3]) -> Self {
        Self::from_array(arr)
    }
}

impl From<Luv> for [f64; 3] {
    fn from(luv: Luv) -> Self {
        luv.to_array()
    }
}

impl From<Xyz> for Luv {
    fn from(xyz: Xyz) -> Self {
        xyz.to_luv()
    }
}

impl From<Lch> for Luv {
    fn from(lch: Lch) -> Self {
        lch.to_luv()
    }
}
