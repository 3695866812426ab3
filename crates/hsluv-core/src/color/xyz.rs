//! CIE XYZ Color Space
//!
//! XYZ is the hub between the device RGB cube and the perceptual LUV
//! family. Values are relative to D65 with Y normalized so white has Y = 1.

use bytemuck::{Pod, Zeroable};

use crate::color::white_point::{REF_U, REF_V, uv_chromaticity};
use crate::color::{Luv, Rgb, luv::y_to_l};
use crate::math::{XYZ_TO_SRGB, dot_product, srgb_gamma_encode};

/// CIE 1931 XYZ color coordinates
#[derive(Debug, Clone, Copy, PartialEq, Default, Pod, Zeroable)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[repr(C)]
pub struct Xyz {
    /// X tristimulus value (mix of cone responses, roughly red)
    pub x: f64,
    /// Y tristimulus value (luminance)
    pub y: f64,
    /// Z tristimulus value (roughly blue)
    pub z: f64,
}

impl Xyz {
    /// Create a new XYZ color
    #[inline]
    pub const fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }

    /// Create XYZ from an array
    #[inline]
    pub const fn from_array(arr: [f64; 3]) -> Self {
        Self {
            x: arr[0],
            y: arr[1],
            z: arr[2],
        }
    }

    /// Convert to array
    #[inline]
    pub const fn to_array(&self) -> [f64; 3] {
        [self.x, self.y, self.z]
    }

    /// Check if approximately equal to another XYZ color
    #[inline]
    pub fn approx_eq(&self, other: &Self, epsilon: f64) -> bool {
        (self.x - other.x).abs() < epsilon
            && (self.y - other.y).abs() < epsilon
            && (self.z - other.z).abs() < epsilon
    }

    /// Convert to gamma-encoded sRGB
    ///
    /// Applies the XYZ → linear sRGB matrix row by row, then the sRGB
    /// encoding curve. The result is not clamped.
    pub fn to_rgb(&self) -> Rgb {
        let [r, g, b] = XYZ_TO_SRGB
            .rows()
            .map(|row| srgb_gamma_encode(dot_product(&row, *self)));
        Rgb::new(r, g, b)
    }

    /// Convert to CIE LUV
    ///
    /// Black (L = 0) short-circuits to the origin since u and v are
    /// undefined there.
    pub fn to_luv(&self) -> Luv {
        let l = y_to_l(self.y);
        if l == 0.0 {
            return Luv::new(0.0, 0.0, 0.0);
        }

        let Some((var_u, var_v)) = uv_chromaticity(*self) else {
            return Luv::new(0.0, 0.0, 0.0);
        };

        Luv::new(l, 13.0 * l * (var_u - REF_U), 13.0 * l * (var_v - REF_V))
    }
}

impl From<[f64; 3]> for Xyz {
    fn from(arr: [f64; 3]) -> Self {
        Self::from_array(arr)
    }
}

impl From<Xyz> for [f64; 3] {
    fn from(xyz: Xyz) -> Self {
        xyz.to_array()
    }
}

impl From<Rgb> for Xyz {
    fn from(rgb: Rgb) -> Self {
        rgb.to_xyz()
    }
}

impl From<Luv> for Xyz {
    fn from(luv: Luv) -> Self {
        luv.to_xyz()
    }
}
