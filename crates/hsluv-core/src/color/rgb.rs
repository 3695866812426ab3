//! Gamma-encoded sRGB
//!
//! Channels are nominally in [0, 1] but the type does not clamp: values
//! slightly outside the cube are how callers detect out-of-gamut results.

use bytemuck::{Pod, Zeroable};

use crate::color::{Hex, Hpluv, Hsluv, Xyz};
use crate::error::{Error, Result};
use crate::math::{SRGB_TO_XYZ, dot_product, srgb_gamma_decode};

/// sRGB color in floating-point (0.0-1.0 range)
#[derive(Debug, Clone, Copy, PartialEq, Default, Pod, Zeroable)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[repr(C)]
pub struct Rgb {
    /// Red component (0.0 to 1.0)
    pub r: f64,
    /// Green component (0.0 to 1.0)
    pub g: f64,
    /// Blue component (0.0 to 1.0)
    pub b: f64,
}

impl Rgb {
    /// Create a new RGB color
    #[inline]
    pub const fn new(r: f64, g: f64, b: f64) -> Self {
        Self { r, g, b }
    }

    /// Create RGB from an array
    #[inline]
    pub const fn from_array(arr: [f64; 3]) -> Self {
        Self {
            r: arr[0],
            g: arr[1],
            b: arr[2],
        }
    }

    /// Convert to array
    #[inline]
    pub const fn to_array(&self) -> [f64; 3] {
        [self.r, self.g, self.b]
    }

    /// Create from 8-bit values (0-255)
    #[inline]
    pub fn from_u8(r: u8, g: u8, b: u8) -> Self {
        Self {
            r: f64::from(r) / 255.0,
            g: f64::from(g) / 255.0,
            b: f64::from(b) / 255.0,
        }
    }

    /// Convert to 8-bit values (0-255), clamping out-of-range channels
    #[inline]
    pub fn to_u8(&self) -> [u8; 3] {
        self.to_array()
            .map(|c| (c * 255.0).round().clamp(0.0, 255.0) as u8)
    }

    /// Check if all components are in [0, 1], allowing `tolerance` slack
    /// on either side
    #[inline]
    pub fn is_in_gamut(&self, tolerance: f64) -> bool {
        self.to_array()
            .iter()
            .all(|&c| c >= -tolerance && c <= 1.0 + tolerance)
    }

    /// Check if approximately equal to another RGB color
    #[inline]
    pub fn approx_eq(&self, other: &Self, epsilon: f64) -> bool {
        (self.r - other.r).abs() < epsilon
            && (self.g - other.g).abs() < epsilon
            && (self.b - other.b).abs() < epsilon
    }

    /// Convert to CIE XYZ
    ///
    /// Decodes the sRGB transfer curve, then applies the linear sRGB → XYZ
    /// matrix.
    pub fn to_xyz(&self) -> Xyz {
        let linear = self.to_array().map(srgb_gamma_decode);
        let [x, y, z] = SRGB_TO_XYZ.rows().map(|row| dot_product(&row, linear));
        Xyz::new(x, y, z)
    }

    /// Encode as a `#rrggbb` string
    ///
    /// Each channel is rounded to six decimal places first so that values a
    /// few ulps outside [0, 1] still encode. Anything further out is a
    /// caller error and reported as [`Error::ChannelOutOfRange`].
    pub fn to_hex(&self) -> Result<Hex> {
        Ok(Hex::from_u8(
            channel_to_u8('r', self.r)?,
            channel_to_u8('g', self.g)?,
            channel_to_u8('b', self.b)?,
        ))
    }

    /// Convert to HSLuv
    #[inline]
    pub fn to_hsluv(&self) -> Hsluv {
        crate::convert::rgb_to_hsluv(*self)
    }

    /// Convert to HPLuv
    #[inline]
    pub fn to_hpluv(&self) -> Hpluv {
        crate::convert::rgb_to_hpluv(*self)
    }

    /// Black color
    pub const BLACK: Self = Self::new(0.0, 0.0, 0.0);

    /// White color
    pub const WHITE: Self = Self::new(1.0, 1.0, 1.0);

    /// Red primary
    pub const RED: Self = Self::new(1.0, 0.0, 0.0);

    /// Green primary
    pub const GREEN: Self = Self::new(0.0, 1.0, 0.0);

    /// Blue primary
    pub const BLUE: Self = Self::new(0.0, 0.0, 1.0);
}

/// Round to six decimals, validate, scale to a byte
fn channel_to_u8(channel: char, value: f64) -> Result<u8> {
    let rounded = (value * 1e6).round() / 1e6;
    if !(0.0..=1.0).contains(&rounded) {
        log::warn!("RGB channel {} out of range: {}", channel, value);
        return Err(Error::ChannelOutOfRange { channel, value });
    }
    Ok((rounded * 255.0).round() as u8)
}

impl From<[f64; 3]> for Rgb {
    fn from(arr: [f64; 3]) -> Self {
        Self::from_array(arr)
    }
}

impl From<Rgb> for [f64; 3] {
    fn from(rgb: Rgb) -> Self {
        rgb.to_array()
    }
}

impl From<[u8; 3]> for Rgb {
    fn from(arr: [u8; 3]) -> Self {
        Self::from_u8(arr[0], arr[1], arr[2])
    }
}

impl From<Xyz> for Rgb {
    fn from(xyz: Xyz) -> Self {
        xyz.to_rgb()
    }
}

impl TryFrom<Rgb> for Hex {
    type Error = Error;

    fn try_from(rgb: Rgb) -> Result<Self> {
        rgb.to_hex()
    }
}
