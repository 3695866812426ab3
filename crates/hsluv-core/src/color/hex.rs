//! `#rrggbb` hexadecimal sRGB strings
//!
//! A [`Hex`] is always well formed: construction validates the input,
//! stores it in lowercase and keeps the decoded bytes, so [`Hex::to_rgb`]
//! cannot fail.

use std::fmt;
use std::str::FromStr;

use crate::color::Rgb;
use crate::error::{Error, Result};

/// A validated, lowercase `#rrggbb` color string
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "String", into = "String"))]
pub struct Hex {
    text: String,
    bytes: [u8; 3],
}

impl Hex {
    /// Parse a `#rrggbb` string
    ///
    /// Exactly six hex digits must follow the `#`. Uppercase digits are
    /// accepted and normalized to lowercase.
    pub fn new(s: &str) -> Result<Self> {
        let Some(digits) = s.strip_prefix('#') else {
            return Err(reject(s, "missing '#' prefix"));
        };
        if digits.len() != 6 {
            return Err(reject(s, "expected 6 hex digits"));
        }
        if let Some(bad) = digits.chars().find(|c| !c.is_ascii_hexdigit()) {
            return Err(reject(s, &format!("invalid hex digit {:?}", bad)));
        }

        let mut bytes = [0u8; 3];
        for (i, byte) in bytes.iter_mut().enumerate() {
            let pair = &digits[2 * i..2 * i + 2];
            *byte = u8::from_str_radix(pair, 16)
                .map_err(|e| reject(s, &format!("invalid byte {:?}: {}", pair, e)))?;
        }

        Ok(Self {
            text: s.to_ascii_lowercase(),
            bytes,
        })
    }

    /// Format 8-bit channels as `#rrggbb`
    pub fn from_u8(r: u8, g: u8, b: u8) -> Self {
        Self {
            text: format!("#{:02x}{:02x}{:02x}", r, g, b),
            bytes: [r, g, b],
        }
    }

    /// The `#rrggbb` string
    #[inline]
    pub fn as_str(&self) -> &str {
        &self.text
    }

    /// The 8-bit channel values
    #[inline]
    pub const fn to_u8(&self) -> [u8; 3] {
        self.bytes
    }

    /// Decode to sRGB, each byte divided by 255
    pub fn to_rgb(&self) -> Rgb {
        Rgb::from(self.to_u8())
    }
}

fn reject(input: &str, reason: &str) -> Error {
    log::debug!("rejecting hex color {:?}: {}", input, reason);
    Error::HexParse(format!("{} in {:?}", reason, input))
}

impl fmt::Display for Hex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}

impl AsRef<str> for Hex {
    fn as_ref(&self) -> &str {
        &self.text
    }
}

impl FromStr for Hex {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::new(s)
    }
}

impl TryFrom<&str> for Hex {
    type Error = Error;

    fn try_from(s: &str) -> Result<Self> {
        Self::new(s)
    }
}

impl TryFrom<String> for Hex {
    type Error = Error;

    fn try_from(s: String) -> Result<Self> {
        Self::new(&s)
    }
}

impl From<Hex> for String {
    fn from(hex: Hex) -> Self {
        hex.text
    }
}

impl From<Hex> for Rgb {
    fn from(hex: Hex) -> Self {
        hex.to_rgb()
    }
}
