//! Error types for hsluv-core

use thiserror::Error;

/// Result type for hsluv-core operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in hsluv-core operations
///
/// Every conversion between numeric color spaces is total. Only the
/// boundaries with hexadecimal text can fail.
#[derive(Error, Debug, Clone, PartialEq)]
#[non_exhaustive]
pub enum Error {
    /// Failed to parse a `#rrggbb` string
    #[error("Hex parse error: {0}")]
    HexParse(String),

    /// An RGB channel cannot be encoded as a hex byte
    #[error("Illegal RGB value for channel {channel}: {value} (expected 0.0..=1.0)")]
    ChannelOutOfRange { channel: char, value: f64 },
}
