//! sRGB transfer function
//!
//! The only non-linearity between gamma-encoded RGB and CIE XYZ.
//! No other transfer curves are supported.

/// Linear-light threshold below which the encoding curve is a straight line
pub const SRGB_LINEAR_THRESHOLD: f64 = 0.0031308;

/// Encoded threshold below which the decoding curve is a straight line
pub const SRGB_ENCODED_THRESHOLD: f64 = 0.04045;

/// sRGB gamma decode (encoded → linear)
///
/// Converts an sRGB-encoded channel to linear light using the
/// IEC 61966-2-1 transfer function.
#[inline]
pub fn srgb_gamma_decode(encoded: f64) -> f64 {
    if encoded > SRGB_ENCODED_THRESHOLD {
        ((encoded + 0.055) / 1.055).powf(2.4)
    } else {
        encoded / 12.92
    }
}

/// sRGB gamma encode (linear → encoded)
///
/// Converts a linear-light channel to its sRGB encoding using the
/// IEC 61966-2-1 transfer function.
#[inline]
pub fn srgb_gamma_encode(linear: f64) -> f64 {
    if linear <= SRGB_LINEAR_THRESHOLD {
        12.92 * linear
    } else {
        1.055 * linear.powf(1.0 / 2.4) - 0.055
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_srgb_endpoints() {
        assert_eq!(srgb_gamma_decode(0.0), 0.0);
        assert_eq!(srgb_gamma_encode(0.0), 0.0);
        assert!((srgb_gamma_decode(1.0) - 1.0).abs() < 1e-12);
        assert!((srgb_gamma_encode(1.0) - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_srgb_roundtrip() {
        for i in 0..=1000 {
            let v = i as f64 / 1000.0;
            let rt = srgb_gamma_encode(srgb_gamma_decode(v));
            assert!((v - rt).abs() < 1e-12, "sRGB roundtrip failed at {}", v);
        }
    }

    #[test]
    fn test_srgb_linear_segment() {
        // Both branches of the curve apply the same 12.92 slope near zero
        let v = 0.002;
        assert!((srgb_gamma_encode(v) - v * 12.92).abs() < 1e-15);
        assert!((srgb_gamma_decode(v * 12.92) - v).abs() < 1e-15);
    }

    #[test]
    fn test_srgb_mid_gray() {
        // 50% linear light is encoded near 0.7354
        assert!((srgb_gamma_encode(0.5) - 0.735356983).abs() < 1e-6);
    }
}
