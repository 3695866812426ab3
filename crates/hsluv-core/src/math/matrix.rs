//! 3x3 matrices for the RGB↔XYZ transforms
//!
//! Rows are stored explicitly so callers that need one plane equation per
//! RGB channel (the gamut boundary engine) can iterate them directly.

use std::ops::Index;

/// A 3x3 matrix for color space transformations
///
/// Stored in row-major order: m[row][col]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Matrix3x3 {
    /// Matrix elements in row-major order
    pub m: [[f64; 3]; 3],
}

impl Matrix3x3 {
    /// Create a new matrix from row-major elements
    #[inline]
    pub const fn new(m: [[f64; 3]; 3]) -> Self {
        Self { m }
    }

    /// Create an identity matrix
    #[inline]
    pub const fn identity() -> Self {
        Self {
            m: [[1.0, 0.0, 0.0], [0.0, 1.0, 0.0], [0.0, 0.0, 1.0]],
        }
    }

    /// The three rows, in channel order
    #[inline]
    pub const fn rows(&self) -> &[[f64; 3]; 3] {
        &self.m
    }

    /// Multiply this matrix by any three-component value
    ///
    /// Returns M × v
    #[inline]
    pub fn multiply_vec(&self, v: impl Into<[f64; 3]>) -> [f64; 3] {
        let v = v.into();
        [
            dot_product(&self.m[0], v),
            dot_product(&self.m[1], v),
            dot_product(&self.m[2], v),
        ]
    }

    /// Multiply this matrix by another matrix
    ///
    /// Returns self × other
    pub fn multiply(&self, other: &Self) -> Self {
        let mut m = [[0.0; 3]; 3];
        for (i, row) in m.iter_mut().enumerate() {
            for (j, cell) in row.iter_mut().enumerate() {
                *cell = self.m[i][0] * other.m[0][j]
                    + self.m[i][1] * other.m[1][j]
                    + self.m[i][2] * other.m[2][j];
            }
        }
        Self { m }
    }

    /// Check if this matrix is approximately equal to another
    pub fn approx_eq(&self, other: &Self, epsilon: f64) -> bool {
        self.m
            .iter()
            .flatten()
            .zip(other.m.iter().flatten())
            .all(|(a, b)| (a - b).abs() <= epsilon)
    }
}

impl Default for Matrix3x3 {
    fn default() -> Self {
        Self::identity()
    }
}

impl Index<usize> for Matrix3x3 {
    type Output = [f64; 3];

    fn index(&self, row: usize) -> &Self::Output {
        &self.m[row]
    }
}

/// Dot product of a matrix row with any value that has a 3-component view
///
/// Every color type in this crate converts into `[f64; 3]`, so
/// `dot_product(&XYZ_TO_SRGB[0], xyz)` reads the same as the math.
#[inline]
pub fn dot_product(a: &[f64; 3], b: impl Into<[f64; 3]>) -> f64 {
    let b = b.into();
    a[0] * b[0] + a[1] * b[1] + a[2] * b[2]
}

// ============================================================================
// sRGB primaries, D65 white point
// ============================================================================

/// XYZ to linear sRGB matrix
///
/// One row per output channel (R, G, B). The gamut boundary engine derives
/// two bounding lines from each row.
pub const XYZ_TO_SRGB: Matrix3x3 = Matrix3x3::new([
    [3.2409699419045214, -1.5373831775700935, -0.49861076029300328],
    [-0.96924363628087983, 1.8759675015077207, 0.041555057407175613],
    [0.055630079696993609, -0.20397695888897657, 1.0569715142428786],
]);

/// Linear sRGB to XYZ matrix
///
/// Inverse of XYZ_TO_SRGB. The rows yield X, Y and Z.
pub const SRGB_TO_XYZ: Matrix3x3 = Matrix3x3::new([
    [0.41239079926595948, 0.35758433938387796, 0.18048078840183429],
    [0.21263900587151036, 0.71516867876775593, 0.072192315360733715],
    [0.019330818715591851, 0.11919477979462599, 0.95053215224966058],
]);
