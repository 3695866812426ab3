//! sRGB gamut boundary in the LUV chroma plane
//!
//! For a fixed lightness L, each sRGB channel's linear value is an affine
//! function of (u, v). Setting it to 0 or 1 gives a line in the u/v plane,
//! so the slice of the RGB cube at L is the convex region bounded by six
//! lines, two per channel. HSLuv needs the distance to that boundary along
//! one hue direction; HPLuv needs the distance to its nearest point.
//!
//! The closed-form slope and intercept come from substituting the LUV → XYZ
//! relations into each row of [`XYZ_TO_SRGB`] and solving for v. The
//! integer coefficients are that derivation with the D65 white point
//! folded in.

use crate::color::white_point::{EPSILON, KAPPA};
use crate::math::{Line, XYZ_TO_SRGB, distance_from_pole, intersect_line, length_of_ray_until_intersect};

/// The six lines bounding the sRGB gamut at one lightness
///
/// Lines are ordered R(0), R(1), G(0), G(1), B(0), B(1).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GamutBounds {
    lightness: f64,
    lines: [Line; 6],
}

impl GamutBounds {
    /// Compute the bounding lines for lightness `l`
    ///
    /// Only meaningful for `l` strictly inside (0, 100); at the extremes the
    /// gamut collapses to a point and the lines degenerate.
    pub fn new(l: f64) -> Self {
        let sub1 = (l + 16.0).powi(3) / 1_560_896.0;
        let sub2 = if sub1 > EPSILON { sub1 } else { l / KAPPA };

        let matrix = XYZ_TO_SRGB;
        let mut lines = [Line::default(); 6];
        let planes = matrix
            .rows()
            .iter()
            .flat_map(|row| [(row, 0.0), (row, 1.0)]);

        for (line, (&[m1, m2, m3], t)) in lines.iter_mut().zip(planes) {
            let top1 = (284_517.0 * m1 - 94_839.0 * m3) * sub2;
            let top2 = (838_422.0 * m3 + 769_860.0 * m2 + 731_718.0 * m1) * l * sub2
                - 769_860.0 * t * l;
            let bottom = (632_260.0 * m3 - 126_452.0 * m2) * sub2 + 126_452.0 * t;

            *line = Line::new(top1 / bottom, top2 / bottom);
        }

        Self { lightness: l, lines }
    }

    /// Lightness these bounds were computed for
    #[inline]
    pub const fn lightness(&self) -> f64 {
        self.lightness
    }

    /// The six boundary lines
    #[inline]
    pub const fn lines(&self) -> &[Line; 6] {
        &self.lines
    }

    /// Largest chroma along hue `h` (degrees) that stays in gamut
    ///
    /// Casts a ray from the neutral axis and keeps the nearest wall it hits.
    pub fn max_chroma_for_hue(&self, h: f64) -> f64 {
        let theta = h.to_radians();
        self.lines
            .iter()
            .filter_map(|&line| length_of_ray_until_intersect(theta, line))
            .fold(f64::MAX, f64::min)
    }

    /// Largest chroma that stays in gamut for every hue
    ///
    /// The shortest distance from the origin to any of the six lines, found
    /// at the foot of the perpendicular through the origin.
    pub fn max_safe_chroma(&self) -> f64 {
        self.lines
            .iter()
            .map(|&line| {
                let x = intersect_line(line, line.perpendicular_through_origin());
                distance_from_pole((x, line.y_at(x)))
            })
            .fold(f64::MAX, f64::min)
    }
}

/// For a given lightness and hue, the maximum chroma that fits in sRGB
#[inline]
pub fn max_chroma_for_hue(l: f64, h: f64) -> f64 {
    GamutBounds::new(l).max_chroma_for_hue(h)
}

/// For a given lightness, the maximum chroma that fits in sRGB at any hue
#[inline]
pub fn max_safe_chroma(l: f64) -> f64 {
    GamutBounds::new(l).max_safe_chroma()
}
