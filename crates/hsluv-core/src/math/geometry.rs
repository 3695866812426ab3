//! 2D line geometry in the LUV chroma plane
//!
//! Lines are kept in slope-intercept form `y = slope * x + intercept`,
//! with u on the x axis and v on the y axis.

/// A line in slope-intercept form
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Line {
    /// Slope (m)
    pub slope: f64,
    /// Y intercept (b)
    pub intercept: f64,
}

impl Line {
    /// Create a new line
    #[inline]
    pub const fn new(slope: f64, intercept: f64) -> Self {
        Self { slope, intercept }
    }

    /// The line through the origin perpendicular to this one
    #[inline]
    pub fn perpendicular_through_origin(&self) -> Self {
        Self::new(-1.0 / self.slope, 0.0)
    }

    /// Y coordinate at `x`
    #[inline]
    pub fn y_at(&self, x: f64) -> f64 {
        self.intercept + x * self.slope
    }
}

/// X coordinate where two lines cross
///
/// Parallel lines divide by zero; the gamut lines never are.
#[inline]
pub fn intersect_line(line1: Line, line2: Line) -> f64 {
    (line1.intercept - line2.intercept) / (line2.slope - line1.slope)
}

/// Euclidean distance of a point from the origin
#[inline]
pub fn distance_from_pole(point: (f64, f64)) -> f64 {
    point.0.hypot(point.1)
}

/// Length of a ray cast from the origin at angle `theta` (radians) until
/// it hits `line`
///
/// The intersection satisfies `length * sin(theta) = b + m * length * cos(theta)`,
/// so `length = b / (sin(theta) - m * cos(theta))`. Returns `None` when the
/// line lies behind the origin along the ray.
#[inline]
pub fn length_of_ray_until_intersect(theta: f64, line: Line) -> Option<f64> {
    let length = line.intercept / (theta.sin() - line.slope * theta.cos());
    if length < 0.0 { None } else { Some(length) }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f64::consts::{FRAC_PI_2, FRAC_PI_4, PI};

    const EPSILON: f64 = 1e-12;

    #[test]
    fn test_intersect_line() {
        // y = x and y = -x + 2 cross at x = 1
        let x = intersect_line(Line::new(1.0, 0.0), Line::new(-1.0, 2.0));
        assert!((x - 1.0).abs() < EPSILON);
    }

    #[test]
    fn test_distance_from_pole() {
        assert!((distance_from_pole((3.0, 4.0)) - 5.0).abs() < EPSILON);
        assert_eq!(distance_from_pole((0.0, 0.0)), 0.0);
    }

    #[test]
    fn test_ray_hits_horizontal_line() {
        // Straight up towards y = 2
        let len = length_of_ray_until_intersect(FRAC_PI_2, Line::new(0.0, 2.0));
        assert!((len.unwrap() - 2.0).abs() < EPSILON);

        // Diagonal towards y = 1 travels sqrt(2)
        let len = length_of_ray_until_intersect(FRAC_PI_4, Line::new(0.0, 1.0));
        assert!((len.unwrap() - 2.0_f64.sqrt()).abs() < EPSILON);
    }

    #[test]
    fn test_ray_pointing_away() {
        // Straight down never reaches y = 2
        assert!(length_of_ray_until_intersect(-FRAC_PI_2, Line::new(0.0, 2.0)).is_none());
        assert!(length_of_ray_until_intersect(PI + FRAC_PI_2, Line::new(0.0, 2.0)).is_none());
    }

    #[test]
    fn test_perpendicular_foot() {
        // Closest point of y = -x + 2 to the origin is (1, 1)
        let line = Line::new(-1.0, 2.0);
        let x = intersect_line(line, line.perpendicular_through_origin());
        assert!((x - 1.0).abs() < EPSILON);
        assert!((line.y_at(x) - 1.0).abs() < EPSILON);
        assert!((distance_from_pole((x, line.y_at(x))) - 2.0_f64.sqrt()).abs() < EPSILON);
    }
}
