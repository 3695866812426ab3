//! Mathematical building blocks for the conversion pipeline
//!
//! This module provides:
//! - 2D line geometry used by the gamut boundary engine
//! - 3x3 matrix rows and dot products for RGB↔XYZ transforms
//! - The sRGB transfer function

pub mod gamma;
pub mod geometry;
pub mod matrix;

pub use gamma::{srgb_gamma_decode, srgb_gamma_encode};
pub use geometry::{Line, distance_from_pole, intersect_line, length_of_ray_until_intersect};
pub use matrix::{Matrix3x3, SRGB_TO_XYZ, XYZ_TO_SRGB, dot_product};
