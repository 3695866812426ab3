//! Parity testing framework
//!
//! Compares hsluv-core output against reference implementations.

use crate::accuracy::DiffStats;
use std::fmt;

/// Reference implementation for comparison
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Reference {
    /// hsluv crate - reference HSLuv port
    Hsluv,
    /// palette - independent color science crate, with its own D65 white
    Palette,
    /// Published test vectors
    Published,
}

impl Reference {
    /// Largest acceptable difference for HSLuv-scale channels (0-360, 0-100)
    pub fn hsl_tolerance(&self) -> f64 {
        match self {
            Self::Hsluv | Self::Published => 1e-6,
            Self::Palette => 0.25,
        }
    }

    /// Largest acceptable difference for RGB channels (0-1)
    pub fn rgb_tolerance(&self) -> f64 {
        match self {
            Self::Hsluv | Self::Published => 1e-6,
            Self::Palette => 1e-2,
        }
    }
}

impl fmt::Display for Reference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Reference::Hsluv => write!(f, "hsluv"),
            Reference::Palette => write!(f, "palette"),
            Reference::Published => write!(f, "published"),
        }
    }
}

/// Result of a parity test
#[derive(Debug)]
pub struct ParityResult {
    /// Name of the test
    pub test_name: String,
    /// Reference used
    pub reference: Reference,
    /// Difference statistics
    pub stats: DiffStats,
    /// Tolerance the test was held to
    pub tolerance: f64,
}

impl ParityResult {
    /// Create a result from statistics
    pub fn new(
        test_name: impl Into<String>,
        reference: Reference,
        stats: DiffStats,
        tolerance: f64,
    ) -> Self {
        Self {
            test_name: test_name.into(),
            reference,
            stats,
            tolerance,
        }
    }

    /// Whether the maximum difference is within tolerance
    pub fn passed(&self) -> bool {
        self.stats.within(self.tolerance)
    }

    /// Check if this result indicates exact match
    pub fn is_exact(&self) -> bool {
        self.stats.is_exact()
    }
}

impl fmt::Display for ParityResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:<28} vs {:<9} n={:<5} mean={:.2e} p95={:.2e} max={:.2e} (tol {:.0e}) {}",
            self.test_name,
            self.reference.to_string(),
            self.stats.count,
            self.stats.mean,
            self.stats.p95,
            self.stats.max,
            self.tolerance,
            if self.passed() { "OK" } else { "FAIL" }
        )
    }
}
