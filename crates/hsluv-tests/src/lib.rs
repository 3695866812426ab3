//! # hsluv-tests
//!
//! Reference parity and regression testing for hsluv-core.
//!
//! This crate provides:
//! - Wrappers around independent HSLuv/CIELUV implementations
//! - Deterministic sample generators (hex tables, HSL grids, seeded random colors)
//! - Snapshot fixture I/O and comparison
//! - Per-channel error statistics
//!
//! ## Reference Implementations
//!
//! - **hsluv**: the reference HSLuv port, same algorithm and constants
//! - **palette**: independent CIELUV / LCh(uv) / HSLuv, with its own
//!   primaries matrix and white point, so only loose agreement is expected
//!
//! ## Test Categories
//!
//! 1. **Round trips**: Hex → ... → HSLuv → ... → Hex over every equal-nibble sample
//! 2. **Gamut containment**: HSLuv/HPLuv grids always land inside the RGB cube
//! 3. **Reference parity**: agreement with the implementations above
//! 4. **Snapshot**: regression against `testdata/snapshot-rev4.json`
//! 5. **Concurrency**: parallel results match sequential ones

pub mod accuracy;
pub mod parity;
pub mod patterns;
pub mod reference;
pub mod snapshot;

pub use accuracy::{DiffStats, compare_triples, hue_distance};
pub use parity::{ParityResult, Reference};
