//! Snapshot fixture management
//!
//! The fixture maps `#rrggbb` samples to the forward pipeline values
//! computed from them. It is checked in under `testdata/` and compared
//! against what the current build produces.

use anyhow::{Context, Result, anyhow};
use hsluv_core::Hex;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

/// Forward pipeline values for one hex sample
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SnapshotEntry {
    pub rgb: [f64; 3],
    pub xyz: [f64; 3],
    pub luv: [f64; 3],
    pub lch: [f64; 3],
    pub hsluv: [f64; 3],
    pub hpluv: [f64; 3],
}

impl SnapshotEntry {
    /// Compute all stages for a hex sample
    pub fn compute(hex: &Hex) -> Self {
        let rgb = hex.to_rgb();
        let xyz = rgb.to_xyz();
        let luv = xyz.to_luv();
        let lch = luv.to_lch();

        Self {
            rgb: rgb.into(),
            xyz: xyz.into(),
            luv: luv.into(),
            lch: lch.into(),
            hsluv: lch.to_hsluv().into(),
            hpluv: lch.to_hpluv().into(),
        }
    }

    /// Stage values by tag, in pipeline order
    pub fn stages(&self) -> [(&'static str, [f64; 3]); 6] {
        [
            ("rgb", self.rgb),
            ("xyz", self.xyz),
            ("luv", self.luv),
            ("lch", self.lch),
            ("hsluv", self.hsluv),
            ("hpluv", self.hpluv),
        ]
    }
}

/// Hex sample → pipeline values
pub type Snapshot = BTreeMap<String, SnapshotEntry>;

/// A channel that differs between two snapshots
#[derive(Debug, Clone)]
pub struct SnapshotMismatch {
    pub hex: String,
    pub tag: &'static str,
    pub channel: usize,
    pub stable: f64,
    pub current: f64,
}

/// Workspace `testdata/` directory
pub fn testdata_dir() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("..")
        .join("..")
        .join("testdata")
}

/// Path of the checked-in fixture
pub fn fixture_path() -> PathBuf {
    testdata_dir().join("snapshot-rev4.json")
}

/// Load a snapshot from disk
pub fn load(path: &Path) -> Result<Snapshot> {
    let data = std::fs::read_to_string(path)
        .with_context(|| format!("reading snapshot {}", path.display()))?;
    serde_json::from_str(&data).with_context(|| format!("parsing snapshot {}", path.display()))
}

/// Compute a snapshot for the given hex samples
pub fn compute<'a>(samples: impl IntoIterator<Item = &'a str>) -> Result<Snapshot> {
    samples
        .into_iter()
        .map(|s| -> Result<(String, SnapshotEntry)> {
            let hex = Hex::new(s)?;
            Ok((hex.to_string(), SnapshotEntry::compute(&hex)))
        })
        .collect()
}

/// Compare every channel of `stable` against `current`
///
/// Samples missing from `current` are an error, not a mismatch.
pub fn compare(stable: &Snapshot, current: &Snapshot, tolerance: f64) -> Result<Vec<SnapshotMismatch>> {
    let mut mismatches = Vec::new();

    for (hex, stable_entry) in stable {
        let current_entry = current
            .get(hex)
            .ok_or_else(|| anyhow!("current sample is missing at {}", hex))?;

        for ((tag, stable_tuple), (_, current_tuple)) in
            stable_entry.stages().into_iter().zip(current_entry.stages())
        {
            for channel in 0..3 {
                let (a, b) = (stable_tuple[channel], current_tuple[channel]);
                if (a - b).abs() >= tolerance {
                    mismatches.push(SnapshotMismatch {
                        hex: hex.clone(),
                        tag,
                        channel,
                        stable: a,
                        current: b,
                    });
                }
            }
        }
    }

    Ok(mismatches)
}
