//! Accuracy measurement between two implementations
//!
//! Colors are compared channel by channel in their own units. Hue channels
//! are compared on the circle so 359.9° and 0.1° are 0.2° apart.

/// Statistics from a channel-wise comparison
#[derive(Debug, Clone)]
pub struct DiffStats {
    /// Mean absolute difference across all channels
    pub mean: f64,
    /// Maximum absolute difference
    pub max: f64,
    /// 95th percentile absolute difference
    pub p95: f64,
    /// Number of colors compared
    pub count: usize,
}

impl DiffStats {
    /// Check if every difference is within `tolerance`
    pub fn within(&self, tolerance: f64) -> bool {
        self.max <= tolerance
    }

    /// Check if the implementations agree to floating-point noise
    pub fn is_exact(&self) -> bool {
        self.max < 1e-9
    }
}

/// Angular distance between two hues in degrees, in [0, 180]
pub fn hue_distance(a: f64, b: f64) -> f64 {
    let d = (a - b).rem_euclid(360.0);
    d.min(360.0 - d)
}

/// Absolute differences of one pair of triples
///
/// `hue_channel` marks which channel, if any, is a hue in degrees.
pub fn channel_diffs(reference: [f64; 3], result: [f64; 3], hue_channel: Option<usize>) -> [f64; 3] {
    let mut out = [0.0; 3];
    for (i, d) in out.iter_mut().enumerate() {
        *d = if hue_channel == Some(i) {
            hue_distance(reference[i], result[i])
        } else {
            (reference[i] - result[i]).abs()
        };
    }
    out
}

/// Compare two lists of triples and compute difference statistics
pub fn compare_triples(
    reference: &[[f64; 3]],
    result: &[[f64; 3]],
    hue_channel: Option<usize>,
) -> DiffStats {
    assert_eq!(reference.len(), result.len());

    let mut diffs: Vec<f64> = reference
        .iter()
        .zip(result)
        .flat_map(|(&a, &b)| channel_diffs(a, b, hue_channel))
        .collect();

    diffs.sort_by(|a, b| a.partial_cmp(b).unwrap_or(std::cmp::Ordering::Equal));

    let mean = if diffs.is_empty() {
        0.0
    } else {
        diffs.iter().sum::<f64>() / diffs.len() as f64
    };
    let max = *diffs.last().unwrap_or(&0.0);
    let p95_idx = (diffs.len() as f64 * 0.95) as usize;
    let p95 = diffs.get(p95_idx).copied().unwrap_or(max);

    DiffStats {
        mean,
        max,
        p95,
        count: reference.len(),
    }
}
