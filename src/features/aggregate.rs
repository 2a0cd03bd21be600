use super::Axis;
use crate::models::Track;

/// Box-and-whisker summary for one axis over a batch of tracks
#[derive(Debug, Clone, PartialEq)]
pub struct AggregateStats {
    pub axis: Axis,
    pub q1: f32,
    pub median: f32,
    pub q3: f32,
    pub min: f32,
    pub max: f32,
    /// Lower whisker: `max(q1 - 1.5*IQR, min)` — never below the data
    pub iqr_low: f32,
    /// Upper whisker: `min(q3 + 1.5*IQR, max)` — never above the data
    pub iqr_high: f32,
}

/// Per-axis descriptive statistics for the distribution view
pub struct Aggregator;

impl Aggregator {
    /// Aggregate one axis over a sequence of possibly-missing values.
    ///
    /// Missing values are filtered out first. Returns `None` when nothing
    /// remains; the caller skips that axis instead of faulting. Axes are
    /// independent; call once per axis.
    pub fn aggregate(axis: Axis, values: &[Option<f32>]) -> Option<AggregateStats> {
        let mut present: Vec<f32> = values.iter().flatten().copied().collect();
        if present.is_empty() {
            return None;
        }
        present.sort_by(|a, b| a.partial_cmp(b).unwrap_or(std::cmp::Ordering::Equal));

        let q1 = Self::quantile(&present, 0.25);
        let median = Self::quantile(&present, 0.5);
        let q3 = Self::quantile(&present, 0.75);
        let iqr = q3 - q1;
        let min = present[0];
        let max = present[present.len() - 1];

        Some(AggregateStats {
            axis,
            q1,
            median,
            q3,
            min,
            max,
            iqr_low: (q1 - 1.5 * iqr).max(min),
            iqr_high: (q3 + 1.5 * iqr).min(max),
        })
    }

    /// Aggregate one axis over a batch of tracks, skipping tracks without
    /// a feature vector
    pub fn aggregate_tracks(axis: Axis, tracks: &[Track]) -> Option<AggregateStats> {
        let values: Vec<Option<f32>> = tracks
            .iter()
            .map(|t| t.features.as_ref().and_then(|v| v.get(axis)))
            .collect();
        Self::aggregate(axis, &values)
    }

    /// Interpolated-rank quantile over an ascending-sorted slice: rank
    /// `p * (n - 1)`, linear interpolation between the floor and ceil ranks
    fn quantile(sorted: &[f32], p: f32) -> f32 {
        let rank = p * (sorted.len() - 1) as f32;
        let lo = rank.floor() as usize;
        let hi = rank.ceil() as usize;
        let lower = sorted[lo];
        let upper = sorted[hi];
        lower + (upper - lower) * (rank - lo as f32)
    }
}
