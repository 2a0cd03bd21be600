use super::Axis;
use crate::models::AudioFeatures;

/// Loudness/tempo rescaling constants, derived from a large public sample of
/// catalog tracks. Single definition shared by every view of the data.
pub const MIN_LOUDNESS: f32 = -49.531;
pub const MAX_LOUDNESS: f32 = 4.532;
pub const MIN_TEMPO: f32 = 0.0;
pub const MAX_TEMPO: f32 = 243.372;

/// Pure normalization functions mapping raw feature ranges onto the 0-10 scale
pub struct Normalizer;

impl Normalizer {
    /// Normalize a raw axis value using the fixed global constants.
    ///
    /// Values outside the assumed raw domain are NOT clamped; they come out
    /// below 0 or above 10 and are passed through to the consumer unchanged.
    pub fn normalize(axis: Axis, raw: f32) -> f32 {
        match axis {
            Axis::Loudness => Self::rescale(raw, MIN_LOUDNESS, MAX_LOUDNESS),
            Axis::Tempo => Self::rescale(raw, MIN_TEMPO, MAX_TEMPO),
            _ => raw * 10.0,
        }
    }

    /// Linear rescale of `raw` from `[min, max]` onto `[0, 10]`
    pub fn rescale(raw: f32, min: f32, max: f32) -> f32 {
        ((raw - min) / (max - min)) * 10.0
    }
}

/// Per-axis min/max observed across one batch of raw feature records.
///
/// This is the dynamic normalization strategy: instead of the fixed global
/// constants, every axis is rescaled against the bounds of the batch itself.
/// Used when aggregating an arbitrary playlist (heat map), where relative
/// spread matters more than absolute position.
#[derive(Debug, Clone)]
pub struct BatchBounds {
    mins: [f32; Axis::ALL.len()],
    maxs: [f32; Axis::ALL.len()],
}

impl BatchBounds {
    /// Observe bounds over a batch. Returns `None` for an empty batch.
    pub fn from_records<'a>(records: impl IntoIterator<Item = &'a AudioFeatures>) -> Option<Self> {
        let mut mins = [f32::INFINITY; Axis::ALL.len()];
        let mut maxs = [f32::NEG_INFINITY; Axis::ALL.len()];
        let mut seen = false;

        for record in records {
            seen = true;
            for (i, axis) in Axis::ALL.iter().enumerate() {
                let raw = record.raw_value(*axis);
                mins[i] = mins[i].min(raw);
                maxs[i] = maxs[i].max(raw);
            }
        }

        if seen { Some(Self { mins, maxs }) } else { None }
    }

    pub fn min(&self, axis: Axis) -> f32 {
        self.mins[axis as usize]
    }

    pub fn max(&self, axis: Axis) -> f32 {
        self.maxs[axis as usize]
    }

    /// Rescale a raw value against the observed bounds for its axis
    pub fn normalize(&self, axis: Axis, raw: f32) -> f32 {
        Normalizer::rescale(raw, self.min(axis), self.max(axis))
    }
}
