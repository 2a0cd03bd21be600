use super::{Axis, BatchBounds, Normalizer};
use crate::models::{AudioFeatures, Track, TrackObject};

/// One named axis with its normalized 0-10 value
#[derive(Debug, Clone, PartialEq)]
pub struct AxisValue {
    pub axis: Axis,
    pub value: f32,
}

/// All axis values for one track, normalized onto the common 0-10 scale.
///
/// Every axis appears exactly once, in `Axis::ALL` order. Values are stored
/// at full precision; rounding happens only at presentation time.
#[derive(Debug, Clone, PartialEq)]
pub struct FeatureVector {
    values: Vec<AxisValue>,
}

impl FeatureVector {
    /// Build a vector from a raw feature record using the fixed constants
    pub fn from_raw(features: &AudioFeatures) -> Self {
        Self::build(|axis| Normalizer::normalize(axis, features.raw_value(axis)))
    }

    /// Build a vector from a raw feature record using batch-observed bounds
    pub fn from_raw_with_bounds(features: &AudioFeatures, bounds: &BatchBounds) -> Self {
        Self::build(|axis| bounds.normalize(axis, features.raw_value(axis)))
    }

    fn build(mut normalize: impl FnMut(Axis) -> f32) -> Self {
        let values = Axis::ALL
            .iter()
            .map(|&axis| AxisValue {
                axis,
                value: normalize(axis),
            })
            .collect();
        Self { values }
    }

    /// Look up the value for an axis
    pub fn get(&self, axis: Axis) -> Option<f32> {
        self.values
            .iter()
            .find(|av| av.axis == axis)
            .map(|av| av.value)
    }

    pub fn iter(&self) -> impl Iterator<Item = &AxisValue> {
        self.values.iter()
    }
}

/// Builds canonical tracks from raw API payloads
pub struct FeatureExtractor;

impl FeatureExtractor {
    /// Build one canonical track. A missing feature record yields a track
    /// without a vector (the API returns null entries for tracks it has no
    /// analysis for).
    pub fn build_track(track: &TrackObject, features: Option<&AudioFeatures>) -> Track {
        Track {
            id: track.id.clone(),
            name: track.name.clone(),
            artists: track.artists.iter().map(|a| a.name.clone()).collect(),
            cover_url: track.cover_url(),
            duration_ms: track.duration_ms,
            features: features.map(FeatureVector::from_raw),
        }
    }

    /// Build a batch of tracks with fixed-constant normalization.
    /// `features` is order-preserving and 1:1 with `tracks`.
    pub fn build_tracks(tracks: &[TrackObject], features: &[Option<AudioFeatures>]) -> Vec<Track> {
        tracks
            .iter()
            .zip(features.iter())
            .map(|(track, feat)| Self::build_track(track, feat.as_ref()))
            .collect()
    }

    /// Build a batch of tracks normalized against the batch's own observed
    /// min/max per axis (the playlist heat-map strategy).
    pub fn build_tracks_batch_scaled(
        tracks: &[TrackObject],
        features: &[Option<AudioFeatures>],
    ) -> Vec<Track> {
        let bounds = BatchBounds::from_records(features.iter().flatten());

        tracks
            .iter()
            .zip(features.iter())
            .map(|(track, feat)| Track {
                id: track.id.clone(),
                name: track.name.clone(),
                artists: track.artists.iter().map(|a| a.name.clone()).collect(),
                cover_url: track.cover_url(),
                duration_ms: track.duration_ms,
                features: match (feat, &bounds) {
                    (Some(f), Some(b)) => Some(FeatureVector::from_raw_with_bounds(f, b)),
                    _ => None,
                },
            })
            .collect()
    }
}
