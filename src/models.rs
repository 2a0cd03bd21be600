use crate::features::{Axis, FeatureVector};
use serde::{Deserialize, Serialize};

/// Canonical track used throughout the pipeline: identity, display metadata
/// and zero-or-one normalized feature vector
#[derive(Debug, Clone)]
pub struct Track {
    pub id: String,
    pub name: String,
    /// Ordered; the first artist is the display artist
    pub artists: Vec<String>,
    pub cover_url: Option<String>,
    pub duration_ms: u32,
    pub features: Option<FeatureVector>,
}

impl Track {
    pub fn primary_artist(&self) -> &str {
        self.artists.first().map(String::as_str).unwrap_or("Unknown")
    }

    pub fn artist_line(&self) -> String {
        self.artists.join(", ")
    }
}

impl Default for Track {
    fn default() -> Self {
        Track {
            id: String::new(),
            name: "Unknown".to_string(),
            artists: vec!["Unknown".to_string()],
            cover_url: None,
            duration_ms: 0,
            features: None,
        }
    }
}

/// Track object as returned by the catalog API
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TrackObject {
    pub id: String,
    pub name: String,
    pub artists: Vec<ArtistObject>,
    pub album: Option<AlbumObject>,
    pub duration_ms: u32,
    pub uri: Option<String>,
}

impl TrackObject {
    /// Largest album cover, when the album carries any images
    pub fn cover_url(&self) -> Option<String> {
        self.album
            .as_ref()
            .and_then(|album| album.images.first())
            .map(|image| image.url.clone())
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ArtistObject {
    pub name: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AlbumObject {
    pub name: Option<String>,
    #[serde(default)]
    pub images: Vec<ImageObject>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ImageObject {
    pub url: String,
}

/// Raw audio-feature record for one track, pre-normalization.
/// Loudness is in decibels, tempo in BPM, everything else in `[0, 1]`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AudioFeatures {
    pub id: String,
    pub danceability: f32,
    pub energy: f32,
    pub loudness: f32,
    pub speechiness: f32,
    pub acousticness: f32,
    pub instrumentalness: f32,
    pub liveness: f32,
    pub valence: f32,
    pub tempo: f32,
}

impl AudioFeatures {
    /// Raw value for an axis, in that axis's native unit
    pub fn raw_value(&self, axis: Axis) -> f32 {
        match axis {
            Axis::Danceability => self.danceability,
            Axis::Energy => self.energy,
            Axis::Loudness => self.loudness,
            Axis::Speechiness => self.speechiness,
            Axis::Acousticness => self.acousticness,
            Axis::Instrumentalness => self.instrumentalness,
            Axis::Liveness => self.liveness,
            Axis::Valence => self.valence,
            Axis::Tempo => self.tempo,
        }
    }
}

/// Response for the batched audio-features endpoint. Entries are
/// order-preserving and 1:1 with the requested ids; tracks the API has no
/// analysis for come back as null.
#[derive(Debug, Deserialize)]
pub struct AudioFeaturesResponse {
    pub audio_features: Vec<Option<AudioFeatures>>,
}

/// Response for track search
#[derive(Debug, Deserialize)]
pub struct SearchResponse {
    pub tracks: TrackPage,
}

#[derive(Debug, Deserialize)]
pub struct TrackPage {
    pub items: Vec<TrackObject>,
}

/// Response for similar-track recommendations
#[derive(Debug, Deserialize)]
pub struct RecommendationsResponse {
    pub tracks: Vec<TrackObject>,
}

/// Playlist display metadata
#[derive(Debug, Deserialize)]
pub struct PlaylistResponse {
    pub name: String,
    pub description: Option<String>,
    #[serde(default)]
    pub images: Vec<ImageObject>,
}

/// Response for a playlist's track listing
#[derive(Debug, Deserialize)]
pub struct PlaylistTracksResponse {
    pub items: Vec<PlaylistItem>,
}

#[derive(Debug, Deserialize)]
pub struct PlaylistItem {
    /// Null for entries the catalog can no longer resolve
    pub track: Option<TrackObject>,
}
