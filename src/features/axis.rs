use std::fmt;

/// The fixed set of audio-feature dimensions the catalog API exposes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Axis {
    Danceability,
    Energy,
    Loudness,
    Speechiness,
    Acousticness,
    Instrumentalness,
    Liveness,
    Valence,
    Tempo,
}

impl Axis {
    /// Canonical axis ordering, used whenever a full vector or batch is built.
    /// Consumers key on axis name, but the order must stay stable within a batch.
    pub const ALL: [Axis; 9] = [
        Axis::Danceability,
        Axis::Energy,
        Axis::Loudness,
        Axis::Speechiness,
        Axis::Acousticness,
        Axis::Instrumentalness,
        Axis::Liveness,
        Axis::Valence,
        Axis::Tempo,
    ];

    /// Lowercase name matching the catalog API's audio-feature field names
    pub fn name(&self) -> &'static str {
        match self {
            Axis::Danceability => "danceability",
            Axis::Energy => "energy",
            Axis::Loudness => "loudness",
            Axis::Speechiness => "speechiness",
            Axis::Acousticness => "acousticness",
            Axis::Instrumentalness => "instrumentalness",
            Axis::Liveness => "liveness",
            Axis::Valence => "valence",
            Axis::Tempo => "tempo",
        }
    }
}

impl fmt::Display for Axis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}
