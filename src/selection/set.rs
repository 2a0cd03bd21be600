use crate::models::Track;
use std::fmt;

/// Maximum number of songs a user can have selected at once
pub const SONG_LIMIT: usize = 10;

/// Why an `add` was refused. The set is left untouched on rejection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AddRejection {
    Duplicate,
    LimitReached,
}

impl fmt::Display for AddRejection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AddRejection::Duplicate => write!(f, "song already added"),
            AddRejection::LimitReached => write!(f, "song limit reached"),
        }
    }
}

impl std::error::Error for AddRejection {}

/// The user's selected songs: ordered, unique by track id, capped at
/// [`SONG_LIMIT`]. The track/playlist mode toggle lives in the UI layer;
/// the cap applies uniformly regardless of mode.
#[derive(Debug, Default)]
pub struct SelectedSongs {
    songs: Vec<Track>,
}

impl SelectedSongs {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a track, checking duplicate and limit before any mutation
    pub fn add(&mut self, track: Track) -> Result<(), AddRejection> {
        if self.contains(&track.id) {
            return Err(AddRejection::Duplicate);
        }
        if !self.can_add() {
            return Err(AddRejection::LimitReached);
        }
        self.songs.push(track);
        Ok(())
    }

    /// Remove by id; no-op when absent
    pub fn remove(&mut self, id: &str) {
        self.songs.retain(|song| song.id != id);
    }

    pub fn contains(&self, id: &str) -> bool {
        self.songs.iter().any(|song| song.id == id)
    }

    pub fn len(&self) -> usize {
        self.songs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.songs.is_empty()
    }

    pub fn can_add(&self) -> bool {
        self.songs.len() < SONG_LIMIT
    }

    /// Tracks in insertion order
    pub fn iter(&self) -> impl Iterator<Item = &Track> {
        self.songs.iter()
    }
}
