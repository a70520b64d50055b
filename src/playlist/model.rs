use std::time::Duration;

use thiserror::Error;

/// One playable item of the playlist.
#[derive(Debug, Clone, PartialEq)]
pub struct Track {
    pub id: u32,
    pub title: String,
    pub artist: String,
    /// Site-absolute media URL, resolved against the asset root by the audio backend.
    pub url: String,
    pub duration: Option<Duration>,
}

impl Track {
    pub fn new(id: u32, title: &str, artist: &str, url: &str) -> Self {
        Self {
            id,
            title: title.to_string(),
            artist: artist.to_string(),
            url: url.to_string(),
            duration: None,
        }
    }

    pub fn with_duration(mut self, duration: Duration) -> Self {
        self.duration = Some(duration);
        self
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum PlaylistError {
    #[error("track id {0} appears more than once")]
    DuplicateId(u32),
}

/// Fixed, ordered list of tracks. Built once and never mutated afterwards.
#[derive(Debug, Clone)]
pub struct Playlist {
    tracks: Vec<Track>,
}

impl Playlist {
    /// Build a playlist, rejecting duplicate ids. Order is kept as given.
    pub fn new(tracks: Vec<Track>) -> Result<Self, PlaylistError> {
        let mut seen: Vec<u32> = Vec::with_capacity(tracks.len());
        for t in &tracks {
            if seen.contains(&t.id) {
                return Err(PlaylistError::DuplicateId(t.id));
            }
            seen.push(t.id);
        }
        Ok(Self { tracks })
    }

    pub fn tracks(&self) -> &[Track] {
        &self.tracks
    }

    pub fn get(&self, index: usize) -> Option<&Track> {
        self.tracks.get(index)
    }

    pub fn len(&self) -> usize {
        self.tracks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tracks.is_empty()
    }
}
