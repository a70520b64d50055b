//! Playlist player: the state machine mediating between user controls and
//! a single media-playback handle.

mod machine;
mod media;
mod state;

pub use machine::{MountOptions, PlayerError, PlaylistPlayer};
pub use media::{MediaEvent, MediaHandle, SourceId};
pub use state::{PlaybackState, PlayerState};

#[cfg(test)]
mod tests;
