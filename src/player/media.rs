//! The media-playback handle seam.
//!
//! The player drives exactly one handle through imperative, fire-and-forget
//! commands. Everything the handle learns afterwards (progress, metadata,
//! end of track, a refused play request) comes back as a `MediaEvent`.

use std::time::Duration;

/// Identifies one `set_source` call. Events carry the id of the source they
/// were produced for, so reports about a replaced source can be told apart.
pub type SourceId = u64;

/// Commands the player issues to the underlying audio primitive.
pub trait MediaHandle {
    /// Load `url` as the current source, tagged `source`. Playback stops
    /// until `play` is called.
    fn set_source(&mut self, source: SourceId, url: &str);
    /// Request playback of the current source. A refusal arrives later as
    /// `MediaEvent::PlayRejected`.
    fn play(&mut self);
    fn pause(&mut self);
    fn set_volume(&mut self, volume: f32);
    /// Restart the current source when it ends instead of reporting `Ended`.
    fn set_loop(&mut self, looping: bool);
}

/// Notifications emitted by a media handle.
#[derive(Debug, Clone, PartialEq)]
pub enum MediaEvent {
    /// Periodic position report while playing.
    TimeUpdate {
        source: SourceId,
        position: Duration,
        duration: Option<Duration>,
    },
    /// The source finished loading.
    MetadataLoaded {
        source: SourceId,
        duration: Option<Duration>,
    },
    /// Playback reached the end of a non-looping source.
    Ended { source: SourceId },
    /// A play request could not be honored.
    PlayRejected { reason: String },
}
