use std::time::Duration;

use thiserror::Error;
use tracing::{debug, info, warn};

use crate::playlist::{Playlist, Track};

use super::media::{MediaEvent, MediaHandle, SourceId};
use super::state::{PlaybackState, PlayerState};

#[derive(Debug, Error, PartialEq, Eq)]
pub enum PlayerError {
    #[error("the playlist has no tracks")]
    EmptyPlaylist,
    #[error("track {index} is out of range for a playlist of {len}")]
    TrackOutOfRange { index: usize, len: usize },
}

/// Settings applied once when the player mounts.
#[derive(Debug, Clone, Copy)]
pub struct MountOptions {
    pub volume: f32,
    pub track_loop: bool,
    pub panel_visible: bool,
}

impl Default for MountOptions {
    fn default() -> Self {
        Self {
            volume: 0.3,
            track_loop: true,
            panel_visible: true,
        }
    }
}

/// Sequential, loop-on-end player over a fixed playlist.
///
/// Every control call updates `PlayerState` first and then issues the
/// matching command to the media handle. Play requests are optimistic: the
/// state reads `Playing` before the handle has confirmed anything, and a
/// later `PlayRejected` is logged without rolling the state back.
pub struct PlaylistPlayer<M: MediaHandle> {
    playlist: Playlist,
    media: M,
    state: PlayerState,
    /// Id of the last `set_source` issued. Events for older ids are dropped.
    source: SourceId,
}

impl<M: MediaHandle> PlaylistPlayer<M> {
    /// Mount a player on `media`, starting paused on the first track.
    pub fn new(playlist: Playlist, mut media: M, opts: MountOptions) -> Result<Self, PlayerError> {
        let first = playlist.get(0).ok_or(PlayerError::EmptyPlaylist)?;

        let mut state = PlayerState::new(clamp_volume(opts.volume).unwrap_or(0.0));
        state.panel_visible = opts.panel_visible;
        state.duration = first.duration;

        media.set_loop(opts.track_loop);
        media.set_volume(state.volume);
        media.set_source(0, &first.url);

        info!(tracks = playlist.len(), volume = state.volume, "player mounted");
        Ok(Self {
            playlist,
            media,
            state,
            source: 0,
        })
    }

    pub fn state(&self) -> &PlayerState {
        &self.state
    }

    pub fn tracks(&self) -> &[Track] {
        self.playlist.tracks()
    }

    pub fn current_track(&self) -> &Track {
        // `index` is kept in range by every transition.
        &self.playlist.tracks()[self.state.index]
    }

    pub fn media(&self) -> &M {
        &self.media
    }

    pub fn progress_fraction(&self) -> f64 {
        self.state.progress_fraction()
    }

    pub fn toggle_play_pause(&mut self) {
        match self.state.playback {
            PlaybackState::Paused => self.media.play(),
            PlaybackState::Playing => self.media.pause(),
        }
        self.state.playback = self.state.playback.toggled();
        debug!(playback = ?self.state.playback, "toggled playback");
    }

    pub fn next(&mut self) {
        let len = self.playlist.len();
        self.switch_to((self.state.index + 1) % len);
    }

    pub fn prev(&mut self) {
        let len = self.playlist.len();
        let i = if self.state.index == 0 {
            len - 1
        } else {
            self.state.index - 1
        };
        self.switch_to(i);
    }

    /// Jump to track `index`. Selecting the current track reloads it.
    pub fn select_track(&mut self, index: usize) -> Result<(), PlayerError> {
        let len = self.playlist.len();
        if index >= len {
            return Err(PlayerError::TrackOutOfRange { index, len });
        }
        self.switch_to(index);
        Ok(())
    }

    /// Fallback path for a handle that reports the end of a track.
    pub fn on_track_ended(&mut self) {
        self.next();
    }

    /// Store and apply `volume`, clamped to `[0, 1]`. NaN is ignored.
    pub fn set_volume(&mut self, volume: f32) {
        let Some(v) = clamp_volume(volume) else {
            warn!("ignoring NaN volume");
            return;
        };
        self.state.volume = v;
        self.media.set_volume(v);
    }

    pub fn toggle_panel(&mut self) {
        self.state.panel_visible = !self.state.panel_visible;
    }

    /// Apply one notification from the media handle. Reports about a source
    /// that has since been replaced are ignored.
    pub fn handle_event(&mut self, event: MediaEvent) {
        match event {
            MediaEvent::TimeUpdate { source, .. }
            | MediaEvent::MetadataLoaded { source, .. }
            | MediaEvent::Ended { source }
                if source != self.source =>
            {
                debug!(source, current = self.source, "dropping stale media event");
            }
            MediaEvent::TimeUpdate {
                position, duration, ..
            } => {
                self.state.duration = duration;
                self.state.position = clamp_position(position, duration);
            }
            MediaEvent::MetadataLoaded { duration, .. } => {
                self.state.duration = duration;
                self.state.position = clamp_position(self.state.position, duration);
            }
            MediaEvent::Ended { .. } => self.on_track_ended(),
            MediaEvent::PlayRejected { reason } => {
                warn!(track = self.current_track().id, %reason, "play request rejected");
            }
        }
    }

    fn switch_to(&mut self, index: usize) {
        self.state.index = index;
        self.state.position = Duration::ZERO;
        self.state.duration = self.playlist.tracks()[index].duration;

        self.source = self.source.wrapping_add(1);
        let url = self.playlist.tracks()[index].url.clone();
        self.media.set_source(self.source, &url);
        if self.state.playback.is_playing() {
            self.media.play();
        }
        debug!(index, source = self.source, %url, "switched track");
    }
}

fn clamp_volume(v: f32) -> Option<f32> {
    (!v.is_nan()).then(|| v.clamp(0.0, 1.0))
}

fn clamp_position(position: Duration, duration: Option<Duration>) -> Duration {
    match duration {
        Some(d) => position.min(d),
        None => position,
    }
}
