use std::time::Duration;

/// Play/pause intent of the player.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Default)]
pub enum PlaybackState {
    #[default]
    Paused,
    Playing,
}

impl PlaybackState {
    pub fn toggled(self) -> Self {
        match self {
            Self::Paused => Self::Playing,
            Self::Playing => Self::Paused,
        }
    }

    pub fn is_playing(self) -> bool {
        self == Self::Playing
    }
}

/// Mutable state owned by a mounted player.
#[derive(Debug, Clone, PartialEq)]
pub struct PlayerState {
    /// Index into the playlist. Always `< playlist.len()`.
    pub index: usize,
    pub playback: PlaybackState,
    /// Always within `[0, 1]`.
    pub volume: f32,
    pub position: Duration,
    /// `None` until the handle (or the track itself) tells us.
    pub duration: Option<Duration>,
    pub panel_visible: bool,
}

impl PlayerState {
    pub fn new(volume: f32) -> Self {
        Self {
            index: 0,
            playback: PlaybackState::Paused,
            volume,
            position: Duration::ZERO,
            duration: None,
            panel_visible: true,
        }
    }

    /// `position / duration`, or `0.0` when the duration is unknown or zero.
    pub fn progress_fraction(&self) -> f64 {
        match self.duration {
            Some(d) if !d.is_zero() => {
                (self.position.as_secs_f64() / d.as_secs_f64()).clamp(0.0, 1.0)
            }
            _ => 0.0,
        }
    }
}
