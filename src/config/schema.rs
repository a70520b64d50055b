use std::path::PathBuf;

use serde::Deserialize;

/// Top-level application settings loaded from `config.toml`.
///
/// File format: TOML
/// Default path (Linux/XDG): `$XDG_CONFIG_HOME/looptape/config.toml` or `~/.config/looptape/config.toml`
///
/// Precedence (highest wins):
/// 1) Environment variables (prefix `LOOPTAPE__`, `__` as nested separator)
/// 2) Config file (if present)
/// 3) Struct defaults
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub audio: AudioSettings,
    pub ui: UiSettings,
    pub playlist: PlaylistSettings,
    pub log: LogSettings,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct AudioSettings {
    /// Volume applied when the player mounts, in `[0, 1]`.
    pub initial_volume: f32,
    /// Amount `+` / `-` move the volume by.
    pub volume_step: f32,
    /// Restart the current track when it ends instead of advancing.
    pub track_loop: bool,
    /// How often the audio thread reports the playback position (milliseconds).
    pub tick_ms: u64,
    /// Fade-out duration when quitting (milliseconds).
    /// Set to 0 to stop immediately.
    pub quit_fade_out_ms: u64,
}

impl Default for AudioSettings {
    fn default() -> Self {
        Self {
            initial_volume: 0.3,
            volume_step: 0.1,
            track_loop: true,
            tick_ms: 250,
            quit_fade_out_ms: 300,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct UiSettings {
    /// Text shown on the gate screen before the player mounts.
    pub enter_text: String,
    /// Whether the player panel starts expanded.
    pub panel_visible: bool,
}

impl Default for UiSettings {
    fn default() -> Self {
        Self {
            enter_text: "press any key to enter".to_string(),
            panel_visible: true,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct PlaylistSettings {
    /// Directory that site-absolute track URLs are resolved against.
    pub assets_dir: PathBuf,
    /// Replacement playlist. Empty means the built-in three tracks.
    pub tracks: Vec<TrackSettings>,
    /// Fill in unknown durations from the files' audio properties at startup.
    pub probe_durations: bool,
}

impl Default for PlaylistSettings {
    fn default() -> Self {
        Self {
            assets_dir: PathBuf::from("public"),
            tracks: Vec::new(),
            probe_durations: true,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct TrackSettings {
    pub id: u32,
    pub title: String,
    pub artist: String,
    pub url: String,
    /// Known duration in seconds.
    #[serde(default)]
    pub duration_secs: Option<f64>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LogSettings {
    /// Default filter directive; `RUST_LOG` wins when set.
    pub level: String,
    /// Directory for `looptape.log`. Defaults to the XDG state dir.
    pub dir: Option<PathBuf>,
}

impl Default for LogSettings {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            dir: None,
        }
    }
}
