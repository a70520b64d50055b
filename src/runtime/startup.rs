use std::sync::mpsc::Sender;

use crate::audio::AudioPlayer;
use crate::config;
use crate::player::{MediaEvent, MountOptions, PlayerError, PlaylistPlayer};
use crate::playlist::Playlist;

/// Mount options derived from settings.
pub fn mount_options(settings: &config::Settings) -> MountOptions {
    MountOptions {
        volume: settings.audio.initial_volume,
        track_loop: settings.audio.track_loop,
        panel_visible: settings.ui.panel_visible,
    }
}

/// Spawn the audio thread and mount a player on it.
pub fn mount_player(
    settings: &config::Settings,
    playlist: &Playlist,
    events: &Sender<MediaEvent>,
) -> Result<PlaylistPlayer<AudioPlayer>, PlayerError> {
    let audio = AudioPlayer::new(
        settings.playlist.assets_dir.clone(),
        &settings.audio,
        events.clone(),
    );
    PlaylistPlayer::new(playlist.clone(), audio, mount_options(settings))
}
