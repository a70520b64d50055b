use std::time::Duration;

use tracing::{debug, info};

use crate::config::{PlaylistSettings, TrackSettings};

use super::builtin::builtin_tracks;
use super::model::{Playlist, PlaylistError, Track};
use super::probe::{probe_duration, resolve_media_path};

fn track_from_settings(t: &TrackSettings) -> Track {
    let track = Track::new(t.id, &t.title, &t.artist, &t.url);
    // Out-of-range values leave the duration unknown.
    match t
        .duration_secs
        .filter(|secs| *secs > 0.0)
        .and_then(|secs| Duration::try_from_secs_f64(secs).ok())
    {
        Some(d) => track.with_duration(d),
        None => track,
    }
}

/// Build the playlist handed to the player: the configured tracks when any
/// are given, otherwise the built-in ones.
pub fn build_playlist(settings: &PlaylistSettings) -> Result<Playlist, PlaylistError> {
    let mut tracks: Vec<Track> = if settings.tracks.is_empty() {
        builtin_tracks()
    } else {
        settings.tracks.iter().map(track_from_settings).collect()
    };

    if settings.probe_durations {
        for t in tracks.iter_mut().filter(|t| t.duration.is_none()) {
            let path = resolve_media_path(&settings.assets_dir, &t.url);
            t.duration = probe_duration(&path);
            debug!(id = t.id, duration = ?t.duration, "probed track");
        }
    }

    let playlist = Playlist::new(tracks)?;
    info!(tracks = playlist.len(), "playlist ready");
    Ok(playlist)
}
