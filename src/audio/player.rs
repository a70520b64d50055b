use std::path::PathBuf;
use std::sync::Mutex;
use std::sync::mpsc::{self, Sender};
use std::thread::JoinHandle;
use std::time::Duration;

use tracing::debug;

use crate::config::AudioSettings;
use crate::player::{MediaEvent, MediaHandle, SourceId};
use crate::playlist::resolve_media_path;

use super::thread::spawn_audio_thread;
use super::types::AudioCmd;

/// `MediaHandle` backed by a rodio sink living on its own thread.
///
/// Commands are forwarded over a channel; the thread answers with
/// `MediaEvent`s on the sender handed to `AudioPlayer::new`.
pub struct AudioPlayer {
    tx: Sender<AudioCmd>,
    assets_dir: PathBuf,
    join: Mutex<Option<JoinHandle<()>>>,
}

impl AudioPlayer {
    pub fn new(
        assets_dir: PathBuf,
        audio_settings: &AudioSettings,
        events: Sender<MediaEvent>,
    ) -> Self {
        let (tx, rx) = mpsc::channel::<AudioCmd>();
        let tick = Duration::from_millis(audio_settings.tick_ms.max(1));
        let audio_handle = spawn_audio_thread(rx, events, tick);

        Self {
            tx,
            assets_dir,
            join: Mutex::new(Some(audio_handle)),
        }
    }

    #[cfg(test)]
    pub(super) fn detached(assets_dir: PathBuf, tx: Sender<AudioCmd>) -> Self {
        Self {
            tx,
            assets_dir,
            join: Mutex::new(None),
        }
    }

    fn send(&self, cmd: AudioCmd) {
        if let Err(e) = self.tx.send(cmd) {
            debug!(cmd = ?e.0, "audio thread is gone, dropping command");
        }
    }

    /// Stop playback, fading out over `fade_out`, and wait for the audio thread.
    pub fn quit_softly(&self, fade_out: Duration) {
        self.send(AudioCmd::Quit {
            fade_out_ms: fade_out.as_millis() as u64,
        });

        if let Ok(mut j) = self.join.lock() {
            if let Some(h) = j.take() {
                let _ = h.join();
            }
        }
    }
}

impl MediaHandle for AudioPlayer {
    fn set_source(&mut self, source: SourceId, url: &str) {
        let path = resolve_media_path(&self.assets_dir, url);
        self.send(AudioCmd::SetSource { source, path });
    }

    fn play(&mut self) {
        self.send(AudioCmd::Play);
    }

    fn pause(&mut self) {
        self.send(AudioCmd::Pause);
    }

    fn set_volume(&mut self, volume: f32) {
        self.send(AudioCmd::SetVolume(volume));
    }

    fn set_loop(&mut self, looping: bool) {
        self.send(AudioCmd::SetLoop(looping));
    }
}
