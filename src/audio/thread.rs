use std::path::PathBuf;
use std::sync::mpsc::{Receiver, RecvTimeoutError, Sender};
use std::thread;
use std::thread::JoinHandle;
use std::time::{Duration, Instant};

use rodio::{OutputStream, OutputStreamBuilder, Sink};
use tracing::{debug, info, warn};

use crate::player::{MediaEvent, SourceId};
use crate::playlist::probe_duration;

use super::sink::create_sink;
use super::types::{AudioCmd, AudioError};

/// Everything the audio thread owns: the output stream, the current sink
/// and the bookkeeping needed to report position.
pub(super) struct Engine {
    /// Output stream, or why it could not be opened.
    stream: Result<OutputStream, String>,
    pub(super) sink: Option<Sink>,
    /// Id and path of the current source.
    pub(super) source: Option<(SourceId, PathBuf)>,
    load_error: Option<String>,
    duration: Option<Duration>,
    pub(super) paused: bool,
    pub(super) looping: bool,
    volume: f32,
    // Track start time and accumulated elapsed when paused.
    started_at: Option<Instant>,
    accumulated: Duration,
    events: Sender<MediaEvent>,
}

/// Open the default output device.
fn open_output() -> Result<OutputStream, String> {
    match OutputStreamBuilder::open_default_stream() {
        Ok(mut s) => {
            // rodio logs to stderr when OutputStream is dropped; that would
            // scribble over the TUI.
            s.log_on_drop(false);
            Ok(s)
        }
        Err(e) => {
            warn!(error = %e, "no audio output device, playback requests will be rejected");
            Err(e.to_string())
        }
    }
}

impl Engine {
    pub(super) fn new(stream: Result<OutputStream, String>, events: Sender<MediaEvent>) -> Self {
        Self {
            stream,
            sink: None,
            source: None,
            load_error: None,
            duration: None,
            paused: true,
            looping: false,
            volume: 1.0,
            started_at: None,
            accumulated: Duration::ZERO,
            events,
        }
    }

    fn emit(&self, event: MediaEvent) {
        // The receiver only goes away during shutdown.
        let _ = self.events.send(event);
    }

    fn elapsed(&self) -> Duration {
        self.accumulated + self.started_at.map_or(Duration::ZERO, |st| st.elapsed())
    }

    fn source_id(&self) -> SourceId {
        self.source.as_ref().map_or(0, |(id, _)| *id)
    }

    pub(super) fn load(&mut self, source: SourceId, path: PathBuf) {
        if let Some(s) = self.sink.take() {
            s.stop();
        }
        self.paused = true;
        self.started_at = None;
        self.accumulated = Duration::ZERO;
        self.duration = None;
        self.load_error = None;

        let loaded = match &self.stream {
            Ok(stream) => create_sink(stream, &path),
            Err(reason) => Err(AudioError::NoOutput(reason.clone())),
        };

        match loaded {
            Ok((sink, total)) => {
                sink.set_volume(self.volume);
                self.sink = Some(sink);
                self.duration = total.or_else(|| probe_duration(&path));
                debug!(source, path = %path.display(), duration = ?self.duration, "source loaded");
                self.emit(MediaEvent::MetadataLoaded {
                    source,
                    duration: self.duration,
                });
            }
            Err(e) => {
                warn!(source, path = %path.display(), error = %e, "failed to load source");
                self.load_error = Some(e.to_string());
            }
        }
        self.source = Some((source, path));
    }

    pub(super) fn play(&mut self) {
        let Some(sink) = self.sink.as_ref() else {
            let reason = self
                .load_error
                .clone()
                .unwrap_or_else(|| AudioError::NoSource.to_string());
            self.emit(MediaEvent::PlayRejected { reason });
            return;
        };
        if self.paused {
            sink.play();
            self.paused = false;
            self.started_at = Some(Instant::now());
        }
    }

    fn pause(&mut self) {
        if let Some(sink) = self.sink.as_ref() {
            if !self.paused {
                sink.pause();
                if let Some(st) = self.started_at.take() {
                    self.accumulated += st.elapsed();
                }
                self.paused = true;
            }
        }
    }

    fn set_volume(&mut self, volume: f32) {
        self.volume = volume;
        if let Some(sink) = self.sink.as_ref() {
            sink.set_volume(volume);
        }
    }

    /// Periodic position report and end-of-source handling.
    pub(super) fn tick(&mut self) {
        let drained = match self.sink.as_ref() {
            Some(s) if !self.paused => s.empty(),
            _ => return,
        };
        let source = self.source_id();

        if !drained {
            let position = match self.duration {
                Some(d) => self.elapsed().min(d),
                None => self.elapsed(),
            };
            self.emit(MediaEvent::TimeUpdate {
                source,
                position,
                duration: self.duration,
            });
            return;
        }

        if self.looping {
            if let Some((id, path)) = self.source.clone() {
                debug!(source = id, path = %path.display(), "looping source");
                self.load(id, path);
                self.play();
            }
        } else {
            self.paused = true;
            self.started_at = None;
            self.accumulated = self.duration.unwrap_or_else(|| self.elapsed());
            self.emit(MediaEvent::Ended { source });
        }
    }

    fn quit(&mut self, fade_out_ms: u64) {
        if let Some(s) = self.sink.take() {
            if !self.paused {
                fade_out_sink(&s, self.volume, fade_out_ms);
            }
            s.stop();
        }
    }
}

pub(super) fn fade_steps(from: f32, fade_out_ms: u64) -> Vec<(f32, Duration)> {
    if fade_out_ms == 0 {
        return Vec::new();
    }
    let steps: u64 = 20;
    let step = Duration::from_millis((fade_out_ms / steps).max(1));
    (1..=steps)
        .map(|i| (from * (1.0 - i as f32 / steps as f32), step))
        .collect()
}

fn fade_out_sink(sink: &Sink, from: f32, fade_out_ms: u64) {
    for (volume, wait) in fade_steps(from, fade_out_ms) {
        sink.set_volume(volume);
        thread::sleep(wait);
    }
    sink.set_volume(0.0);
}

/// How long to wait for a command before the next tick is due, or `None`
/// when it already is.
pub(super) fn until_next_tick(since_last: Duration, tick: Duration) -> Option<Duration> {
    tick.checked_sub(since_last).filter(|left| !left.is_zero())
}

pub(super) fn spawn_audio_thread(
    rx: Receiver<AudioCmd>,
    events: Sender<MediaEvent>,
    tick: Duration,
) -> JoinHandle<()> {
    thread::spawn(move || {
        let mut engine = Engine::new(open_output(), events);
        let mut last_tick = Instant::now();

        loop {
            // Ticks are scheduled by time so a steady stream of commands
            // cannot starve position reports.
            if let Some(wait) = until_next_tick(last_tick.elapsed(), tick) {
                match rx.recv_timeout(wait) {
                    Ok(cmd) => match cmd {
                        AudioCmd::SetSource { source, path } => engine.load(source, path),
                        AudioCmd::Play => engine.play(),
                        AudioCmd::Pause => engine.pause(),
                        AudioCmd::SetVolume(v) => engine.set_volume(v),
                        AudioCmd::SetLoop(looping) => engine.looping = looping,
                        AudioCmd::Quit { fade_out_ms } => {
                            engine.quit(fade_out_ms);
                            break;
                        }
                    },
                    Err(RecvTimeoutError::Timeout) => {}
                    Err(RecvTimeoutError::Disconnected) => break,
                }
                continue;
            }

            engine.tick();
            last_tick = Instant::now();
        }
        info!("audio thread stopped");
    })
}
