//! Audio-related small types.
//!
//! Commands sent from the UI thread to the audio thread, and the errors the
//! audio thread can run into while loading or starting a source.

use std::path::PathBuf;

use thiserror::Error;

use crate::player::SourceId;

#[derive(Debug)]
pub enum AudioCmd {
    /// Load the file at `path` as the current source (paused). Events about
    /// it are tagged with `source`.
    SetSource { source: SourceId, path: PathBuf },
    /// Resume or start the current source.
    Play,
    /// Pause the current source.
    Pause,
    /// Set the sink volume, `[0, 1]`.
    SetVolume(f32),
    /// Restart the source on end instead of reporting `Ended`.
    SetLoop(bool),
    /// Quit the audio thread, optionally fading out over `fade_out_ms` milliseconds.
    Quit { fade_out_ms: u64 },
}

#[derive(Debug, Error)]
pub enum AudioError {
    #[error("failed to open {path}: {source}")]
    Open {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to decode {path}: {source}")]
    Decode {
        path: PathBuf,
        #[source]
        source: rodio::decoder::DecoderError,
    },
    #[error("no audio output device: {0}")]
    NoOutput(String),
    #[error("no source loaded")]
    NoSource,
}
