//! rodio-backed media handle.
//!
//! `AudioPlayer` owns a command channel to a dedicated audio thread. The
//! thread owns the output stream and the current sink, and reports progress
//! back to the UI thread as `MediaEvent`s.

mod player;
mod sink;
mod thread;
mod types;

pub use player::AudioPlayer;
