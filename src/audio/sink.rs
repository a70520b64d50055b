//! Utilities for creating `rodio` sinks from media files.
//!
//! The helper here encapsulates opening/decoding a file and preparing a
//! paused `Sink`, reporting the decoder's idea of the total duration.

use std::fs::File;
use std::io::BufReader;
use std::path::Path;
use std::time::Duration;

use rodio::{Decoder, OutputStream, Sink, Source};

use super::types::AudioError;

/// Create a paused `Sink` playing the file at `path`.
pub(super) fn create_sink(
    handle: &OutputStream,
    path: &Path,
) -> Result<(Sink, Option<Duration>), AudioError> {
    let source = open_source(path)?;
    let total = source.total_duration();

    let sink = Sink::connect_new(handle.mixer());
    sink.append(source);
    sink.pause();
    Ok((sink, total))
}

pub(super) fn open_source(path: &Path) -> Result<Decoder<BufReader<File>>, AudioError> {
    let file = File::open(path).map_err(|source| AudioError::Open {
        path: path.to_path_buf(),
        source,
    })?;

    Decoder::new(BufReader::new(file)).map_err(|source| AudioError::Decode {
        path: path.to_path_buf(),
        source,
    })
}
