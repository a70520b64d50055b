//! The fixed playlist: track model, built-in tracks and construction from settings.

mod builtin;
mod load;
mod model;
mod probe;

pub use builtin::builtin_tracks;
pub use load::build_playlist;
pub use model::*;
pub use probe::{probe_duration, resolve_media_path};
