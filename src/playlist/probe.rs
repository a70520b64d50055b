use std::path::{Path, PathBuf};
use std::time::Duration;

use lofty::prelude::AudioFile;
use tracing::debug;

/// Map a site-absolute media URL onto the asset root.
///
/// `/music/dte.mp3` under `public` becomes `public/music/dte.mp3`. A
/// `file://` URL is taken as a plain filesystem path.
pub fn resolve_media_path(assets_dir: &Path, url: &str) -> PathBuf {
    if let Some(p) = url.strip_prefix("file://") {
        return PathBuf::from(p);
    }

    let rel = url.trim_start_matches('/');
    rel.split('/')
        .filter(|seg| !seg.is_empty() && *seg != "." && *seg != "..")
        .fold(assets_dir.to_path_buf(), |acc, seg| acc.join(seg))
}

/// Read the duration from the file's audio properties, if the file exists
/// and lofty understands it.
pub fn probe_duration(path: &Path) -> Option<Duration> {
    match lofty::read_from_path(path) {
        Ok(tagged) => {
            let d = tagged.properties().duration();
            (!d.is_zero()).then_some(d)
        }
        Err(e) => {
            debug!(path = %path.display(), error = %e, "could not probe duration");
            None
        }
    }
}
