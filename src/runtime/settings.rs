use std::path::PathBuf;

use crate::config;

pub fn load_settings() -> config::Settings {
    match config::Settings::load() {
        Ok(s) => {
            if let Err(msg) = s.validate() {
                eprintln!("looptape: invalid config, using defaults: {msg}");
                config::Settings::default()
            } else {
                s
            }
        }
        Err(e) => {
            // Config is optional; failures should not prevent the app from starting.
            eprintln!("looptape: failed to load config, using defaults: {e}");
            config::Settings::default()
        }
    }
}

/// A positional argument replaces the configured asset root.
pub fn apply_args(settings: &mut config::Settings, assets_dir: Option<String>) {
    if let Some(dir) = assets_dir.filter(|d| !d.trim().is_empty()) {
        settings.playlist.assets_dir = PathBuf::from(dir);
    }
}
