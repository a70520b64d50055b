//! Application module: exposes the page model used by the TUI and runtime.
//!
//! The `App` model lives in `app::model` and holds the enter gate and the
//! mounted playlist player.

mod model;

pub use model::*;

#[cfg(test)]
mod tests;
