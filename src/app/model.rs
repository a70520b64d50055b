//! Application model: the enter gate and the mounted player.
//!
//! The page starts behind a one-time "enter" gesture. Only after it does
//! the player mount; until then controls and media events are ignored.

use tracing::info;

use crate::player::{MediaEvent, MediaHandle, PlayerError, PlaylistPlayer};

/// A user control, already decoded from whatever input produced it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Control {
    TogglePlayPause,
    Next,
    Prev,
    SelectTrack(usize),
    VolumeUp,
    VolumeDown,
    TogglePanel,
}

/// The page container.
pub struct App<M: MediaHandle> {
    pub entered: bool,
    pub player: Option<PlaylistPlayer<M>>,
    pub volume_step: f32,
}

impl<M: MediaHandle> App<M> {
    pub fn new(volume_step: f32) -> Self {
        Self {
            entered: false,
            player: None,
            volume_step,
        }
    }

    /// Pass the gate, mounting the player with `mount`. Only the first call
    /// does anything.
    pub fn enter<F>(&mut self, mount: F) -> Result<(), PlayerError>
    where
        F: FnOnce() -> Result<PlaylistPlayer<M>, PlayerError>,
    {
        if self.entered {
            return Ok(());
        }
        let player = mount()?;
        self.player = Some(player);
        self.entered = true;
        info!("entered");
        Ok(())
    }

    /// Apply a control to the mounted player. Returns whether anything happened.
    pub fn apply(&mut self, control: Control) -> bool {
        let step = self.volume_step;
        let Some(player) = self.player.as_mut() else {
            return false;
        };

        match control {
            Control::TogglePlayPause => player.toggle_play_pause(),
            Control::Next => player.next(),
            Control::Prev => player.prev(),
            Control::SelectTrack(i) => {
                if player.select_track(i).is_err() {
                    return false;
                }
            }
            Control::VolumeUp => player.set_volume(stepped(player.state().volume, step)),
            Control::VolumeDown => player.set_volume(stepped(player.state().volume, -step)),
            Control::TogglePanel => player.toggle_panel(),
        }
        true
    }

    pub fn on_media_event(&mut self, event: MediaEvent) {
        if let Some(player) = self.player.as_mut() {
            player.handle_event(event);
        }
    }

    /// Unmount the player and hand it back so the caller can shut its handle down.
    pub fn unmount(&mut self) -> Option<PlaylistPlayer<M>> {
        self.player.take()
    }
}

/// Move `volume` by `delta`, snapping to the step grid the way a range
/// slider with that step would.
pub(super) fn stepped(volume: f32, delta: f32) -> f32 {
    let step = delta.abs();
    if step <= 0.0 {
        return volume;
    }
    let snapped = ((volume + delta) / step).round() * step;
    snapped.clamp(0.0, 1.0)
}

