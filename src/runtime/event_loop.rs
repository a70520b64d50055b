use std::sync::mpsc::{Receiver, Sender};
use std::time::Duration;

use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use ratatui::{Terminal, backend::CrosstermBackend};
use tracing::debug;

use crate::app::{App, Control};
use crate::audio::AudioPlayer;
use crate::config;
use crate::player::MediaEvent;
use crate::playlist::Playlist;
use crate::runtime::startup::mount_player;
use crate::ui;

/// What a key press means once the player is mounted.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum KeyAction {
    Quit,
    Control(Control),
}

fn is_interrupt(key: &KeyEvent) -> bool {
    key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL)
}

/// Map a key press on the player screen to an action.
pub fn action_for_key(key: &KeyEvent) -> Option<KeyAction> {
    if is_interrupt(key) {
        return Some(KeyAction::Quit);
    }

    let control = match key.code {
        KeyCode::Char('q') | KeyCode::Esc => return Some(KeyAction::Quit),
        KeyCode::Char(' ') | KeyCode::Char('p') => Control::TogglePlayPause,
        KeyCode::Char('l') | KeyCode::Right => Control::Next,
        KeyCode::Char('h') | KeyCode::Left => Control::Prev,
        KeyCode::Char('+') | KeyCode::Char('=') | KeyCode::Up => Control::VolumeUp,
        KeyCode::Char('-') | KeyCode::Down => Control::VolumeDown,
        KeyCode::Char('v') => Control::TogglePanel,
        KeyCode::Char(c @ '1'..='9') => {
            // Digits are 1-based on screen.
            Control::SelectTrack(c as usize - '1' as usize)
        }
        _ => return None,
    };
    Some(KeyAction::Control(control))
}

/// Main terminal event loop: drains media events, draws, and handles input.
/// Returns `Ok(())` when shutdown is requested.
pub fn run(
    terminal: &mut Terminal<CrosstermBackend<std::io::Stdout>>,
    settings: &config::Settings,
    app: &mut App<AudioPlayer>,
    playlist: &Playlist,
    events_tx: &Sender<MediaEvent>,
    events_rx: &Receiver<MediaEvent>,
) -> Result<(), Box<dyn std::error::Error>> {
    loop {
        while let Ok(ev) = events_rx.try_recv() {
            app.on_media_event(ev);
        }

        terminal.draw(|f| ui::draw(f, app, &settings.ui))?;

        if !event::poll(Duration::from_millis(50))? {
            continue;
        }
        let Event::Key(key) = event::read()? else {
            continue;
        };
        if key.kind != KeyEventKind::Press {
            continue;
        }

        if !app.entered {
            if is_interrupt(&key) {
                return Ok(());
            }
            app.enter(|| mount_player(settings, playlist, events_tx))?;
            continue;
        }

        match action_for_key(&key) {
            Some(KeyAction::Quit) => return Ok(()),
            Some(KeyAction::Control(control)) => {
                if !app.apply(control) {
                    debug!(?control, "control ignored");
                }
            }
            None => {}
        }
    }
}
