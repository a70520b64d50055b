use std::env;
use std::sync::mpsc;
use std::time::Duration;

use crossterm::execute;
use crossterm::terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode};
use ratatui::{Terminal, backend::CrosstermBackend};
use tracing::info;

use crate::app::App;
use crate::audio::AudioPlayer;
use crate::player::MediaEvent;
use crate::playlist::build_playlist;

mod event_loop;
mod logging;
mod settings;
mod startup;


pub fn run() -> Result<(), Box<dyn std::error::Error>> {
    let mut settings = settings::load_settings();
    settings::apply_args(&mut settings, env::args().nth(1));

    let _log_guard = logging::init(&settings.log);
    info!(assets = %settings.playlist.assets_dir.display(), "starting");

    let playlist = build_playlist(&settings.playlist)?;
    let (events_tx, events_rx) = mpsc::channel::<MediaEvent>();
    let mut app: App<AudioPlayer> = App::new(settings.audio.volume_step);

    enable_raw_mode()?;
    let mut stdout = std::io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let run_result = event_loop::run(
        &mut terminal,
        &settings,
        &mut app,
        &playlist,
        &events_tx,
        &events_rx,
    );

    if let Some(player) = app.unmount() {
        player
            .media()
            .quit_softly(Duration::from_millis(settings.audio.quit_fade_out_ms));
    }

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    info!("bye");
    run_result
}
