//! UI rendering helpers for the terminal user interface.
//!
//! This module renders the enter gate and the floating player panel using `ratatui`.

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style, Stylize},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Gauge, Padding, Paragraph, Wrap},
};
use std::{collections::BTreeMap, sync::LazyLock, time::Duration};

use crate::app::App;
use crate::config::UiSettings;
use crate::player::{MediaHandle, PlaylistPlayer};

const PANEL_WIDTH: u16 = 48;
const PANEL_HEIGHT: u16 = 12;

static CONTROLS_MAP: LazyLock<BTreeMap<&'static str, &'static str>> = LazyLock::new(|| {
    let mut map = BTreeMap::new();
    map.insert("space/p", "play/pause");
    map.insert("h/l", "prev/next");
    map.insert("1-9", "jump to track");
    map.insert("-/+", "volume");
    map.insert("v", "show/hide player");
    map.insert("q", "quit");
    map
});

/// Render the controls help text.
fn controls_text() -> String {
    // Keep the rendered order stable and human-friendly.
    let order = ["space/p", "h/l", "1-9", "-/+", "v", "q"];
    order
        .iter()
        .filter_map(|k| CONTROLS_MAP.get(k).map(|v| format!("[{k}] {v}")))
        .collect::<Vec<String>>()
        .join(" | ")
}

/// Format a `Duration` as `m:ss`.
fn format_time(d: Duration) -> String {
    let secs = d.as_secs();
    format!("{}:{:02}", secs / 60, secs % 60)
}

/// One dot per track, the current one filled.
fn playlist_dots(len: usize, current: usize) -> String {
    (0..len)
        .map(|i| if i == current { "●" } else { "○" })
        .collect::<Vec<_>>()
        .join(" ")
}

fn volume_percent(volume: f32) -> u32 {
    (volume.clamp(0.0, 1.0) * 100.0).round() as u32
}

fn volume_bar(volume: f32, width: usize) -> String {
    let filled = ((volume.clamp(0.0, 1.0) * width as f32).round() as usize).min(width);
    format!("{}{}", "━".repeat(filled), "─".repeat(width - filled))
}

/// Rectangle of the given size anchored to the bottom-right corner of `r`.
fn bottom_right_rect(width: u16, height: u16, r: Rect) -> Rect {
    let width = width.min(r.width);
    let height = height.min(r.height);
    Rect {
        x: r.x + r.width.saturating_sub(width + 1).min(r.width - width),
        y: r.y + r.height.saturating_sub(height),
        width,
        height,
    }
}

/// Compute a centered rectangle with given size constrained to `r`.
fn centered_rect_sized(width: u16, height: u16, r: Rect) -> Rect {
    let width = width.min(r.width);
    let height = height.min(r.height);

    let x = r.x + (r.width.saturating_sub(width) / 2);
    let y = r.y + (r.height.saturating_sub(height) / 2);
    Rect {
        x,
        y,
        width,
        height,
    }
}

/// Render the entire UI into the provided `frame`.
pub fn draw<M: MediaHandle>(frame: &mut Frame, app: &App<M>, ui_settings: &UiSettings) {
    let area = frame.area();

    let Some(player) = app.player.as_ref().filter(|_| app.entered) else {
        draw_gate(frame, area, &ui_settings.enter_text);
        return;
    };

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(1), Constraint::Length(3)])
        .split(area);

    if player.state().panel_visible {
        let panel = bottom_right_rect(PANEL_WIDTH, PANEL_HEIGHT, chunks[0]);
        draw_panel(frame, panel, player);
    } else {
        let hint = bottom_right_rect(22, 3, chunks[0]);
        frame.render_widget(Clear, hint);
        frame.render_widget(
            Paragraph::new("♪  [v] show player")
                .alignment(Alignment::Center)
                .block(Block::default().borders(Borders::ALL)),
            hint,
        );
    }

    let footer = Paragraph::new(controls_text())
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(" controls ")
                .padding(Padding {
                    left: 1,
                    right: 0,
                    top: 0,
                    bottom: 0,
                }),
        )
        .wrap(Wrap { trim: true });
    frame.render_widget(footer, chunks[1]);
}

fn draw_gate(frame: &mut Frame, area: Rect, text: &str) {
    let width = (text.chars().count() as u16).saturating_add(6);
    let rect = centered_rect_sized(width, 3, area);
    let gate = Paragraph::new(text)
        .alignment(Alignment::Center)
        .slow_blink()
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(gate, rect);
}

fn draw_panel<M: MediaHandle>(frame: &mut Frame, area: Rect, player: &PlaylistPlayer<M>) {
    frame.render_widget(Clear, area);

    let block = Block::default()
        .borders(Borders::ALL)
        .title(" now playing ")
        .padding(Padding::horizontal(1));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // title
            Constraint::Length(1), // artist
            Constraint::Length(1), // times
            Constraint::Length(1), // progress
            Constraint::Length(1),
            Constraint::Length(1), // transport
            Constraint::Length(1), // volume
            Constraint::Length(1), // dots
            Constraint::Min(0),
        ])
        .split(inner);

    let state = player.state();
    let track = player.current_track();

    frame.render_widget(
        Paragraph::new(track.title.as_str()).style(Style::default().add_modifier(Modifier::BOLD)),
        rows[0],
    );
    frame.render_widget(Paragraph::new(track.artist.as_str()).dim(), rows[1]);

    let elapsed = format_time(state.position);
    let total = format_time(state.duration.unwrap_or(Duration::ZERO));
    let gap = (rows[2].width as usize).saturating_sub(elapsed.len() + total.len());
    let times = Line::from(vec![
        Span::raw(elapsed),
        Span::raw(" ".repeat(gap)),
        Span::raw(total).dim(),
    ]);
    frame.render_widget(Paragraph::new(times), rows[2]);

    frame.render_widget(
        Gauge::default()
            .ratio(player.progress_fraction())
            .label("")
            .use_unicode(true),
        rows[3],
    );

    let play_symbol = if state.playback.is_playing() { "⏸" } else { "▶" };
    let transport = Line::from(vec![
        Span::raw("⏮"),
        Span::raw("     "),
        Span::styled(play_symbol, Style::default().add_modifier(Modifier::BOLD)),
        Span::raw("     "),
        Span::raw("⏭"),
    ]);
    frame.render_widget(
        Paragraph::new(transport).alignment(Alignment::Center),
        rows[5],
    );

    let bar_width = (rows[6].width as usize).saturating_sub(10).max(4);
    let volume = format!(
        "vol {} {:>3}",
        volume_bar(state.volume, bar_width),
        volume_percent(state.volume)
    );
    frame.render_widget(Paragraph::new(volume), rows[6]);

    frame.render_widget(
        Paragraph::new(playlist_dots(player.tracks().len(), state.index))
            .alignment(Alignment::Center),
        rows[7],
    );
}
