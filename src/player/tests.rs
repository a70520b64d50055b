use super::*;
use crate::playlist::{Playlist, Track, builtin_tracks};
use std::time::Duration;

#[derive(Debug, Clone, PartialEq)]
enum Call {
    Source(String),
    Play,
    Pause,
    Volume(f32),
    Loop(bool),
}

#[derive(Default)]
struct RecordingMedia {
    calls: Vec<Call>,
    /// Id passed with the most recent `set_source`.
    source: SourceId,
}

impl RecordingMedia {
    fn plays(&self) -> usize {
        self.calls.iter().filter(|c| **c == Call::Play).count()
    }

    fn last_source(&self) -> Option<&str> {
        self.calls.iter().rev().find_map(|c| match c {
            Call::Source(u) => Some(u.as_str()),
            _ => None,
        })
    }
}

impl MediaHandle for RecordingMedia {
    fn set_source(&mut self, source: SourceId, url: &str) {
        self.source = source;
        self.calls.push(Call::Source(url.to_string()));
    }
    fn play(&mut self) {
        self.calls.push(Call::Play);
    }
    fn pause(&mut self) {
        self.calls.push(Call::Pause);
    }
    fn set_volume(&mut self, volume: f32) {
        self.calls.push(Call::Volume(volume));
    }
    fn set_loop(&mut self, looping: bool) {
        self.calls.push(Call::Loop(looping));
    }
}

fn player() -> PlaylistPlayer<RecordingMedia> {
    let playlist = Playlist::new(builtin_tracks()).unwrap();
    PlaylistPlayer::new(playlist, RecordingMedia::default(), MountOptions::default()).unwrap()
}

fn fixture(n: u32) -> PlaylistPlayer<RecordingMedia> {
    let tracks = (1..=n)
        .map(|i| Track::new(i, &format!("t{i}"), "a", &format!("/t{i}.mp3")))
        .collect();
    let playlist = Playlist::new(tracks).unwrap();
    PlaylistPlayer::new(playlist, RecordingMedia::default(), MountOptions::default()).unwrap()
}

#[test]
fn mount_starts_paused_on_first_track_and_configures_handle() {
    let p = player();
    assert_eq!(p.state().index, 0);
    assert_eq!(p.state().playback, PlaybackState::Paused);
    assert!(p.state().panel_visible);
    assert_eq!(
        p.media().calls,
        vec![
            Call::Loop(true),
            Call::Volume(0.3),
            Call::Source("/music/hellraiser.mp3".into()),
        ]
    );
}

#[test]
fn mount_rejects_empty_playlist() {
    let playlist = Playlist::new(Vec::new()).unwrap();
    let err = PlaylistPlayer::new(playlist, RecordingMedia::default(), MountOptions::default())
        .err()
        .unwrap();
    assert_eq!(err, PlayerError::EmptyPlaylist);
}

#[test]
fn next_twice_then_wraps() {
    let mut p = player();
    p.next();
    p.next();
    assert_eq!(p.state().index, 2);
    assert_eq!(p.current_track().title, "Down2Earth");

    p.next();
    assert_eq!(p.state().index, 0);
}

#[test]
fn prev_from_first_wraps_to_last() {
    let mut p = player();
    p.prev();
    assert_eq!(p.state().index, 2);
    assert_eq!(p.media().last_source(), Some("/music/dte.mp3"));
}

#[test]
fn arbitrary_navigation_stays_in_bounds() {
    for n in 1..=5u32 {
        let mut p = fixture(n);
        let mut expected: usize = 0;
        // A fixed but irregular sequence of moves.
        for step in 0..60usize {
            if step % 3 == 0 || step % 7 == 0 {
                p.prev();
                expected = (expected + n as usize - 1) % n as usize;
            } else {
                p.next();
                expected = (expected + 1) % n as usize;
            }
            assert!(p.state().index < n as usize);
            assert_eq!(p.state().index, expected);
        }
    }
}

#[test]
fn navigation_keeps_play_state_and_reissues_play_only_when_playing() {
    let mut p = player();
    p.next();
    assert_eq!(p.media().plays(), 0);
    assert_eq!(p.state().playback, PlaybackState::Paused);

    p.toggle_play_pause();
    assert_eq!(p.media().plays(), 1);

    p.next();
    assert_eq!(p.state().playback, PlaybackState::Playing);
    assert_eq!(p.media().plays(), 2);
    assert_eq!(
        &p.media().calls[p.media().calls.len() - 2..],
        &[Call::Source("/music/dte.mp3".into()), Call::Play]
    );
}

#[test]
fn toggle_play_pause_flips_and_double_toggle_is_identity() {
    let mut p = player();
    p.toggle_play_pause();
    assert_eq!(p.state().playback, PlaybackState::Playing);
    p.toggle_play_pause();
    assert_eq!(p.state().playback, PlaybackState::Paused);
    assert_eq!(p.media().calls.last(), Some(&Call::Pause));
}

#[test]
fn toggle_while_paused_plays_current_track_url() {
    let mut p = player();
    p.toggle_play_pause();
    assert_eq!(p.state().playback, PlaybackState::Playing);
    assert_eq!(p.media().calls.last(), Some(&Call::Play));
    assert_eq!(p.media().last_source(), Some(p.current_track().url.as_str()));
}

#[test]
fn set_volume_stores_and_applies_exact_value() {
    for v in [0.0f32, 0.1, 0.25, 0.5, 0.75, 1.0] {
        let mut p = player();
        p.set_volume(v);
        assert_eq!(p.state().volume, v);
        assert_eq!(p.media().calls.last(), Some(&Call::Volume(v)));
    }
}

#[test]
fn set_volume_while_paused_issues_no_play() {
    let mut p = player();
    p.set_volume(0.75);
    assert_eq!(p.state().volume, 0.75);
    assert_eq!(p.media().plays(), 0);
}

#[test]
fn set_volume_clamps_and_ignores_nan() {
    let mut p = player();
    p.set_volume(1.7);
    assert_eq!(p.state().volume, 1.0);
    p.set_volume(-0.2);
    assert_eq!(p.state().volume, 0.0);

    let before = p.media().calls.len();
    p.set_volume(f32::NAN);
    assert_eq!(p.state().volume, 0.0);
    assert_eq!(p.media().calls.len(), before);
}

#[test]
fn select_track_sets_exact_index_and_reloads_current() {
    let mut p = player();
    p.select_track(1).unwrap();
    assert_eq!(p.state().index, 1);

    let before = p.media().calls.len();
    p.select_track(1).unwrap();
    assert_eq!(p.state().index, 1);
    assert_eq!(
        &p.media().calls[before..],
        &[Call::Source("/music/DoeDeer.mp3".into())]
    );
}

#[test]
fn select_track_out_of_range_changes_nothing() {
    let mut p = player();
    let before = p.media().calls.len();
    assert_eq!(
        p.select_track(3),
        Err(PlayerError::TrackOutOfRange { index: 3, len: 3 })
    );
    assert_eq!(p.state().index, 0);
    assert_eq!(p.media().calls.len(), before);
}

#[test]
fn track_ended_advances_like_next() {
    for start in 0..3 {
        let mut a = player();
        let mut b = player();
        a.select_track(start).unwrap();
        b.select_track(start).unwrap();

        a.next();
        let source = b.media().source;
        b.handle_event(MediaEvent::Ended { source });
        assert_eq!(a.state(), b.state());
        assert_eq!(a.media().calls, b.media().calls);
    }
}

#[test]
fn time_updates_are_stored_verbatim_and_drive_progress() {
    let mut p = player();
    assert_eq!(p.progress_fraction(), 0.0);

    p.handle_event(MediaEvent::TimeUpdate {
        source: p.media().source,
        position: Duration::from_secs(30),
        duration: Some(Duration::from_secs(120)),
    });
    assert_eq!(p.state().position, Duration::from_secs(30));
    assert_eq!(p.state().duration, Some(Duration::from_secs(120)));
    assert!((p.progress_fraction() - 0.25).abs() < 1e-9);
}

#[test]
fn progress_is_zero_for_unknown_or_zero_duration() {
    let mut p = player();
    p.handle_event(MediaEvent::TimeUpdate {
        source: p.media().source,
        position: Duration::from_secs(5),
        duration: None,
    });
    assert_eq!(p.progress_fraction(), 0.0);

    p.handle_event(MediaEvent::MetadataLoaded {
        source: p.media().source,
        duration: Some(Duration::ZERO),
    });
    assert_eq!(p.progress_fraction(), 0.0);
}

#[test]
fn switching_tracks_resets_position_and_seeds_known_duration() {
    let tracks = vec![
        Track::new(1, "a", "x", "/a.mp3"),
        Track::new(2, "b", "x", "/b.mp3").with_duration(Duration::from_secs(200)),
    ];
    let mut p = PlaylistPlayer::new(
        Playlist::new(tracks).unwrap(),
        RecordingMedia::default(),
        MountOptions::default(),
    )
    .unwrap();
    p.handle_event(MediaEvent::TimeUpdate {
        source: p.media().source,
        position: Duration::from_secs(12),
        duration: Some(Duration::from_secs(100)),
    });

    p.next();
    assert_eq!(p.state().position, Duration::ZERO);
    assert_eq!(p.state().duration, Some(Duration::from_secs(200)));

    p.next();
    assert_eq!(p.state().duration, None);
}

#[test]
fn play_rejection_keeps_optimistic_state() {
    let mut p = player();
    p.toggle_play_pause();
    p.handle_event(MediaEvent::PlayRejected {
        reason: "no output device".into(),
    });
    assert_eq!(p.state().playback, PlaybackState::Playing);
    assert_eq!(p.state().index, 0);
}

#[test]
fn toggle_panel_does_not_touch_playback() {
    let mut p = player();
    let calls = p.media().calls.len();
    p.toggle_panel();
    assert!(!p.state().panel_visible);
    p.toggle_panel();
    assert!(p.state().panel_visible);
    assert_eq!(p.media().calls.len(), calls);
    assert_eq!(p.state().playback, PlaybackState::Paused);
}

#[test]
fn mount_options_apply_clamped_volume_and_panel_flag() {
    let playlist = Playlist::new(builtin_tracks()).unwrap();
    let opts = MountOptions {
        volume: 4.0,
        track_loop: false,
        panel_visible: false,
    };
    let p = PlaylistPlayer::new(playlist, RecordingMedia::default(), opts).unwrap();
    assert_eq!(p.state().volume, 1.0);
    assert!(!p.state().panel_visible);
    assert_eq!(p.media().calls[0], Call::Loop(false));
}

#[test]
fn each_source_switch_gets_a_fresh_id() {
    let mut p = player();
    let mounted = p.media().source;
    p.next();
    let after_next = p.media().source;
    p.select_track(1).unwrap();
    assert_ne!(mounted, after_next);
    assert_ne!(after_next, p.media().source);
}

#[test]
fn stale_end_of_track_does_not_advance_twice() {
    let mut p = player();
    p.toggle_play_pause();
    let old = p.media().source;

    // The old source ended while the user was already skipping ahead.
    p.next();
    p.handle_event(MediaEvent::Ended { source: old });
    assert_eq!(p.state().index, 1);

    let current = p.media().source;
    p.handle_event(MediaEvent::Ended { source: current });
    assert_eq!(p.state().index, 2);
}

#[test]
fn stale_progress_reports_are_ignored() {
    let mut p = player();
    let old = p.media().source;
    p.next();

    p.handle_event(MediaEvent::TimeUpdate {
        source: old,
        position: Duration::from_secs(40),
        duration: Some(Duration::from_secs(60)),
    });
    p.handle_event(MediaEvent::MetadataLoaded {
        source: old,
        duration: Some(Duration::from_secs(60)),
    });
    assert_eq!(p.state().position, Duration::ZERO);
    assert_eq!(p.state().duration, None);
}
