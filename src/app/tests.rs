use super::model::stepped;
use super::*;
use crate::player::{
    MediaEvent, MediaHandle, MountOptions, PlaybackState, PlaylistPlayer, SourceId,
};
use crate::playlist::{Playlist, builtin_tracks};
use std::time::Duration;

#[derive(Default)]
struct NullMedia {
    commands: usize,
    source: SourceId,
}

impl MediaHandle for NullMedia {
    fn set_source(&mut self, source: SourceId, _url: &str) {
        self.source = source;
        self.commands += 1;
    }
    fn play(&mut self) {
        self.commands += 1;
    }
    fn pause(&mut self) {
        self.commands += 1;
    }
    fn set_volume(&mut self, _volume: f32) {
        self.commands += 1;
    }
    fn set_loop(&mut self, _looping: bool) {
        self.commands += 1;
    }
}

fn mount() -> Result<PlaylistPlayer<NullMedia>, crate::player::PlayerError> {
    PlaylistPlayer::new(
        Playlist::new(builtin_tracks()).unwrap(),
        NullMedia::default(),
        MountOptions::default(),
    )
}

fn entered_app() -> App<NullMedia> {
    let mut app = App::new(0.1);
    app.enter(mount).unwrap();
    app
}

#[test]
fn controls_are_ignored_before_entering() {
    let mut app: App<NullMedia> = App::new(0.1);
    assert!(!app.entered);
    assert!(!app.apply(Control::TogglePlayPause));
    app.on_media_event(MediaEvent::Ended { source: 0 });
    assert!(app.player.is_none());
}

#[test]
fn enter_mounts_the_player_once() {
    let mut app = entered_app();
    assert!(app.entered);
    app.apply(Control::Next);

    let mut mounted_again = false;
    app.enter(|| {
        mounted_again = true;
        mount()
    })
    .unwrap();
    assert!(!mounted_again);
    assert_eq!(app.player.as_ref().unwrap().state().index, 1);
}

#[test]
fn failed_mount_keeps_the_gate_closed() {
    let mut app: App<NullMedia> = App::new(0.1);
    let res = app.enter(|| {
        PlaylistPlayer::new(
            Playlist::new(Vec::new()).unwrap(),
            NullMedia::default(),
            MountOptions::default(),
        )
    });
    assert!(res.is_err());
    assert!(!app.entered);
}

#[test]
fn controls_drive_the_player() {
    let mut app = entered_app();
    assert!(app.apply(Control::TogglePlayPause));
    assert!(app.apply(Control::Prev));
    assert!(app.apply(Control::TogglePanel));

    let state = app.player.as_ref().unwrap().state();
    assert_eq!(state.playback, PlaybackState::Playing);
    assert_eq!(state.index, 2);
    assert!(!state.panel_visible);
}

#[test]
fn select_track_out_of_range_is_reported_as_no_op() {
    let mut app = entered_app();
    assert!(app.apply(Control::SelectTrack(1)));
    assert!(!app.apply(Control::SelectTrack(9)));
    assert_eq!(app.player.as_ref().unwrap().state().index, 1);
}

#[test]
fn volume_controls_step_and_saturate() {
    let mut app = entered_app();
    app.apply(Control::VolumeUp);
    let v = app.player.as_ref().unwrap().state().volume;
    assert!((v - 0.4).abs() < 1e-6);

    for _ in 0..20 {
        app.apply(Control::VolumeUp);
    }
    assert_eq!(app.player.as_ref().unwrap().state().volume, 1.0);

    for _ in 0..20 {
        app.apply(Control::VolumeDown);
    }
    assert_eq!(app.player.as_ref().unwrap().state().volume, 0.0);
}

#[test]
fn stepped_snaps_to_the_grid() {
    assert!((stepped(0.33, 0.1) - 0.4).abs() < 1e-6);
    assert!((stepped(0.33, -0.1) - 0.2).abs() < 1e-6);
    assert_eq!(stepped(0.5, 0.0), 0.5);
}

#[test]
fn media_events_are_forwarded_after_entering() {
    let mut app = entered_app();
    let source = app.player.as_ref().unwrap().media().source;
    app.on_media_event(MediaEvent::TimeUpdate {
        source,
        position: Duration::from_secs(3),
        duration: Some(Duration::from_secs(6)),
    });
    let p = app.player.as_ref().unwrap();
    assert!((p.progress_fraction() - 0.5).abs() < 1e-9);
}

#[test]
fn unmount_hands_back_the_player() {
    let mut app = entered_app();
    let player = app.unmount().unwrap();
    assert!(player.media().commands >= 3);
    assert!(app.player.is_none());
}
