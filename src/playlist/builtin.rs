use super::model::Track;

/// The three tracks shipped with the page.
pub fn builtin_tracks() -> Vec<Track> {
    vec![
        Track::new(1, "HELLRAISER (feat. OsamaSon)", "Che", "/music/hellraiser.mp3"),
        Track::new(2, "DOE DEER", "Che", "/music/DoeDeer.mp3"),
        Track::new(3, "Down2Earth", "Ken Carson", "/music/dte.mp3"),
    ]
}
