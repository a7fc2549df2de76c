use std::sync::Once;

use whip_core::{update, view, Extraction, Key, Msg, Phase, SessionState, CATALOG};

fn init_logging() {
    static INIT: Once = Once::new();
    INIT.call_once(whip_logging::initialize_for_tests);
}

fn resolved(target: Option<&str>) -> SessionState {
    let state = SessionState::with_seed(Some("https://tidal.com/track/1"), Some("spotify"));
    let (state, _) = update(state, Msg::Key(Key::Enter));
    let (state, _) = update(
        state,
        Msg::LookupDone(Ok(whip_core::CanonicalRecord {
            url: "https://songwhip.com/release/abc".to_string(),
            kind: whip_core::RecordKind::Track,
            name: "Resistance".to_string(),
            available: Vec::new(),
        })),
    );
    let outcome = match target {
        Some(url) => Extraction::Found(url.to_string()),
        None => Extraction::NotFound,
    };
    let (state, _) = update(state, Msg::ExtractDone(Ok(outcome)));
    assert_eq!(state.phase(), Phase::Resolved);
    state
}

#[test]
fn prompt_shows_placeholder_until_text_is_entered() {
    init_logging();
    let state = SessionState::new();
    let rendered = view(&state, "");
    assert!(rendered.contains("Enter a track or album URL"));
    assert!(rendered.contains("https://open.spotify.com/track/4uLU6hMCjMI75M1A2tKUQC"));

    let (state, _) = update(state, Msg::Key(Key::Char('h')));
    let rendered = view(&state, "");
    assert!(rendered.contains("> h"));
    assert!(!rendered.contains("4uLU6hMCjMI75M1A2tKUQC"));
}

#[test]
fn chooser_marks_the_cursor_row_and_shows_help() {
    init_logging();
    let state = SessionState::with_seed(Some("https://example.com"), None);
    let rendered = view(&state, "");
    assert!(rendered.contains("Which platform do you want a link for?"));
    // First entry highlighted, with its help text.
    assert!(rendered.contains("> Songwhip: Get a Songwhip URL"));
    assert!(rendered.contains("  Spotify\n"));

    let (state, _) = update(state, Msg::Key(Key::Down));
    let rendered = view(&state, "");
    assert!(rendered.contains("> Spotify"));
    assert!(!rendered.contains("> Songwhip"));
}

#[test]
fn chooser_lists_every_catalog_entry() {
    init_logging();
    let state = SessionState::with_seed(Some("https://example.com"), None);
    let rendered = view(&state, "");
    for platform in &CATALOG {
        assert!(rendered.contains(platform.title), "missing {}", platform.title);
    }
}

#[test]
fn in_flight_phases_show_the_spinner_frame() {
    init_logging();
    let state = SessionState::with_seed(Some("https://example.com"), Some("tidal"));
    let (state, _) = update(state, Msg::Key(Key::Enter));
    assert_eq!(
        view(&state, "\u{280b}"),
        "\u{280b} Getting Songwhip data...\n"
    );

    let (state, _) = update(
        state,
        Msg::LookupDone(Ok(whip_core::CanonicalRecord {
            url: "https://songwhip.com/release/abc".to_string(),
            kind: whip_core::RecordKind::Album,
            name: "Resistance".to_string(),
            available: Vec::new(),
        })),
    );
    assert_eq!(view(&state, "\u{2819}"), "\u{2819} Getting Tidal URL...\n");
}

#[test]
fn resolved_view_shows_url_and_clipboard_note() {
    init_logging();
    let state = resolved(Some("https://open.spotify.com/track/xyz"));
    let rendered = view(&state, "");
    assert!(rendered.contains("Spotify"));
    assert!(rendered.contains("https://open.spotify.com/track/xyz"));
    assert!(rendered.contains("copied to your clipboard"));
    assert!(rendered.contains("press any key to quit"));
}

#[test]
fn not_found_view_references_the_platform_title() {
    init_logging();
    let state = resolved(None);
    let rendered = view(&state, "");
    assert!(rendered.contains("Could not find a URL for Spotify"));
    assert!(!rendered.contains("clipboard"));
}

#[test]
fn failed_view_is_a_generic_message() {
    init_logging();
    let state = SessionState::with_seed(Some("https://example.com"), Some("spotify"));
    let (state, _) = update(state, Msg::Key(Key::Enter));
    let (state, _) = update(state, Msg::LookupDone(Err("dns failure".to_string())));
    let rendered = view(&state, "");
    assert!(rendered.contains("We've encountered an error"));
    // The cause stays in the log, never on screen.
    assert!(!rendered.contains("dns failure"));
}

#[test]
fn terminated_renders_nothing() {
    init_logging();
    let (state, _) = update(SessionState::new(), Msg::Key(Key::Interrupt));
    assert_eq!(view(&state, ""), "");
}

#[test]
fn view_is_idempotent_for_the_same_state() {
    init_logging();
    let state = resolved(Some("https://open.spotify.com/track/xyz"));
    assert_eq!(view(&state, "\u{280b}"), view(&state, "\u{280b}"));
}
