use std::fmt::Write;

use crate::catalog::CATALOG;
use crate::state::{Phase, SessionState};

const PLACEHOLDER: &str = "https://open.spotify.com/track/4uLU6hMCjMI75M1A2tKUQC";

/// Renders the session as displayed text, one branch per phase.
///
/// Pure and idempotent: the same state and spinner frame always produce
/// the same output. The spinner glyph is an argument so animation stays
/// the terminal driver's concern.
pub fn view(state: &SessionState, spinner: &str) -> String {
    match state.phase() {
        Phase::AwaitingInput => {
            let line = if state.input().is_empty() {
                PLACEHOLDER.to_string()
            } else {
                format!("{}\u{2588}", state.input())
            };
            format!(
                "Enter a track or album URL from any supported platform...\n\n> {line}\n\n(ctrl+c or esc to quit)\n"
            )
        }
        Phase::ChoosingPlatform => platform_chooser(state.cursor()),
        Phase::LookingUp => format!("{spinner} Getting Songwhip data...\n"),
        Phase::Extracting => {
            format!("{spinner} Getting {} URL...\n", state.platform().title)
        }
        Phase::Resolved => match state.target() {
            Some(url) => format!(
                "Here's your {} URL! The link has been copied to your clipboard.\n\n{url}\n\n(press any key to quit)\n",
                state.platform().title
            ),
            None => format!(
                "Oh no! Could not find a URL for {} :(\n\n(press any key to quit)\n",
                state.platform().title
            ),
        },
        Phase::Failed => {
            "Uh oh! We've encountered an error :(\n\n(press any key to quit)\n".to_string()
        }
        Phase::Terminated => String::new(),
    }
}

fn platform_chooser(cursor: usize) -> String {
    let mut out = String::from("Which platform do you want a link for?\n\n");
    for (index, platform) in CATALOG.iter().enumerate() {
        let marker = if cursor == index { '>' } else { ' ' };
        let _ = write!(out, "{marker} {}", platform.title);
        if cursor == index {
            if let Some(help) = platform.help {
                let _ = write!(out, ": {help}");
            }
        }
        out.push('\n');
    }
    out.push_str("\nPress ctrl+c or esc to quit.\n");
    out
}
