use crate::catalog::CATALOG;
use crate::msg::{Extraction, Key, Msg};
use crate::record::CanonicalRecord;
use crate::state::{Phase, SessionState};
use crate::Effect;

/// Pure transition function: applies a message to the session and returns
/// the next state plus the commands to run (at most one per transition).
pub fn update(mut state: SessionState, msg: Msg) -> (SessionState, Vec<Effect>) {
    if state.phase == Phase::Terminated {
        // Late worker completions and stray keys mean nothing here.
        return (state, Vec::new());
    }

    let effects = match msg {
        Msg::Key(Key::Interrupt) => {
            state.phase = Phase::Terminated;
            vec![Effect::Quit]
        }
        Msg::Key(key) => handle_key(&mut state, key),
        Msg::Tick => Vec::new(),
        Msg::LookupDone(result) => handle_lookup_done(&mut state, result),
        Msg::ExtractDone(result) => handle_extract_done(&mut state, result),
    };

    (state, effects)
}

fn handle_key(state: &mut SessionState, key: Key) -> Vec<Effect> {
    match state.phase {
        Phase::AwaitingInput => match key {
            Key::Char(c) => {
                state.input.push(c);
                Vec::new()
            }
            Key::Backspace => {
                state.input.pop();
                Vec::new()
            }
            Key::Enter => {
                // An empty buffer swallows the submit.
                if !state.input.trim().is_empty() {
                    state.phase = Phase::ChoosingPlatform;
                }
                Vec::new()
            }
            _ => Vec::new(),
        },
        Phase::ChoosingPlatform => match key {
            Key::Up => {
                state.cursor = state.cursor.saturating_sub(1);
                Vec::new()
            }
            Key::Down => {
                // Clamped at the last entry, no wraparound.
                if state.cursor + 1 < CATALOG.len() {
                    state.cursor += 1;
                }
                Vec::new()
            }
            Key::Enter => {
                state.platform = CATALOG[state.cursor];
                state.phase = Phase::LookingUp;
                vec![Effect::StartLookup {
                    source_url: state.input.trim().to_string(),
                }]
            }
            _ => Vec::new(),
        },
        // Only Interrupt (handled above) gets out of the in-flight phases.
        Phase::LookingUp | Phase::Extracting => Vec::new(),
        Phase::Resolved | Phase::Failed => {
            state.phase = Phase::Terminated;
            vec![Effect::Quit]
        }
        Phase::Terminated => Vec::new(),
    }
}

fn handle_lookup_done(
    state: &mut SessionState,
    result: Result<CanonicalRecord, String>,
) -> Vec<Effect> {
    if state.phase != Phase::LookingUp {
        // Completion for an operation this phase never spawned.
        return Vec::new();
    }
    match result {
        Ok(record) => {
            if !record.is_available(state.platform.selector) {
                // The service already says this release is not on the
                // chosen platform; skip the pointless page fetch.
                state.record = Some(record);
                state.phase = Phase::Resolved;
                return Vec::new();
            }
            let canonical_url = record.url.clone();
            state.record = Some(record);
            state.phase = Phase::Extracting;
            vec![Effect::StartExtraction {
                canonical_url,
                platform: state.platform,
            }]
        }
        Err(cause) => {
            state.last_error = Some(cause);
            state.phase = Phase::Failed;
            Vec::new()
        }
    }
}

fn handle_extract_done(
    state: &mut SessionState,
    result: Result<Extraction, String>,
) -> Vec<Effect> {
    if state.phase != Phase::Extracting {
        return Vec::new();
    }
    match result {
        Ok(Extraction::Found(url)) => {
            state.target = Some(url.clone());
            state.phase = Phase::Resolved;
            vec![Effect::CopyToClipboard { url }]
        }
        Ok(Extraction::NotFound) => {
            state.phase = Phase::Resolved;
            Vec::new()
        }
        Err(cause) => {
            state.last_error = Some(cause);
            state.phase = Phase::Failed;
            Vec::new()
        }
    }
}
