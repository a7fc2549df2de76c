use crate::catalog::Platform;

/// Side-effecting commands returned by [`update`](crate::update).
///
/// Every transition emits at most one of these; the state machine never
/// has more than one worker in flight.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    /// Spawn the canonical lookup for the entered source URL.
    StartLookup { source_url: String },
    /// Spawn extraction of the chosen platform's link from the canonical
    /// page.
    StartExtraction {
        canonical_url: String,
        platform: Platform,
    },
    /// Write the resolved URL to the system clipboard.
    CopyToClipboard { url: String },
    /// Leave the event loop and restore the terminal.
    Quit,
}
