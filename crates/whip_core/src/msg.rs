use crate::record::CanonicalRecord;

/// Key events after normalization by the terminal driver.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    Char(char),
    Backspace,
    Enter,
    Up,
    Down,
    /// Esc or the interrupt signal. Both quit from every phase.
    Interrupt,
    /// Any other key. Meaningful only in the terminal phases, where any
    /// press quits.
    Other,
}

/// Outcome of the extraction step.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Extraction {
    /// The platform link's href.
    Found(String),
    /// The page loaded but carried no link for the platform. A business
    /// outcome, not an error.
    NotFound,
}

/// Events fed into [`update`](crate::update): user input and worker
/// completions, interleaved.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Msg {
    Key(Key),
    /// Spinner/render tick; never changes phase.
    Tick,
    /// Lookup worker finished. The error payload is the loggable cause;
    /// the UI only ever shows a generic failure.
    LookupDone(Result<CanonicalRecord, String>),
    /// Extraction worker finished.
    ExtractDone(Result<Extraction, String>),
}
