use crate::catalog::{Platform, CATALOG};
use crate::record::CanonicalRecord;

/// Discrete phases of the linear interaction flow.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Phase {
    #[default]
    AwaitingInput,
    ChoosingPlatform,
    LookingUp,
    Extracting,
    Resolved,
    Failed,
    Terminated,
}

/// The single mutable aggregate of a session, driven exclusively by
/// [`update`](crate::update).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionState {
    pub(crate) phase: Phase,
    pub(crate) input: String,
    pub(crate) cursor: usize,
    pub(crate) platform: Platform,
    pub(crate) record: Option<CanonicalRecord>,
    pub(crate) target: Option<String>,
    pub(crate) last_error: Option<String>,
}

impl SessionState {
    pub fn new() -> Self {
        Self {
            phase: Phase::AwaitingInput,
            input: String::new(),
            cursor: 0,
            platform: CATALOG[0],
            record: None,
            target: None,
            last_error: None,
        }
    }

    /// Construction-time shortcut for CLI pre-seeding.
    ///
    /// A non-empty source URL skips the input prompt; a recognized
    /// platform slug additionally parks the cursor on that platform so
    /// the caller can submit immediately. An unrecognized slug is
    /// ignored and the chooser stays interactive.
    pub fn with_seed(source_url: Option<&str>, platform_slug: Option<&str>) -> Self {
        let mut state = Self::new();
        let Some(url) = source_url.map(str::trim).filter(|url| !url.is_empty()) else {
            return state;
        };
        state.input = url.to_string();
        state.phase = Phase::ChoosingPlatform;
        if let Some(platform) = platform_slug.and_then(Platform::by_slug) {
            state.platform = platform;
            state.cursor = CATALOG
                .iter()
                .position(|entry| entry.slug == platform.slug)
                .unwrap_or(0);
        }
        state
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Raw text entered at the URL prompt.
    pub fn input(&self) -> &str {
        &self.input
    }

    /// Current chooser position within [`CATALOG`].
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Platform captured when the chooser was submitted. Before that it
    /// is the catalog's first entry.
    pub fn platform(&self) -> Platform {
        self.platform
    }

    pub fn record(&self) -> Option<&CanonicalRecord> {
        self.record.as_ref()
    }

    /// Resolved target URL; `None` until extraction succeeds, and still
    /// `None` in `Resolved` when the platform had no link.
    pub fn target(&self) -> Option<&str> {
        self.target.as_deref()
    }

    pub fn last_error(&self) -> Option<&str> {
        self.last_error.as_deref()
    }

    /// True while a network worker is in flight.
    pub fn is_busy(&self) -> bool {
        matches!(self.phase, Phase::LookingUp | Phase::Extracting)
    }
}

impl Default for SessionState {
    fn default() -> Self {
        Self::new()
    }
}
