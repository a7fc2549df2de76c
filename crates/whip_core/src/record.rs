/// Release kind reported by the lookup service.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RecordKind {
    Artist,
    Track,
    Album,
    /// Anything the service introduces later; carried for the log only.
    Unknown,
}

impl RecordKind {
    /// Parses the service's `type` discriminator, tolerating new values.
    pub fn parse(raw: &str) -> Self {
        match raw {
            "artist" => RecordKind::Artist,
            "track" => RecordKind::Track,
            "album" => RecordKind::Album,
            _ => RecordKind::Unknown,
        }
    }
}

/// Canonical result of a lookup: one page on the lookup service plus the
/// platforms it claims to link out to. Immutable once constructed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CanonicalRecord {
    /// Canonical URL of the record on the lookup service.
    pub url: String,
    pub kind: RecordKind,
    pub name: String,
    /// Per-platform presence flags, keyed by the service's selector names.
    /// Platforms the response did not mention are absent.
    pub available: Vec<(String, bool)>,
}

impl CanonicalRecord {
    /// Whether the service reported an outbound link for `selector`.
    ///
    /// Unlisted platforms count as available: the response map is sparse
    /// and extraction is the authority either way. Only an explicit
    /// `false` rules a platform out.
    pub fn is_available(&self, selector: &str) -> bool {
        self.available
            .iter()
            .find(|(key, _)| key == selector)
            .map_or(true, |(_, present)| *present)
    }
}
