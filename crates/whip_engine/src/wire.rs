//! Serde model of the lookup service's response body.
//!
//! The service sends far richer records (artists, images, per-country
//! link arrays); only the fields downstream logic reads are modeled and
//! everything else is ignored.

use serde::Deserialize;
use whip_core::{CanonicalRecord, RecordKind};

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct LookupResponse {
    pub url: String,
    #[serde(rename = "type", default)]
    pub kind: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub links: LinkAvailability,
}

/// Per-platform presence flags, field names as the service spells them.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct LinkAvailability {
    pub spotify: Option<bool>,
    pub itunes: Option<bool>,
    pub youtube: Option<bool>,
    pub youtube_music: Option<bool>,
    pub tidal: Option<bool>,
    pub amazon_music: Option<bool>,
    pub napster: Option<bool>,
    pub pandora: Option<bool>,
    pub deezer: Option<bool>,
    pub audiomack: Option<bool>,
    pub qobuz: Option<bool>,
}

impl LookupResponse {
    pub(crate) fn into_record(self) -> CanonicalRecord {
        let links = &self.links;
        let flags = [
            ("spotify", links.spotify),
            ("itunes", links.itunes),
            ("youtube", links.youtube),
            ("youtubeMusic", links.youtube_music),
            ("tidal", links.tidal),
            ("amazonMusic", links.amazon_music),
            ("napster", links.napster),
            ("pandora", links.pandora),
            ("deezer", links.deezer),
            ("audiomack", links.audiomack),
            ("qobuz", links.qobuz),
        ];
        let available = flags
            .into_iter()
            .filter_map(|(selector, flag)| flag.map(|present| (selector.to_string(), present)))
            .collect();
        CanonicalRecord {
            url: self.url,
            kind: RecordKind::parse(&self.kind),
            name: self.name,
            available,
        }
    }
}
