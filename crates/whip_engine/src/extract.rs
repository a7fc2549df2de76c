use std::time::Duration;

use scraper::{Html, Selector};
use whip_core::{Extraction, Platform};

use crate::types::ExtractError;

/// Scope and timeouts for the secondary page fetch.
#[derive(Debug, Clone)]
pub struct ExtractSettings {
    /// Hosts the extractor may fetch from. Anything else is refused
    /// before a request is made.
    pub allowed_domains: Vec<String>,
    pub connect_timeout: Duration,
    pub request_timeout: Duration,
}

impl Default for ExtractSettings {
    fn default() -> Self {
        Self {
            allowed_domains: vec!["songwhip.com".to_string()],
            connect_timeout: Duration::from_secs(10),
            request_timeout: Duration::from_secs(30),
        }
    }
}

#[async_trait::async_trait]
pub trait LinkExtractor: Send + Sync {
    /// Resolves the canonical page into `platform`'s outbound link.
    /// `Ok(Extraction::NotFound)` means the page loaded but lists no
    /// link for the platform.
    async fn extract(
        &self,
        canonical_url: &str,
        platform: &Platform,
    ) -> Result<Extraction, ExtractError>;
}

/// Fetches the canonical page and pulls the platform's link out of its
/// markup via the page's test-identifier convention.
#[derive(Debug, Clone)]
pub struct PageLinkExtractor {
    settings: ExtractSettings,
}

impl PageLinkExtractor {
    pub fn new(settings: ExtractSettings) -> Self {
        Self { settings }
    }

    fn check_scope(&self, canonical_url: &str) -> Result<(), ExtractError> {
        let parsed = url::Url::parse(canonical_url)
            .map_err(|err| ExtractError::InvalidUrl(err.to_string()))?;
        let host = parsed.host_str().unwrap_or_default();
        if self.settings.allowed_domains.iter().any(|domain| domain == host) {
            Ok(())
        } else {
            Err(ExtractError::DomainNotAllowed(host.to_string()))
        }
    }
}

#[async_trait::async_trait]
impl LinkExtractor for PageLinkExtractor {
    async fn extract(
        &self,
        canonical_url: &str,
        platform: &Platform,
    ) -> Result<Extraction, ExtractError> {
        // The service's own entry is the canonical page itself; nothing
        // to fetch.
        if platform.is_lookup_service() {
            return Ok(Extraction::Found(canonical_url.to_string()));
        }
        self.check_scope(canonical_url)?;

        let client = reqwest::Client::builder()
            .connect_timeout(self.settings.connect_timeout)
            .timeout(self.settings.request_timeout)
            .build()
            .map_err(|err| ExtractError::Network(err.to_string()))?;
        let response = client
            .get(canonical_url)
            .send()
            .await
            .map_err(map_transport_error)?;

        let status = response.status();
        if !status.is_success() {
            return Err(ExtractError::HttpStatus(status.as_u16()));
        }

        let body = response.text().await.map_err(map_transport_error)?;
        Ok(find_platform_href(&body, platform.selector))
    }
}

fn map_transport_error(err: reqwest::Error) -> ExtractError {
    if err.is_timeout() {
        return ExtractError::Timeout;
    }
    ExtractError::Network(err.to_string())
}

/// Structural query for the anchor carrying `selector_key`'s outbound
/// link, reading its href. The document is parsed and dropped here so no
/// non-Send parser state crosses an await point.
fn find_platform_href(html: &str, selector_key: &str) -> Extraction {
    let selector_text = format!(
        "a[data-testid=\"ServiceButton {selector_key} itemLinkButton {selector_key}ItemLinkButton\"]"
    );
    let Ok(selector) = Selector::parse(&selector_text) else {
        return Extraction::NotFound;
    };
    let doc = Html::parse_document(html);
    doc.select(&selector)
        .find_map(|element| element.value().attr("href"))
        .map(|href| Extraction::Found(href.to_string()))
        .unwrap_or(Extraction::NotFound)
}
