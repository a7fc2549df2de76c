use pretty_assertions::assert_eq;
use whip_core::{Extraction, Platform};
use whip_engine::{ExtractError, ExtractSettings, LinkExtractor, PageLinkExtractor};
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

// The mock server binds to a loopback address, so scope the allow-list
// to it instead of the real service domain.
fn loopback_settings() -> ExtractSettings {
    ExtractSettings {
        allowed_domains: vec!["127.0.0.1".to_string(), "localhost".to_string()],
        ..ExtractSettings::default()
    }
}

fn platform(slug: &str) -> Platform {
    Platform::by_slug(slug).expect("catalog slug")
}

const RELEASE_PAGE: &str = r#"<html><body>
<a data-testid="ServiceButton spotify itemLinkButton spotifyItemLinkButton"
   href="https://open.spotify.com/track/xyz">Spotify</a>
<a data-testid="ServiceButton tidal itemLinkButton tidalItemLinkButton"
   href="https://tidal.com/track/123">Tidal</a>
<a href="https://example.com/unrelated">Unrelated</a>
</body></html>"#;

#[tokio::test]
async fn extraction_finds_the_platform_anchor() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/release/abc"))
        .respond_with(ResponseTemplate::new(200).set_body_raw(RELEASE_PAGE, "text/html"))
        .mount(&server)
        .await;

    let extractor = PageLinkExtractor::new(loopback_settings());
    let url = format!("{}/release/abc", server.uri());

    let outcome = extractor
        .extract(&url, &platform("spotify"))
        .await
        .expect("extract ok");
    assert_eq!(
        outcome,
        Extraction::Found("https://open.spotify.com/track/xyz".to_string())
    );

    // Selector keys that differ from slugs still resolve.
    let outcome = extractor
        .extract(&url, &platform("tidal"))
        .await
        .expect("extract ok");
    assert_eq!(
        outcome,
        Extraction::Found("https://tidal.com/track/123".to_string())
    );
}

#[tokio::test]
async fn extraction_without_matching_anchor_is_not_found() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/release/abc"))
        .respond_with(ResponseTemplate::new(200).set_body_raw(RELEASE_PAGE, "text/html"))
        .mount(&server)
        .await;

    let extractor = PageLinkExtractor::new(loopback_settings());
    let url = format!("{}/release/abc", server.uri());

    let outcome = extractor
        .extract(&url, &platform("qobuz"))
        .await
        .expect("extract ok");
    assert_eq!(outcome, Extraction::NotFound);
}

#[tokio::test]
async fn lookup_service_entry_short_circuits_without_a_fetch() {
    let server = MockServer::start().await;

    // Default settings: only the real service domain is allowed. The
    // short-circuit must fire before scope or network come into play.
    let extractor = PageLinkExtractor::new(ExtractSettings::default());
    let url = format!("{}/release/abc", server.uri());

    let outcome = extractor
        .extract(&url, &platform("songwhip"))
        .await
        .expect("extract ok");
    assert_eq!(outcome, Extraction::Found(url));

    let requests = server.received_requests().await.expect("recording enabled");
    assert!(requests.is_empty(), "short-circuit must not fetch");
}

#[tokio::test]
async fn extraction_refuses_hosts_outside_the_allow_list() {
    let server = MockServer::start().await;

    let extractor = PageLinkExtractor::new(ExtractSettings::default());
    let url = format!("{}/release/abc", server.uri());

    let err = extractor
        .extract(&url, &platform("spotify"))
        .await
        .unwrap_err();
    assert_eq!(err, ExtractError::DomainNotAllowed("127.0.0.1".to_string()));

    let requests = server.received_requests().await.expect("recording enabled");
    assert!(requests.is_empty(), "refused host must not be fetched");
}

#[tokio::test]
async fn extraction_rejects_unparseable_canonical_urls() {
    let extractor = PageLinkExtractor::new(ExtractSettings::default());
    let err = extractor
        .extract("not a url", &platform("spotify"))
        .await
        .unwrap_err();
    assert!(matches!(err, ExtractError::InvalidUrl(_)), "got {err:?}");
}

#[tokio::test]
async fn extraction_maps_http_error_status() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;

    let extractor = PageLinkExtractor::new(loopback_settings());
    let url = format!("{}/release/abc", server.uri());

    let err = extractor
        .extract(&url, &platform("spotify"))
        .await
        .unwrap_err();
    assert_eq!(err, ExtractError::HttpStatus(500));
}
