//! Integration tests for the content-site resolvers against local stubs.

mod common;

use std::sync::{Arc, Mutex};

use assert_matches::assert_matches;
use axum::extract::Path;
use axum::http::{HeaderMap, StatusCode};
use axum::response::Html;
use axum::routing::get;
use axum::Router;
use movielink_core::language::OriginalLanguage;
use movielink_core::link::LinkSource;
use movielink_core::query::MovieQuery;
use movielink_sources::hdhub::HdHubResolver;
use movielink_sources::http::{browser_client, BROWSER_USER_AGENT};
use movielink_sources::kutty::KuttyMoviesResolver;
use movielink_sources::{LinkResolver, ResolveError, SourceResolver, SourcesConfig};

const SEARCH_PAGE: &str = r#"
<html><body>
  <header><a href="/">Home</a></header>
  <div class="search-result">
    <a href="/movie/vikram-2022">Vikram (2022)</a>
  </div>
  <div class="search-result">
    <a href="/movie/vikram-1986">Vikram (1986)</a>
  </div>
</body></html>
"#;

fn query(text: &str) -> MovieQuery {
    MovieQuery::parse(Some(text)).unwrap()
}

/// Tamil site stub: `/search/{term}` returns a listing for "Vikram" and an
/// empty page otherwise. Records the user agent of the last request.
async fn tamil_site(seen_agent: Arc<Mutex<Option<String>>>) -> String {
    let router = Router::new().route(
        "/search/{term}",
        get(move |Path(term): Path<String>, headers: HeaderMap| {
            let seen_agent = Arc::clone(&seen_agent);
            async move {
                *seen_agent.lock().unwrap() = headers
                    .get("user-agent")
                    .and_then(|v| v.to_str().ok())
                    .map(str::to_string);
                if term == "Vikram" {
                    Html(SEARCH_PAGE)
                } else {
                    Html("<html><body><p>Nothing found</p></body></html>")
                }
            }
        }),
    );
    common::spawn_stub(router).await
}

/// English site stub: only `/inception-download` exists.
async fn english_site() -> String {
    let router = Router::new().route(
        "/{page}",
        get(|Path(page): Path<String>| async move {
            if page == "inception-download" {
                (StatusCode::OK, "<html>Inception</html>")
            } else {
                (StatusCode::NOT_FOUND, "not found")
            }
        }),
    );
    common::spawn_stub(router).await
}

// ---------------------------------------------------------------------------
// Tamil site
// ---------------------------------------------------------------------------

#[tokio::test]
async fn tamil_resolver_returns_first_listing_link() {
    let agent = Arc::new(Mutex::new(None));
    let base = tamil_site(Arc::clone(&agent)).await;
    let resolver =
        KuttyMoviesResolver::new(browser_client().unwrap(), &base, ".search-result a").unwrap();

    let link = resolver.resolve(&query("Vikram")).await.unwrap();

    assert_eq!(link.as_str(), format!("{base}/movie/vikram-2022"));
    assert_eq!(agent.lock().unwrap().as_deref(), Some(BROWSER_USER_AGENT));
}

#[tokio::test]
async fn tamil_resolver_without_listing_is_no_match() {
    let base = tamil_site(Arc::new(Mutex::new(None))).await;
    let resolver =
        KuttyMoviesResolver::new(browser_client().unwrap(), &base, ".search-result a").unwrap();

    let err = resolver.resolve(&query("Unknown Title")).await.unwrap_err();

    assert_matches!(err, ResolveError::NoMatch { .. });
}

#[tokio::test]
async fn tamil_resolver_honours_custom_selector() {
    let base = tamil_site(Arc::new(Mutex::new(None))).await;
    let resolver =
        KuttyMoviesResolver::new(browser_client().unwrap(), &base, "header a").unwrap();

    let link = resolver.resolve(&query("Vikram")).await.unwrap();

    assert_eq!(link.as_str(), format!("{base}/"));
}

// ---------------------------------------------------------------------------
// English site
// ---------------------------------------------------------------------------

#[tokio::test]
async fn english_lookup_returns_constructed_url_on_2xx() {
    let base = english_site().await;
    let resolver = HdHubResolver::new(browser_client().unwrap(), &base);

    let link = resolver.resolve(&query("Inception")).await.unwrap();

    assert_eq!(link.as_str(), format!("{base}/inception-download"));
}

#[tokio::test]
async fn english_lookup_fails_on_404() {
    let base = english_site().await;
    let resolver = HdHubResolver::new(browser_client().unwrap(), &base);

    let err = resolver.resolve(&query("Tenet")).await.unwrap_err();

    assert_matches!(err, ResolveError::Status { status: 404, .. });
}

#[tokio::test]
async fn english_lookup_fails_when_unreachable() {
    let resolver = HdHubResolver::new(browser_client().unwrap(), common::closed_port().await);

    let err = resolver.resolve(&query("Inception")).await.unwrap_err();

    assert_matches!(err, ResolveError::Request(_));
}

// ---------------------------------------------------------------------------
// Full chain from config
// ---------------------------------------------------------------------------

#[tokio::test]
async fn chain_from_config_falls_back_when_english_site_misses() {
    let mut config = SourcesConfig::new("unused");
    config.tamil_site_url = tamil_site(Arc::new(Mutex::new(None))).await;
    config.english_site_url = english_site().await;
    config.search_engine_url = "https://search.test".to_string();
    let chain = LinkResolver::from_config(&config).unwrap();

    let hit = chain
        .resolve(&OriginalLanguage::English, &query("Inception"))
        .await;
    assert_eq!(hit.source, LinkSource::English);

    let miss = chain.resolve(&OriginalLanguage::English, &query("Tenet")).await;
    assert_eq!(miss.source, LinkSource::Fallback);
    assert_eq!(miss.link.as_str(), "https://search.test/?q=Tenet+movie+download");

    let tamil = chain.resolve(&OriginalLanguage::Tamil, &query("Vikram")).await;
    assert_eq!(tamil.source, LinkSource::Tamil);
    assert!(tamil.link.as_str().ends_with("/movie/vikram-2022"));
}
