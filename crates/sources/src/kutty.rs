//! Tamil content site resolver.
//!
//! Searches the site and takes the first link inside the result listing.
//! The listing markup is not verified beyond the selector match, so the
//! selector is configurable rather than hard-wired.

use async_trait::async_trait;
use movielink_core::link::DownloadLink;
use movielink_core::query::MovieQuery;
use reqwest::Url;
use scraper::{Html, Selector};

use crate::error::{ResolveError, SetupError};
use crate::http::{encode_component, fetch_page};
use crate::resolver::SourceResolver;

pub struct KuttyMoviesResolver {
    client: reqwest::Client,
    base_url: String,
    result_selector: Selector,
}

impl KuttyMoviesResolver {
    /// Create a resolver for the site at `base_url`.
    ///
    /// `client` should carry the browser identity (see
    /// [`crate::http::browser_client`]). Fails if `result_selector` is not a
    /// valid CSS selector.
    pub fn new(
        client: reqwest::Client,
        base_url: impl Into<String>,
        result_selector: &str,
    ) -> Result<Self, SetupError> {
        let selector =
            Selector::parse(result_selector).map_err(|e| SetupError::InvalidSelector {
                selector: result_selector.to_string(),
                reason: e.to_string(),
            })?;

        Ok(Self {
            client,
            base_url: base_url.into(),
            result_selector: selector,
        })
    }

    /// `{base}/search/{url-encoded query}`
    pub fn search_url(&self, query: &MovieQuery) -> String {
        format!(
            "{}/search/{}",
            self.base_url.trim_end_matches('/'),
            encode_component(query.as_str())
        )
    }
}

#[async_trait]
impl SourceResolver for KuttyMoviesResolver {
    fn name(&self) -> &'static str {
        "kuttymovies"
    }

    async fn resolve(&self, query: &MovieQuery) -> Result<DownloadLink, ResolveError> {
        let url = self.search_url(query);
        let html = fetch_page(&self.client, &url).await?.text().await?;

        match first_result_link(&html, &self.result_selector, &url) {
            Some(link) => Ok(DownloadLink::new(link)),
            None => Err(ResolveError::NoMatch { url }),
        }
    }
}

/// Extract the `href` of the first element matching `selector`.
///
/// Absolute hrefs are returned verbatim; relative ones are resolved against
/// `page_url`. Elements without a non-blank `href` yield `None`.
pub fn first_result_link(html: &str, selector: &Selector, page_url: &str) -> Option<String> {
    let document = Html::parse_document(html);
    let href = document
        .select(selector)
        .next()?
        .value()
        .attr("href")?
        .trim();

    if href.is_empty() {
        return None;
    }
    if Url::parse(href).is_ok() {
        return Some(href.to_string());
    }

    Url::parse(page_url)
        .and_then(|base| base.join(href))
        .map(String::from)
        .ok()
}
