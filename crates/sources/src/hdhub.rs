//! English content site resolver.
//!
//! The site serves each title at a predictable slug, so the download page
//! URL is derived from the query and checked with a single `GET`.
//!
//! NOTE: any 2xx counts as a hit. The body is never inspected, so a site
//! that answers unknown slugs with a 200 placeholder page yields a false
//! positive. Kept as-is until the owners decide how a real page should be
//! recognized.

use std::sync::LazyLock;

use async_trait::async_trait;
use movielink_core::link::DownloadLink;
use movielink_core::query::MovieQuery;
use regex::Regex;

use crate::error::ResolveError;
use crate::http::fetch_page;
use crate::resolver::SourceResolver;

static WHITESPACE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s+").expect("valid regex"));

pub struct HdHubResolver {
    client: reqwest::Client,
    base_url: String,
}

impl HdHubResolver {
    pub fn new(client: reqwest::Client, base_url: impl Into<String>) -> Self {
        Self {
            client,
            base_url: base_url.into(),
        }
    }

    /// `{base}/{slug}-download`
    pub fn download_page_url(&self, query: &MovieQuery) -> String {
        format!(
            "{}/{}-download",
            self.base_url.trim_end_matches('/'),
            slugify(query.as_str())
        )
    }
}

/// Lower-case the title and replace each whitespace run with a hyphen.
///
/// ```
/// use movielink_sources::hdhub::slugify;
///
/// assert_eq!(slugify("The Dark  Knight"), "the-dark-knight");
/// ```
pub fn slugify(title: &str) -> String {
    WHITESPACE_RE
        .replace_all(&title.to_lowercase(), "-")
        .into_owned()
}

#[async_trait]
impl SourceResolver for HdHubResolver {
    fn name(&self) -> &'static str {
        "hdhub4u"
    }

    async fn resolve(&self, query: &MovieQuery) -> Result<DownloadLink, ResolveError> {
        let url = self.download_page_url(query);
        fetch_page(&self.client, &url).await?;
        Ok(DownloadLink::new(url))
    }
}
