use movielink_core::link::DownloadLink;
use movielink_core::query::MovieQuery;

use crate::http::encode_component;

/// Builds a search-engine results URL for `"<title> movie download"`.
///
/// Pure string construction with no network call, so it cannot fail.
#[derive(Debug, Clone)]
pub struct SearchFallback {
    base_url: String,
}

impl SearchFallback {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
        }
    }

    /// `{base}/?q={url-encoded title}+movie+download`
    pub fn link(&self, query: &MovieQuery) -> DownloadLink {
        DownloadLink::new(format!(
            "{}/?q={}+movie+download",
            self.base_url.trim_end_matches('/'),
            encode_component(query.as_str())
        ))
    }
}
