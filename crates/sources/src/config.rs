/// Default metadata provider API root.
pub const DEFAULT_TMDB_BASE_URL: &str = "https://api.themoviedb.org/3";

/// Default Tamil content site.
pub const DEFAULT_TAMIL_SITE_URL: &str = "https://1kuttymovies.cc";

/// Default selector for the first result link on the Tamil site's search page.
pub const DEFAULT_TAMIL_RESULT_SELECTOR: &str = ".search-result a";

/// Default English content site.
pub const DEFAULT_ENGLISH_SITE_URL: &str = "https://hdhub4u.cricket";

/// Default search engine used for fallback links.
pub const DEFAULT_SEARCH_ENGINE_URL: &str = "https://duckduckgo.com";

/// Upstream endpoints and credentials for all outbound lookups.
///
/// Only the API key comes from the environment; the base URLs default to the
/// production hosts and are overridden in tests to point at local stubs.
#[derive(Debug, Clone)]
pub struct SourcesConfig {
    /// Metadata provider API key (`TMDB_API_KEY`).
    pub tmdb_api_key: String,
    pub tmdb_base_url: String,
    pub tamil_site_url: String,
    /// CSS selector whose first match carries the download page `href`.
    pub tamil_result_selector: String,
    pub english_site_url: String,
    pub search_engine_url: String,
}

impl SourcesConfig {
    /// Production endpoints with the given API key.
    pub fn new(tmdb_api_key: impl Into<String>) -> Self {
        Self {
            tmdb_api_key: tmdb_api_key.into(),
            tmdb_base_url: DEFAULT_TMDB_BASE_URL.to_string(),
            tamil_site_url: DEFAULT_TAMIL_SITE_URL.to_string(),
            tamil_result_selector: DEFAULT_TAMIL_RESULT_SELECTOR.to_string(),
            english_site_url: DEFAULT_ENGLISH_SITE_URL.to_string(),
            search_engine_url: DEFAULT_SEARCH_ENGINE_URL.to_string(),
        }
    }
}
