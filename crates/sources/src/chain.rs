//! Download link selection.
//!
//! The movie's original language picks at most one content site. If that
//! site produces nothing, or no site applies, the search-engine fallback is
//! used. Calls are strictly sequential and each is attempted once.

use std::sync::Arc;

use movielink_core::language::OriginalLanguage;
use movielink_core::link::{DownloadLink, LinkSource};
use movielink_core::query::MovieQuery;

use crate::config::SourcesConfig;
use crate::error::SetupError;
use crate::fallback::SearchFallback;
use crate::hdhub::HdHubResolver;
use crate::http::browser_client;
use crate::kutty::KuttyMoviesResolver;
use crate::resolver::SourceResolver;

/// A link together with the resolver that produced it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedLink {
    pub link: DownloadLink,
    pub source: LinkSource,
}

pub struct LinkResolver {
    tamil: Arc<dyn SourceResolver>,
    english: Arc<dyn SourceResolver>,
    fallback: SearchFallback,
}

impl LinkResolver {
    pub fn new(
        tamil: Arc<dyn SourceResolver>,
        english: Arc<dyn SourceResolver>,
        fallback: SearchFallback,
    ) -> Self {
        Self {
            tamil,
            english,
            fallback,
        }
    }

    /// Build the production resolvers, sharing one browser-identified client
    /// between both content sites.
    pub fn from_config(config: &SourcesConfig) -> Result<Self, SetupError> {
        let client = browser_client()?;

        let tamil = KuttyMoviesResolver::new(
            client.clone(),
            &config.tamil_site_url,
            &config.tamil_result_selector,
        )?;
        let english = HdHubResolver::new(client, &config.english_site_url);

        Ok(Self::new(
            Arc::new(tamil),
            Arc::new(english),
            SearchFallback::new(&config.search_engine_url),
        ))
    }

    /// Resolve a download link for `query`. Always produces a link.
    pub async fn resolve(&self, language: &OriginalLanguage, query: &MovieQuery) -> ResolvedLink {
        let selected = match language {
            OriginalLanguage::Tamil => Some((LinkSource::Tamil, &self.tamil)),
            OriginalLanguage::English => Some((LinkSource::English, &self.english)),
            OriginalLanguage::Unrecognized(code) => {
                tracing::debug!(query = %query, code = ?code, "No content site for language");
                None
            }
        };

        if let Some((source, resolver)) = selected {
            match resolver.resolve(query).await {
                Ok(link) => {
                    tracing::debug!(
                        query = %query,
                        resolver = resolver.name(),
                        %link,
                        "Resolved download link",
                    );
                    return ResolvedLink { link, source };
                }
                Err(e) => {
                    tracing::warn!(
                        query = %query,
                        resolver = resolver.name(),
                        error = %e,
                        "Content site lookup failed, using search fallback",
                    );
                }
            }
        }

        ResolvedLink {
            link: self.fallback.link(query),
            source: LinkSource::Fallback,
        }
    }
}
