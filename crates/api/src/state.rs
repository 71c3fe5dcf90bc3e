use std::sync::Arc;

use movielink_sources::tmdb::TmdbClient;
use movielink_sources::{LinkResolver, MetadataProvider, SetupError};

use crate::config::ServerConfig;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// Cheaply cloneable; nothing in it is mutated after startup.
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<ServerConfig>,
    /// Title to movie record lookup.
    pub metadata: Arc<dyn MetadataProvider>,
    /// Language-driven download link selection.
    pub links: Arc<LinkResolver>,
}

impl AppState {
    /// Wire the production metadata client and link resolvers from config.
    pub fn from_config(config: ServerConfig) -> Result<Self, SetupError> {
        let metadata = TmdbClient::with_client(
            reqwest::Client::new(),
            &config.sources.tmdb_api_key,
            &config.sources.tmdb_base_url,
        );
        let links = LinkResolver::from_config(&config.sources)?;

        Ok(Self {
            config: Arc::new(config),
            metadata: Arc::new(metadata),
            links: Arc::new(links),
        })
    }
}
