//! TMDB (The Movie Database) search client.
//!
//! Only the movie search endpoint is used. The first result in provider
//! order is taken as the canonical match; no ranking or disambiguation is
//! applied.

use async_trait::async_trait;
use movielink_core::movie::MovieRecord;
use movielink_core::query::MovieQuery;
use serde::Deserialize;

use crate::error::MetadataError;
use crate::metadata::MetadataProvider;

/// HTTP client for the TMDB v3 API.
pub struct TmdbClient {
    client: reqwest::Client,
    api_key: String,
    base_url: String,
}

/// Page of results from `GET /search/movie`.
#[derive(Debug, Deserialize)]
pub struct SearchMovieResponse {
    #[serde(default)]
    pub results: Vec<TmdbMovie>,
}

/// A single movie entry as returned by TMDB search.
#[derive(Debug, Deserialize)]
pub struct TmdbMovie {
    #[serde(default)]
    pub title: String,
    pub overview: Option<String>,
    pub release_date: Option<String>,
    pub poster_path: Option<String>,
    pub original_language: Option<String>,
}

impl From<TmdbMovie> for MovieRecord {
    fn from(movie: TmdbMovie) -> Self {
        Self {
            title: movie.title,
            overview: movie.overview,
            // TMDB reports unknown release dates as "".
            release_date: movie.release_date.filter(|d| !d.is_empty()),
            poster_path: movie.poster_path,
            original_language: movie.original_language,
        }
    }
}

impl TmdbClient {
    /// Create a client reusing an existing [`reqwest::Client`].
    ///
    /// * `base_url` - API root, e.g. `https://api.themoviedb.org/3`.
    pub fn with_client(
        client: reqwest::Client,
        api_key: impl Into<String>,
        base_url: impl Into<String>,
    ) -> Self {
        Self {
            client,
            api_key: api_key.into(),
            base_url: base_url.into(),
        }
    }

    /// Search movies by title and return the full first page of results.
    ///
    /// Request errors are stripped of their URL, which carries the API key.
    pub async fn search(&self, query: &str) -> Result<Vec<TmdbMovie>, MetadataError> {
        let response = self
            .client
            .get(format!("{}/search/movie", self.base_url.trim_end_matches('/')))
            .query(&[("api_key", self.api_key.as_str()), ("query", query)])
            .send()
            .await
            .map_err(reqwest::Error::without_url)?;

        let page: SearchMovieResponse = Self::parse_response(response).await?;
        Ok(page.results)
    }

    async fn parse_response<T: serde::de::DeserializeOwned>(
        response: reqwest::Response,
    ) -> Result<T, MetadataError> {
        let status = response.status();
        if !status.is_success() {
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "<unreadable body>".to_string());
            return Err(MetadataError::Api {
                status: status.as_u16(),
                body,
            });
        }
        Ok(response
            .json::<T>()
            .await
            .map_err(reqwest::Error::without_url)?)
    }
}

#[async_trait]
impl MetadataProvider for TmdbClient {
    async fn search_movie(&self, query: &MovieQuery) -> Result<Option<MovieRecord>, MetadataError> {
        let results = self.search(query.as_str()).await.inspect_err(|e| {
            tracing::warn!(query = %query, error = %e, "TMDB search failed");
        })?;

        let total = results.len();
        let first = results.into_iter().next().map(MovieRecord::from);

        tracing::debug!(
            query = %query,
            total,
            matched = ?first.as_ref().map(|m| m.title.as_str()),
            "TMDB search completed",
        );

        Ok(first)
    }
}
