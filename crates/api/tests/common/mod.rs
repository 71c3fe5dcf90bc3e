#![allow(dead_code)]

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use async_trait::async_trait;
use axum::body::Body;
use axum::http::Request;
use axum::response::Response;
use axum::Router;
use http_body_util::BodyExt;
use tower::ServiceExt;

use movielink_api::config::ServerConfig;
use movielink_api::router::build_app_router;
use movielink_api::state::AppState;
use movielink_core::link::DownloadLink;
use movielink_core::movie::MovieRecord;
use movielink_core::poster::ImageHost;
use movielink_core::query::MovieQuery;
use movielink_sources::fallback::SearchFallback;
use movielink_sources::{
    LinkResolver, MetadataError, MetadataProvider, ResolveError, SourceResolver, SourcesConfig,
};

pub const SEARCH_ENGINE: &str = "https://duckduckgo.com";

/// Build a test `ServerConfig` with production endpoint defaults.
pub fn test_config() -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        cors_origins: vec!["http://localhost:3000".to_string()],
        sources: SourcesConfig::new("test-key"),
        images: ImageHost::default(),
    }
}

// ---------------------------------------------------------------------------
// Fakes
// ---------------------------------------------------------------------------

pub enum MetadataOutcome {
    Found(MovieRecord),
    Missing,
    Fails,
    Panics,
}

/// Metadata provider with a fixed outcome that counts invocations.
pub struct FakeMetadata {
    outcome: MetadataOutcome,
    calls: AtomicUsize,
}

impl FakeMetadata {
    pub fn new(outcome: MetadataOutcome) -> Arc<Self> {
        Arc::new(Self {
            outcome,
            calls: AtomicUsize::new(0),
        })
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl MetadataProvider for FakeMetadata {
    async fn search_movie(
        &self,
        _query: &MovieQuery,
    ) -> Result<Option<MovieRecord>, MetadataError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        match &self.outcome {
            MetadataOutcome::Found(record) => Ok(Some(record.clone())),
            MetadataOutcome::Missing => Ok(None),
            MetadataOutcome::Fails => Err(MetadataError::Api {
                status: 503,
                body: "upstream timeout at 10.0.0.7".to_string(),
            }),
            MetadataOutcome::Panics => panic!("metadata provider exploded"),
        }
    }
}

/// Content site resolver with a fixed outcome that counts invocations.
pub struct FakeSite {
    link: Option<&'static str>,
    calls: AtomicUsize,
}

impl FakeSite {
    pub fn hit(link: &'static str) -> Arc<Self> {
        Arc::new(Self {
            link: Some(link),
            calls: AtomicUsize::new(0),
        })
    }

    pub fn miss() -> Arc<Self> {
        Arc::new(Self {
            link: None,
            calls: AtomicUsize::new(0),
        })
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl SourceResolver for FakeSite {
    fn name(&self) -> &'static str {
        "fake-site"
    }

    async fn resolve(&self, _query: &MovieQuery) -> Result<DownloadLink, ResolveError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        match self.link {
            Some(link) => Ok(DownloadLink::new(link)),
            None => Err(ResolveError::Status {
                status: 404,
                url: "https://site.test/missing".to_string(),
            }),
        }
    }
}

pub fn record(title: &str, language: Option<&str>) -> MovieRecord {
    MovieRecord {
        title: title.to_string(),
        overview: Some(format!("Overview of {title}.")),
        release_date: Some("2010-07-16".to_string()),
        poster_path: Some("/8dM85pzmRMgE3bFwtAOt8u99h3k.jpg".to_string()),
        original_language: language.map(str::to_string),
    }
}

// ---------------------------------------------------------------------------
// App construction and request helpers
// ---------------------------------------------------------------------------

/// Build the full application router around the given fakes, using the same
/// middleware stack as production.
pub fn build_test_app(
    metadata: Arc<FakeMetadata>,
    tamil: Arc<FakeSite>,
    english: Arc<FakeSite>,
) -> Router {
    let links = LinkResolver::new(tamil, english, SearchFallback::new(SEARCH_ENGINE));

    let state = AppState {
        config: Arc::new(test_config()),
        metadata,
        links: Arc::new(links),
    };

    build_app_router(state)
}

pub async fn get(app: Router, uri: &str) -> Response {
    let request = Request::builder().uri(uri).body(Body::empty()).unwrap();
    app.oneshot(request).await.unwrap()
}

pub async fn body_json(response: Response) -> serde_json::Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}
