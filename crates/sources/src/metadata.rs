use async_trait::async_trait;
use movielink_core::movie::MovieRecord;
use movielink_core::query::MovieQuery;

use crate::error::MetadataError;

/// Resolves a free-text title to a canonical movie record.
#[async_trait]
pub trait MetadataProvider: Send + Sync {
    /// Return the provider's first match for `query`, or `None` when the
    /// provider has no match. Transport and decoding failures are errors.
    async fn search_movie(&self, query: &MovieQuery) -> Result<Option<MovieRecord>, MetadataError>;
}
