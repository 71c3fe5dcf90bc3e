use async_trait::async_trait;
use movielink_core::link::DownloadLink;
use movielink_core::query::MovieQuery;

use crate::error::ResolveError;

/// A strategy that derives a download URL for a title from one external site.
///
/// Implementations make at most one outbound request and never retry.
#[async_trait]
pub trait SourceResolver: Send + Sync {
    /// Short name used in logs.
    fn name(&self) -> &'static str;

    async fn resolve(&self, query: &MovieQuery) -> Result<DownloadLink, ResolveError>;
}
