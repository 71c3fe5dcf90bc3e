use std::fmt;

use serde::Serialize;

/// An absolute URL believed to host a download for a title.
///
/// Never checked for reachability beyond what the producing resolver did.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct DownloadLink(String);

impl DownloadLink {
    pub fn new(url: impl Into<String>) -> Self {
        Self(url.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_string(self) -> String {
        self.0
    }
}

impl fmt::Display for DownloadLink {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Which resolver produced a [`DownloadLink`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LinkSource {
    /// The Tamil-language content site.
    Tamil,
    /// The English-language content site.
    English,
    /// The search-engine URL built when no site produced a link.
    Fallback,
}
