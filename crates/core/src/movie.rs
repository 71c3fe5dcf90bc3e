//! Movie record and the public response projection.

use serde::Serialize;

use crate::language::OriginalLanguage;
use crate::link::DownloadLink;
use crate::poster::ImageHost;

/// The first search match returned by the metadata provider.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MovieRecord {
    pub title: String,
    pub overview: Option<String>,
    /// ISO date string, e.g. `2010-07-16`.
    pub release_date: Option<String>,
    /// Path fragment relative to the image host, e.g. `/abc.jpg`.
    pub poster_path: Option<String>,
    /// Two-letter original language code.
    pub original_language: Option<String>,
}

impl MovieRecord {
    pub fn language(&self) -> OriginalLanguage {
        OriginalLanguage::from_code(self.original_language.as_deref())
    }
}

/// Body of a successful `GET /api/movies` response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MovieResponse {
    pub movie: MovieSummary,
    pub download_link: DownloadLink,
}

/// Outward-facing movie fields.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MovieSummary {
    pub title: String,
    pub description: Option<String>,
    pub release_date: Option<String>,
    pub poster: Option<String>,
}

impl MovieResponse {
    /// Project a record and its resolved link into the response shape.
    pub fn from_record(record: MovieRecord, link: DownloadLink, images: &ImageHost) -> Self {
        let poster = images.poster_url(record.poster_path.as_deref());

        Self {
            movie: MovieSummary {
                title: record.title,
                description: record.overview,
                release_date: record.release_date,
                poster,
            },
            download_link: link,
        }
    }
}
