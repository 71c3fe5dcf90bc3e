//! Poster URL construction for provider image paths.

/// Default image host for provider poster paths.
pub const DEFAULT_IMAGE_BASE_URL: &str = "https://image.tmdb.org/t/p";

/// Default poster size segment.
pub const DEFAULT_POSTER_SIZE: &str = "w500";

/// Image host and size used to turn a poster path fragment into a full URL.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageHost {
    pub base_url: String,
    pub poster_size: String,
}

impl Default for ImageHost {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_IMAGE_BASE_URL.to_string(),
            poster_size: DEFAULT_POSTER_SIZE.to_string(),
        }
    }
}

impl ImageHost {
    /// Build the full poster URL for a path fragment.
    ///
    /// Joins `{base_url}/{poster_size}/{path}` with exactly one slash at each
    /// seam. Returns `None` when the path is absent or blank.
    ///
    /// ```
    /// use movielink_core::poster::ImageHost;
    ///
    /// let host = ImageHost::default();
    /// assert_eq!(
    ///     host.poster_url(Some("/abc.jpg")).as_deref(),
    ///     Some("https://image.tmdb.org/t/p/w500/abc.jpg"),
    /// );
    /// assert_eq!(host.poster_url(None), None);
    /// ```
    pub fn poster_url(&self, path: Option<&str>) -> Option<String> {
        let path = path.map(str::trim).filter(|p| !p.is_empty())?;

        Some(format!(
            "{}/{}/{}",
            self.base_url.trim_end_matches('/'),
            self.poster_size.trim_matches('/'),
            path.trim_start_matches('/'),
        ))
    }
}
