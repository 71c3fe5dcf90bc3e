/// Errors from the metadata provider.
#[derive(Debug, thiserror::Error)]
pub enum MetadataError {
    /// The HTTP request failed (network, DNS, TLS) or the body did not decode.
    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// The provider returned a non-2xx status code.
    #[error("Metadata API error ({status}): {body}")]
    Api {
        /// HTTP status code.
        status: u16,
        /// Raw response body for debugging.
        body: String,
    },
}

/// Reasons a site resolver produced no link.
#[derive(Debug, thiserror::Error)]
pub enum ResolveError {
    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("{url} responded with status {status}")]
    Status { status: u16, url: String },

    /// The page loaded but contained nothing matching the result selector.
    #[error("no result link found at {url}")]
    NoMatch { url: String },
}

/// Errors building clients and resolvers at startup.
#[derive(Debug, thiserror::Error)]
pub enum SetupError {
    #[error("failed to build HTTP client: {0}")]
    Client(#[from] reqwest::Error),

    #[error("invalid result selector '{selector}': {reason}")]
    InvalidSelector { selector: String, reason: String },
}
