//! Shared HTTP plumbing for the content-site resolvers.

use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};

use crate::error::ResolveError;

/// Characters escaped in a URI component: everything except ASCII
/// alphanumerics and `- _ . ! ~ * ' ( )`, the set browsers leave intact.
const URI_COMPONENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');

/// Desktop browser identity sent to content sites, which reject unknown
/// clients.
pub const BROWSER_USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) \
    AppleWebKit/537.36 (KHTML, like Gecko) Chrome/91.0.4472.124 Safari/537.36";

/// Percent-encode `text` for use as a single path segment or query value.
///
/// ```
/// use movielink_sources::http::encode_component;
///
/// assert_eq!(encode_component("Ocean's Eleven"), "Ocean's%20Eleven");
/// ```
pub fn encode_component(text: &str) -> String {
    utf8_percent_encode(text, URI_COMPONENT).to_string()
}

/// Build a client that identifies as a desktop browser.
pub fn browser_client() -> Result<reqwest::Client, reqwest::Error> {
    reqwest::Client::builder()
        .user_agent(BROWSER_USER_AGENT)
        .build()
}

/// `GET` a page and fail on any non-2xx status.
pub async fn fetch_page(
    client: &reqwest::Client,
    url: &str,
) -> Result<reqwest::Response, ResolveError> {
    let response = client.get(url).send().await?;

    let status = response.status();
    if !status.is_success() {
        return Err(ResolveError::Status {
            status: status.as_u16(),
            url: url.to_string(),
        });
    }
    Ok(response)
}
