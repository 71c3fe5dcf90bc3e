//! Validated free-text movie query.

use std::fmt;

use crate::error::CoreError;

/// Message returned to callers when the query is missing or blank.
pub const QUERY_REQUIRED: &str = "Movie query is required";

/// A movie title as typed by the caller, trimmed and guaranteed non-empty.
///
/// The only constructor is [`MovieQuery::parse`], so holding a value of this
/// type means validation already happened and no outbound call can be made
/// with a blank title.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MovieQuery(String);

impl MovieQuery {
    /// Validate a raw `query` parameter.
    ///
    /// Missing, empty, and whitespace-only input is rejected with
    /// [`CoreError::Validation`]. Surrounding whitespace is stripped.
    ///
    /// ```
    /// use movielink_core::query::MovieQuery;
    ///
    /// assert_eq!(MovieQuery::parse(Some("  Inception ")).unwrap().as_str(), "Inception");
    /// assert!(MovieQuery::parse(Some("   ")).is_err());
    /// assert!(MovieQuery::parse(None).is_err());
    /// ```
    pub fn parse(raw: Option<&str>) -> Result<Self, CoreError> {
        match raw.map(str::trim) {
            Some(text) if !text.is_empty() => Ok(Self(text.to_string())),
            _ => Err(CoreError::Validation(QUERY_REQUIRED.to_string())),
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for MovieQuery {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for MovieQuery {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
