//! Original-language classification used to pick a download source.

/// ISO 639-1 code the metadata provider uses for Tamil.
pub const TAMIL_CODE: &str = "ta";

/// ISO 639-1 code the metadata provider uses for English.
pub const ENGLISH_CODE: &str = "en";

/// The original language of a movie, reduced to the cases that select a
/// download source.
///
/// Every code other than the recognized ones lands in
/// [`OriginalLanguage::Unrecognized`], so callers matching on this type must
/// spell out what happens for it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OriginalLanguage {
    Tamil,
    English,
    /// Any other code, or no code at all.
    Unrecognized(Option<String>),
}

impl OriginalLanguage {
    /// Classify a provider language code. Matching is exact, as the provider
    /// always reports lowercase codes.
    pub fn from_code(code: Option<&str>) -> Self {
        match code {
            Some(TAMIL_CODE) => Self::Tamil,
            Some(ENGLISH_CODE) => Self::English,
            other => Self::Unrecognized(other.map(str::to_string)),
        }
    }
}
