//! Outbound lookups for the movie service.
//!
//! Provides the metadata provider client (TMDB), the per-site download link
//! resolvers, the search-engine fallback, and [`LinkResolver`], which picks a
//! resolver from the movie's original language.

pub mod chain;
pub mod config;
pub mod error;
pub mod fallback;
pub mod hdhub;
pub mod http;
pub mod kutty;
pub mod metadata;
pub mod resolver;
pub mod tmdb;

pub use chain::{LinkResolver, ResolvedLink};
pub use config::SourcesConfig;
pub use error::{MetadataError, ResolveError, SetupError};
pub use metadata::MetadataProvider;
pub use resolver::SourceResolver;
