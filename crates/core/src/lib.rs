//! Domain types for the movie lookup service.
//!
//! Everything here is request-scoped and free of I/O: query validation,
//! the metadata record, language selection, and the public response shape.

pub mod error;
pub mod language;
pub mod link;
pub mod movie;
pub mod poster;
pub mod query;
