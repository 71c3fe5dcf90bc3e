//! Request handlers.
//!
//! Handlers validate input, delegate to the metadata provider and link
//! resolver held in [`crate::state::AppState`], and map errors via
//! [`crate::error::AppError`].

pub mod movies;
