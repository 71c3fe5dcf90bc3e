pub mod health;
pub mod movies;

use axum::Router;

use crate::state::AppState;

/// Build the `/api` route tree.
///
/// ```text
/// /movies?query=<title>     movie details + download link (GET)
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new().merge(movies::router())
}
