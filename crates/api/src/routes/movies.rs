use axum::routing::get;
use axum::Router;

use crate::handlers::movies;
use crate::state::AppState;

pub fn router() -> Router<AppState> {
    Router::new().route("/movies", get(movies::get_movie))
}
