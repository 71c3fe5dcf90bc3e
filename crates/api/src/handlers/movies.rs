//! Handler for movie lookup.

use axum::extract::{Query, State};
use axum::Json;
use movielink_core::error::CoreError;
use movielink_core::movie::MovieResponse;
use movielink_core::query::MovieQuery;

use crate::error::AppResult;
use crate::state::AppState;

/// First value of the `query` parameter, if any.
///
/// The query string is read as raw pairs so a missing or repeated parameter
/// reaches validation instead of failing in the extractor with a plain-text
/// rejection.
fn query_param(params: &[(String, String)]) -> Option<&str> {
    params
        .iter()
        .find(|(key, _)| key == "query")
        .map(|(_, value)| value.as_str())
}

/// GET /api/movies?query=<title>
///
/// Looks up the first metadata match for the title, resolves a download link
/// from its original language, and returns both.
pub async fn get_movie(
    State(state): State<AppState>,
    Query(params): Query<Vec<(String, String)>>,
) -> AppResult<Json<MovieResponse>> {
    let query = MovieQuery::parse(query_param(&params))?;

    let record = state
        .metadata
        .search_movie(&query)
        .await?
        .ok_or(CoreError::NotFound { entity: "Movie" })?;

    let resolved = state.links.resolve(&record.language(), &query).await;

    tracing::info!(
        query = %query,
        title = %record.title,
        source = ?resolved.source,
        "Movie lookup completed",
    );

    Ok(Json(MovieResponse::from_record(
        record,
        resolved.link,
        &state.config.images,
    )))
}
