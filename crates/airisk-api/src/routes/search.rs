//! # Regulation Search Route
//!
//! `GET /v1/search?q=` returns every regulation whose serialized text
//! contains the query, ignoring case. A missing or blank query is a
//! validation error rather than an empty result.

use axum::extract::rejection::QueryRejection;
use axum::extract::{Query, State};
use axum::routing::get;
use axum::{Json, Router};
use serde::{Deserialize, Serialize};

use airisk_engine::SearchHit;

use crate::error::AppError;
use crate::state::AppState;

/// Longest accepted query, in bytes.
const MAX_QUERY_LEN: usize = 256;

#[derive(Debug, Deserialize)]
pub struct SearchParams {
    #[serde(default)]
    pub q: Option<String>,
}

/// Search results.
#[derive(Debug, Serialize, Deserialize)]
pub struct SearchResults {
    pub query: String,
    pub count: usize,
    pub results: Vec<SearchHit>,
}

pub fn router() -> Router<AppState> {
    Router::new().route("/v1/search", get(search))
}

/// GET /v1/search: Substring search over the regulatory catalog.
async fn search(
    State(state): State<AppState>,
    params: Result<Query<SearchParams>, QueryRejection>,
) -> Result<Json<SearchResults>, AppError> {
    let Query(params) = params?;
    let query = params.q.unwrap_or_default().trim().to_string();
    if query.is_empty() {
        return Err(AppError::Validation(
            "query parameter `q` must not be empty".to_string(),
        ));
    }
    if query.len() > MAX_QUERY_LEN {
        return Err(AppError::Validation(format!(
            "query parameter `q` must not exceed {MAX_QUERY_LEN} bytes"
        )));
    }
    let results = state.engine.search(&query);
    Ok(Json(SearchResults {
        query,
        count: results.len(),
        results,
    }))
}
