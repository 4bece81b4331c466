//! # Region Catalog Routes
//!
//! `GET /v1/regions` lists every region; `GET /v1/regions/{code}` returns
//! one region's full catalog entry. Codes are matched case-insensitively.

use axum::extract::{Path, State};
use axum::routing::get;
use axum::{Json, Router};
use serde::{Deserialize, Serialize};

use airisk_core::catalog_key;
use airisk_engine::RegionSummary;
use airisk_pack::Region;

use crate::error::AppError;
use crate::state::AppState;

/// Region listing.
#[derive(Debug, Serialize, Deserialize)]
pub struct RegionList {
    pub count: usize,
    pub regions: Vec<RegionSummary>,
}

/// A single region with its canonical code.
#[derive(Debug, Serialize, Deserialize)]
pub struct RegionDetail {
    pub code: String,
    #[serde(flatten)]
    pub region: Region,
}

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/v1/regions", get(list_regions))
        .route("/v1/regions/{code}", get(get_region))
}

/// GET /v1/regions: Summaries of every region, in code order.
async fn list_regions(State(state): State<AppState>) -> Json<RegionList> {
    let regions = state.engine.region_summaries();
    Json(RegionList {
        count: regions.len(),
        regions,
    })
}

/// GET /v1/regions/{code}: One region's catalog entry.
async fn get_region(
    State(state): State<AppState>,
    Path(code): Path<String>,
) -> Result<Json<RegionDetail>, AppError> {
    let region = state
        .engine
        .region(&code)
        .ok_or_else(|| AppError::NotFound(format!("region {code}")))?;
    Ok(Json(RegionDetail {
        code: catalog_key(&code),
        region: region.clone(),
    }))
}
