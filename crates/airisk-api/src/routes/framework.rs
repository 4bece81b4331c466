//! # Risk Framework Route

use axum::extract::State;
use axum::routing::get;
use axum::{Json, Router};

use airisk_pack::RiskFramework;

use crate::state::AppState;

pub fn router() -> Router<AppState> {
    Router::new().route("/v1/framework", get(get_framework))
}

/// GET /v1/framework: The Risk Framework document the engine scores with.
async fn get_framework(State(state): State<AppState>) -> Json<RiskFramework> {
    Json(state.engine.framework().clone())
}
