//! # Risk Analysis Route
//!
//! `POST /v1/analyze` accepts an analysis request as JSON and returns the
//! engine's result inside an envelope that identifies the assessment and
//! the knowledge-base revision that produced it.

use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::routing::post;
use axum::{Json, Router};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use airisk_engine::RiskAnalysisResult;

use crate::error::AppError;
use crate::state::AppState;

/// Counter of completed analyses, labelled by tier.
pub const ANALYSES_TOTAL: &str = "airisk_analyses_total";
/// Counter of rejected analysis payloads.
pub const ANALYSIS_FAILURES_TOTAL: &str = "airisk_analysis_failures_total";

/// One assessment as returned over HTTP.
#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisEnvelope {
    pub assessment_id: Uuid,
    pub analyzed_at: DateTime<Utc>,
    /// `sha256:<hex>` of the knowledge bases used.
    pub knowledge_base_digest: String,
    pub result: RiskAnalysisResult,
}

pub fn router() -> Router<AppState> {
    Router::new().route("/v1/analyze", post(analyze))
}

/// POST /v1/analyze: Assess one AI use case.
async fn analyze(
    State(state): State<AppState>,
    body: Result<Json<serde_json::Value>, JsonRejection>,
) -> Result<Json<AnalysisEnvelope>, AppError> {
    let Json(payload) = body?;
    let result = match state.engine.analyze_value(payload) {
        Ok(result) => result,
        Err(err) => {
            metrics::counter!(ANALYSIS_FAILURES_TOTAL).increment(1);
            return Err(err.into());
        }
    };
    metrics::counter!(ANALYSES_TOTAL, "tier" => result.risk_level.as_str()).increment(1);

    let envelope = AnalysisEnvelope {
        assessment_id: Uuid::new_v4(),
        analyzed_at: Utc::now(),
        knowledge_base_digest: state.engine.digest().to_string(),
        result,
    };
    tracing::debug!(assessment_id = %envelope.assessment_id, "assessment issued");
    Ok(Json(envelope))
}
