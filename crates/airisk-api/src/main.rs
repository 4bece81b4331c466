//! # airisk-api binary
//!
//! Loads the knowledge base, builds the engine and serves the API.
//! A knowledge base that fails to load or validate stops the process
//! before any socket is bound.

use std::sync::Arc;

use metrics_exporter_prometheus::PrometheusBuilder;
use tracing_subscriber::EnvFilter;

use airisk_api::routes::analyze::{ANALYSES_TOTAL, ANALYSIS_FAILURES_TOTAL};
use airisk_api::state::{AppConfig, AppState, LogFormat};
use airisk_engine::RiskEngine;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = AppConfig::from_env();

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    match config.log_format {
        LogFormat::Json => tracing_subscriber::fmt().json().with_env_filter(filter).init(),
        LogFormat::Text => tracing_subscriber::fmt().with_env_filter(filter).init(),
    }

    let kb = match config.load_knowledge_base() {
        Ok(kb) => kb,
        Err(e) => {
            tracing::error!(error = %e, "failed to load knowledge base");
            return Err(e.into());
        }
    };
    let engine = RiskEngine::new(Arc::new(kb))?;
    tracing::info!(digest = %engine.digest(), "knowledge base ready");

    let port = config.port;
    let metrics_enabled = config.metrics_enabled;
    let mut state = AppState::new(engine, config);

    if metrics_enabled {
        match PrometheusBuilder::new().install_recorder() {
            Ok(handle) => {
                metrics::describe_counter!(ANALYSES_TOTAL, "Completed risk analyses by tier");
                metrics::describe_counter!(
                    ANALYSIS_FAILURES_TOTAL,
                    "Analysis payloads rejected as structurally invalid"
                );
                state = state.with_metrics(handle);
            }
            Err(e) => tracing::warn!(error = %e, "metrics recorder unavailable, /metrics disabled"),
        }
    }

    let app = airisk_api::app(state);

    let addr = format!("0.0.0.0:{port}");
    tracing::info!("airisk API listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
