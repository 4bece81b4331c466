//! # airisk-api — Axum API Service for airisk
//!
//! A thin HTTP transport over [`airisk_engine::RiskEngine`]. The engine is
//! built once at startup from an immutable knowledge base and cloned into
//! every handler; no request mutates shared state.
//!
//! ## API Surface
//!
//! | Route | Module |
//! |-------|--------|
//! | `POST /v1/analyze` | [`routes::analyze`] |
//! | `GET /v1/regions`, `GET /v1/regions/{code}` | [`routes::regions`] |
//! | `GET /v1/framework` | [`routes::framework`] |
//! | `GET /v1/search?q=` | [`routes::search`] |
//! | `GET /health/liveness`, `GET /health/readiness` | this module |
//! | `GET /metrics` | this module, when metrics are enabled |
//!
//! ## Middleware Stack
//!
//! ```text
//! TraceLayer → CorsLayer → DefaultBodyLimit → Handler
//! ```
//!
//! ## Crate Policy
//!
//! - No business logic in route handlers; everything delegates to the engine.
//! - All errors map to structured HTTP responses via [`AppError`].

pub mod error;
pub mod routes;
pub mod state;

use axum::extract::{DefaultBodyLimit, State};
use axum::http::{header, HeaderValue, Method, StatusCode};
use axum::response::IntoResponse;
use axum::routing::get;
use axum::Router;
use tower_http::cors::{AllowOrigin, CorsLayer};
use tower_http::trace::TraceLayer;

pub use error::AppError;
pub use state::{AppConfig, AppState};

/// Request bodies larger than this are rejected before parsing.
const MAX_BODY_BYTES: usize = 256 * 1024;

/// Assemble the full application router.
pub fn app(state: AppState) -> Router {
    let mut router = Router::new()
        .merge(routes::analyze::router())
        .merge(routes::regions::router())
        .merge(routes::framework::router())
        .merge(routes::search::router())
        .route("/health/liveness", get(liveness))
        .route("/health/readiness", get(readiness));

    if state.metrics.is_some() {
        router = router.route("/metrics", get(prometheus_metrics));
    }

    router
        .layer(DefaultBodyLimit::max(MAX_BODY_BYTES))
        .layer(cors_layer(&state.config.cors_origins))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Permissive CORS when no origins are configured, otherwise an allow list.
fn cors_layer(origins: &[String]) -> CorsLayer {
    if origins.is_empty() {
        return CorsLayer::permissive();
    }
    let allowed: Vec<HeaderValue> = origins
        .iter()
        .filter_map(|origin| match HeaderValue::from_str(origin) {
            Ok(value) => Some(value),
            Err(_) => {
                tracing::warn!(origin = %origin, "ignoring invalid CORS origin");
                None
            }
        })
        .collect();
    CorsLayer::new()
        .allow_origin(AllowOrigin::list(allowed))
        .allow_methods([Method::GET, Method::POST])
        .allow_headers([header::CONTENT_TYPE])
}

/// Liveness probe.
async fn liveness() -> &'static str {
    "ok"
}

/// Readiness probe. The knowledge base is loaded before the router exists,
/// so the only degraded state is an empty catalog.
async fn readiness(State(state): State<AppState>) -> impl IntoResponse {
    if state.engine.knowledge_base().catalog.is_empty() {
        return (StatusCode::SERVICE_UNAVAILABLE, "knowledge base empty").into_response();
    }
    (StatusCode::OK, "ready").into_response()
}

/// GET /metrics: Prometheus text exposition.
async fn prometheus_metrics(State(state): State<AppState>) -> impl IntoResponse {
    match &state.metrics {
        Some(handle) => (
            StatusCode::OK,
            [(header::CONTENT_TYPE, "text/plain; version=0.0.4")],
            handle.render(),
        )
            .into_response(),
        None => StatusCode::NOT_FOUND.into_response(),
    }
}
