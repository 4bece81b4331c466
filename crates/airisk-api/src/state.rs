//! # Application State
//!
//! Configuration read from the environment, and the shared state handed to
//! every route handler: the risk engine over its immutable knowledge base,
//! plus the Prometheus handle when metrics are enabled.

use std::path::PathBuf;
use std::sync::Arc;

use metrics_exporter_prometheus::PrometheusHandle;

use airisk_engine::RiskEngine;
use airisk_pack::{KnowledgeBase, PackResult};

/// Port used when neither `AIRISK_PORT` nor `PORT` is set.
pub const DEFAULT_PORT: u16 = 3001;

/// Log line format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogFormat {
    #[default]
    Text,
    Json,
}

/// Service configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    /// TCP port to bind.
    pub port: u16,
    /// Directory holding `regulations.*` and `risk_framework.*`. `None`
    /// serves the bundled knowledge bases.
    pub data_dir: Option<PathBuf>,
    /// Allowed CORS origins. Empty means permissive.
    pub cors_origins: Vec<String>,
    /// Whether `/metrics` is mounted and counters are recorded.
    pub metrics_enabled: bool,
    pub log_format: LogFormat,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            port: DEFAULT_PORT,
            data_dir: None,
            cors_origins: Vec::new(),
            metrics_enabled: true,
            log_format: LogFormat::Text,
        }
    }
}

impl AppConfig {
    /// Read configuration from the process environment.
    ///
    /// | Variable | Meaning |
    /// |----------|---------|
    /// | `AIRISK_PORT` (fallback `PORT`) | listen port, default 3001 |
    /// | `AIRISK_DATA_DIR` | knowledge-base directory |
    /// | `AIRISK_CORS_ORIGINS` | comma-separated origin allow list |
    /// | `AIRISK_METRICS_ENABLED` | anything but `false` enables metrics |
    /// | `AIRISK_LOG_FORMAT` | `json` for JSON log lines |
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build configuration from an arbitrary variable lookup.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let port = lookup("AIRISK_PORT")
            .or_else(|| lookup("PORT"))
            .and_then(|raw| match raw.trim().parse::<u16>() {
                Ok(port) => Some(port),
                Err(_) => {
                    tracing::warn!(value = %raw, "ignoring unparseable port");
                    None
                }
            })
            .unwrap_or(DEFAULT_PORT);

        let data_dir = lookup("AIRISK_DATA_DIR")
            .filter(|dir| !dir.trim().is_empty())
            .map(PathBuf::from);

        let cors_origins = lookup("AIRISK_CORS_ORIGINS")
            .map(|raw| {
                raw.split(',')
                    .map(str::trim)
                    .filter(|origin| !origin.is_empty())
                    .map(str::to_string)
                    .collect()
            })
            .unwrap_or_default();

        let metrics_enabled = lookup("AIRISK_METRICS_ENABLED")
            .map(|v| v.to_lowercase() != "false")
            .unwrap_or(true);

        let log_format = match lookup("AIRISK_LOG_FORMAT") {
            Some(v) if v.eq_ignore_ascii_case("json") => LogFormat::Json,
            _ => LogFormat::Text,
        };

        Self {
            port,
            data_dir,
            cors_origins,
            metrics_enabled,
            log_format,
        }
    }

    /// Load the configured knowledge base.
    pub fn load_knowledge_base(&self) -> PackResult<KnowledgeBase> {
        match &self.data_dir {
            Some(dir) => KnowledgeBase::load_dir(dir),
            None => KnowledgeBase::bundled(),
        }
    }
}

/// Shared application state passed to all route handlers.
#[derive(Clone)]
pub struct AppState {
    pub engine: RiskEngine,
    pub config: Arc<AppConfig>,
    /// Present when a Prometheus recorder backs the `metrics` macros.
    pub metrics: Option<PrometheusHandle>,
}

impl std::fmt::Debug for AppState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppState")
            .field("engine", &self.engine)
            .field("config", &self.config)
            .field("metrics", &self.metrics.is_some())
            .finish()
    }
}

impl AppState {
    pub fn new(engine: RiskEngine, config: AppConfig) -> Self {
        Self {
            engine,
            config: Arc::new(config),
            metrics: None,
        }
    }

    /// Attach the handle `/metrics` renders from.
    pub fn with_metrics(mut self, handle: PrometheusHandle) -> Self {
        self.metrics = Some(handle);
        self
    }
}
