//! Logging and request tracing shared by the HR Intelligence binaries.
//!
//! `RUST_LOG` drives filtering. Output goes to stdout as compact text or
//! JSON lines, and optionally to a daily-rotated file as well.

use std::path::PathBuf;

use axum::{body::Body, Router};
use http::{HeaderName, Request};
use tower_http::{
    request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer},
    trace::TraceLayer,
};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Layer, Registry};

pub const REQUEST_ID_HEADER: &str = "x-request-id";

const LOG_FILE_PREFIX: &str = "hr-intelligence.log";

/// `hr_intelligence` is the binary's own target.
const DEFAULT_FILTER: &str =
    "warn,hr_intelligence=info,hr_intelligence_server=info,hr_intelligence_core=info,tower_http=info";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogFormat {
    #[default]
    Text,
    Json,
}

impl LogFormat {
    /// `json` (any case) selects JSON lines; anything else is text.
    pub fn parse(value: &str) -> Self {
        if value.trim().eq_ignore_ascii_case("json") {
            LogFormat::Json
        } else {
            LogFormat::Text
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogConfig {
    pub format: LogFormat,
    /// When set, logs are also written to `<dir>/hr-intelligence.log.<date>`.
    pub dir: Option<PathBuf>,
    /// Filter used when `RUST_LOG` is unset or invalid.
    pub default_filter: String,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            format: LogFormat::Text,
            dir: None,
            default_filter: DEFAULT_FILTER.to_string(),
        }
    }
}

/// Keeps the non-blocking file writer flushing. Hold it for the life of the
/// process.
#[must_use]
pub struct TracingGuard {
    _file: Option<WorkerGuard>,
}

pub fn init_tracing(config: &LogConfig) -> anyhow::Result<TracingGuard> {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.default_filter));

    let mut layers: Vec<Box<dyn Layer<Registry> + Send + Sync>> = Vec::new();
    layers.push(match config.format {
        LogFormat::Json => tracing_subscriber::fmt::layer().json().boxed(),
        LogFormat::Text => tracing_subscriber::fmt::layer().compact().boxed(),
    });

    let mut file_guard = None;
    if let Some(dir) = &config.dir {
        std::fs::create_dir_all(dir)?;
        let appender = tracing_appender::rolling::daily(dir, LOG_FILE_PREFIX);
        let (writer, guard) = tracing_appender::non_blocking(appender);
        file_guard = Some(guard);
        let file_layer = tracing_subscriber::fmt::layer()
            .with_ansi(false)
            .with_writer(writer);
        layers.push(match config.format {
            LogFormat::Json => file_layer.json().boxed(),
            LogFormat::Text => file_layer.boxed(),
        });
    }

    tracing_subscriber::registry()
        .with(layers)
        .with(filter)
        .try_init()?;

    Ok(TracingGuard { _file: file_guard })
}

/// Wrap `router` so every request carries an `x-request-id` (generated when
/// the caller sent none), echoes it on the response, and runs inside an
/// `http_request` span tagged with it.
pub fn with_request_tracing<S>(router: Router<S>) -> Router<S>
where
    S: Clone + Send + Sync + 'static,
{
    let header = HeaderName::from_static(REQUEST_ID_HEADER);
    let span_header = header.clone();

    let trace = TraceLayer::new_for_http().make_span_with(move |request: &Request<Body>| {
        let request_id = request
            .headers()
            .get(&span_header)
            .and_then(|value| value.to_str().ok())
            .unwrap_or("");

        tracing::info_span!(
            "http_request",
            method = %request.method(),
            uri = %request.uri(),
            request_id = %request_id,
        )
    });

    router
        .layer(trace)
        .layer(PropagateRequestIdLayer::new(header.clone()))
        .layer(SetRequestIdLayer::new(header, MakeRequestUuid))
}
