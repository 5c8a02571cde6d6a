//! Logging initialisation for the tsunagi CLI.
//!
//! Installs a global `tracing` subscriber writing to stderr and bridges the
//! `log` facade so crates using either API emit structured events. The
//! output format is selected via `TSUNAGI_LOG_FORMAT` and the filter via
//! `RUST_LOG`.

use std::{env, sync::OnceLock};

use thiserror::Error;
use tracing_log::LogTracer;
use tracing_subscriber::{
    EnvFilter, Layer, fmt::format::FmtSpan, layer::SubscriberExt, util::SubscriberInitExt,
};

const LOG_FORMAT_ENV: &str = "TSUNAGI_LOG_FORMAT";

static INSTALLED: OnceLock<()> = OnceLock::new();

/// Output formats the subscriber can be configured with.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
enum LogFormat {
    /// Human-readable single-line events.
    Human,
    /// Newline-delimited JSON events.
    Json,
}

/// Errors raised while initialising structured logging.
#[derive(Debug, Error)]
pub enum LoggingError {
    /// An environment variable held invalid UTF-8.
    #[error("environment variable `{name}` is not valid UTF-8: {source}")]
    NonUnicode {
        /// Name of the offending environment variable.
        name: &'static str,
        /// Underlying lookup failure.
        #[source]
        source: env::VarError,
    },
    /// The requested log format is not recognised.
    #[error("unknown log format `{provided}`; expected `human` or `json`")]
    UnknownFormat {
        /// Raw value supplied by the user.
        provided: String,
    },
    /// The global tracing subscriber could not be installed.
    #[error("failed to install tracing subscriber: {source}")]
    Install {
        /// Error raised by `tracing_subscriber`.
        #[source]
        source: tracing_subscriber::util::TryInitError,
    },
}

/// Install global structured logging if it has not already been configured.
///
/// Defaults to human-readable output; set `TSUNAGI_LOG_FORMAT=json` for
/// newline-delimited JSON. Events go to stderr so the connectivity output
/// on stdout stays parseable. The filter is read from `RUST_LOG` and falls
/// back to `info`.
///
/// # Errors
/// Returns [`LoggingError`] when the format variable holds invalid Unicode
/// or an unknown format, or when the subscriber cannot be installed.
pub fn init_logging() -> Result<(), LoggingError> {
    if INSTALLED.get().is_some() {
        return Ok(());
    }

    match install_subscriber() {
        Ok(()) => {}
        Err(LoggingError::Install { source }) => {
            // Another subscriber (a test harness, usually) won the race;
            // keep its configuration.
            eprintln!("structured logging already configured elsewhere: {source}");
        }
        Err(err) => return Err(err),
    }
    let _ = INSTALLED.set(());
    Ok(())
}

fn install_subscriber() -> Result<(), LoggingError> {
    let format = resolve_log_format()?;

    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    let fmt_layer = tracing_subscriber::fmt::layer()
        .with_span_events(FmtSpan::FULL)
        .with_writer(std::io::stderr);

    let fmt_layer = match format {
        LogFormat::Human => fmt_layer.boxed(),
        LogFormat::Json => fmt_layer
            .json()
            .with_current_span(true)
            .with_span_list(true)
            .boxed(),
    };

    // Best-effort: if another logger already owns the `log` facade, keep it.
    let _ = LogTracer::init();

    tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt_layer)
        .try_init()
        .map_err(|source| LoggingError::Install { source })
}

fn resolve_log_format() -> Result<LogFormat, LoggingError> {
    match env::var(LOG_FORMAT_ENV) {
        Ok(raw) => parse_log_format(&raw),
        Err(env::VarError::NotPresent) => Ok(LogFormat::Human),
        Err(err @ env::VarError::NotUnicode(_)) => Err(LoggingError::NonUnicode {
            name: LOG_FORMAT_ENV,
            source: err,
        }),
    }
}

fn parse_log_format(raw: &str) -> Result<LogFormat, LoggingError> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "human" => Ok(LogFormat::Human),
        "json" => Ok(LogFormat::Json),
        other => Err(LoggingError::UnknownFormat {
            provided: other.to_owned(),
        }),
    }
}
