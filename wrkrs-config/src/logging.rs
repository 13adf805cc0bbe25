//! Logging bootstrap for wrkrs processes.
//!
//! Structured logging is controlled by environment variables:
//!
//! - `WRKRS_DEBUG=true|1|yes` - enable debug logging
//! - `WRKRS_LOG_LEVEL=trace|debug|info|warn|error` - set a specific level
//! - `WRKRS_LOG_FORMAT=json|pretty|compact` - output format (default: json)
//!
//! ```rust,no_run
//! use wrkrs_config::logging;
//!
//! // Call once at startup, before `configure`.
//! logging::init();
//! ```
//!
//! Events are written to stderr so they never interleave with documents a
//! command prints on stdout.
//!
//! Installing a subscriber requires the `tracing-subscriber` feature.
//! Without it, events go to whatever subscriber the application installs.

use std::sync::Once;

use crate::env::{EnvSource, StdEnvSource};

static INIT: Once = Once::new();

/// Output format for log events.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogFormat {
    /// One JSON object per event.
    #[default]
    Json,
    /// Multi-line human-readable output.
    Pretty,
    /// Single-line human-readable output.
    Compact,
}

impl LogFormat {
    /// Parse from string; unknown values fall back to JSON.
    pub fn parse(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "pretty" => Self::Pretty,
            "compact" => Self::Compact,
            _ => Self::Json,
        }
    }

    /// Convert to string.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Json => "json",
            Self::Pretty => "pretty",
            Self::Compact => "compact",
        }
    }
}

/// Logging settings read from the environment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogSettings {
    /// Whether logging was requested at all.
    pub enabled: bool,
    /// Level applied to the wrkrs crates.
    pub level: &'static str,
    /// Output format.
    pub format: LogFormat,
}

impl LogSettings {
    /// Read settings from the process environment.
    pub fn from_env() -> Self {
        Self::from_source(&StdEnvSource)
    }

    /// Read settings from an environment source.
    ///
    /// The level defaults to `debug` when `WRKRS_DEBUG` is set and to `warn`
    /// otherwise; an unrecognized `WRKRS_LOG_LEVEL` is ignored.
    pub fn from_source<S: EnvSource>(source: &S) -> Self {
        let debug = source
            .get("WRKRS_DEBUG")
            .map(|v| matches!(v.to_lowercase().as_str(), "true" | "1" | "yes"))
            .unwrap_or(false);
        let explicit = source.get("WRKRS_LOG_LEVEL").and_then(|l| parse_level(&l));

        let level = explicit.unwrap_or(if debug { "debug" } else { "warn" });
        let format = source
            .get("WRKRS_LOG_FORMAT")
            .map(|f| LogFormat::parse(&f))
            .unwrap_or_default();

        Self {
            enabled: debug || source.contains("WRKRS_LOG_LEVEL"),
            level,
            format,
        }
    }

    /// Force logging on at `level`; an unrecognized level means `warn`.
    pub fn with_level(mut self, level: &str) -> Self {
        self.level = parse_level(level).unwrap_or("warn");
        self.enabled = true;
        self
    }

    /// Filter directive covering the wrkrs crates.
    pub fn directive(&self) -> String {
        format!(
            "wrkrs={},wrkrs_config={},wrkrs_cli={}",
            self.level, self.level, self.level
        )
    }
}

fn parse_level(level: &str) -> Option<&'static str> {
    match level.to_lowercase().as_str() {
        "trace" => Some("trace"),
        "debug" => Some("debug"),
        "info" => Some("info"),
        "warn" => Some("warn"),
        "error" => Some("error"),
        _ => None,
    }
}

/// Initialize logging from the environment.
///
/// Subsequent calls are no-ops. Does nothing unless `WRKRS_DEBUG` or
/// `WRKRS_LOG_LEVEL` is set.
pub fn init() {
    let settings = LogSettings::from_env();
    if settings.enabled {
        install(settings);
    }
}

/// Initialize logging at `level`, ignoring `WRKRS_DEBUG`/`WRKRS_LOG_LEVEL`.
pub fn init_with_level(level: &str) {
    install(LogSettings::from_env().with_level(level));
}

fn install(settings: LogSettings) {
    INIT.call_once(|| {
        #[cfg(feature = "tracing-subscriber")]
        {
            use tracing_subscriber::{EnvFilter, fmt, prelude::*};

            let filter = EnvFilter::try_new(settings.directive())
                .unwrap_or_else(|_| EnvFilter::new("warn"));

            let registry = tracing_subscriber::registry().with(filter);
            let layer = fmt::layer().with_writer(std::io::stderr);
            let installed = match settings.format {
                LogFormat::Json => registry.with(layer.json()).try_init(),
                LogFormat::Compact => registry.with(layer.compact()).try_init(),
                LogFormat::Pretty => registry.with(layer.pretty()).try_init(),
            };

            if installed.is_ok() {
                tracing::info!(
                    level = settings.level,
                    format = settings.format.as_str(),
                    "wrkrs logging initialized"
                );
            }
        }

        #[cfg(not(feature = "tracing-subscriber"))]
        {
            let _ = settings;
        }
    });
}
