//! Building a [`Configuration`] from an options map.

use std::str::FromStr;

use tracing::{debug, warn};

use crate::defaults::{NAMESPACE_SEPARATOR, OptionKey};
use crate::error::{ConfigError, ConfigResult};
use crate::options::Options;
use crate::pool::PoolSettings;
use crate::snapshot::Configuration;

/// Validate `options`, apply defaults and produce a configuration snapshot.
///
/// `server` is checked before `process`; numeric options are parsed
/// strictly and must be greater than zero. Nothing is published anywhere:
/// see [`ConfigState::configure`](crate::ConfigState::configure) for that.
///
/// # Examples
///
/// ```rust
/// use wrkrs_config::{configure, Options};
///
/// let options = Options::new()
///     .set("server", "localhost:6379")
///     .set("process", "1")
///     .set("namespace", "prod")
///     .set("pool", "20");
///
/// let config = configure(&options).unwrap();
/// assert_eq!(config.namespace(), "prod:");
/// assert_eq!(config.pool().max_idle(), 20);
/// assert_eq!(config.poll_interval_secs(), 15);
/// ```
pub fn configure(options: &Options) -> ConfigResult<Configuration> {
    let server = required(options, OptionKey::Server)?;
    let process_id = required(options, OptionKey::Process)?;

    for key in options.unknown_keys() {
        warn!(key = %key, "Ignoring unrecognized configure option");
    }

    let pool = PoolSettings::new(positive(options, OptionKey::Pool)?)?;

    let config = Configuration {
        server,
        process_id,
        namespace: normalize_namespace(options.resolve(OptionKey::Namespace).unwrap_or_default()),
        poll_interval_secs: positive(options, OptionKey::PollInterval)?,
        pool,
        dial_timeout_ms: positive(options, OptionKey::DialTimeout)?,
        read_timeout_ms: positive(options, OptionKey::ReadTimeout)?,
        write_timeout_ms: positive(options, OptionKey::WriteTimeout)?,
    };

    debug!(
        server = %config.server,
        process = %config.process_id,
        namespace = %config.namespace,
        pool = config.pool.max_idle,
        poll_interval_secs = config.poll_interval_secs,
        dial_timeout_ms = config.dial_timeout_ms,
        read_timeout_ms = config.read_timeout_ms,
        write_timeout_ms = config.write_timeout_ms,
        "Configuration resolved"
    );

    Ok(config)
}

fn required(options: &Options, key: OptionKey) -> ConfigResult<String> {
    options
        .resolve(key)
        .map(String::from)
        .ok_or_else(|| ConfigError::missing(key))
}

fn positive<T>(options: &Options, key: OptionKey) -> ConfigResult<T>
where
    T: FromStr + Default + PartialEq,
{
    let raw = options.resolve(key).unwrap_or_default();
    let value: T = raw
        .parse()
        .map_err(|_| ConfigError::invalid_numeric(key, raw))?;

    if value == T::default() {
        return Err(ConfigError::out_of_range(key, raw));
    }

    Ok(value)
}

/// Trailing separators collapse to one; an all-separator value becomes empty.
fn normalize_namespace(raw: &str) -> String {
    let trimmed = raw.trim_end_matches(NAMESPACE_SEPARATOR);
    if trimmed.is_empty() {
        return String::new();
    }

    let mut namespace = String::with_capacity(trimmed.len() + 1);
    namespace.push_str(trimmed);
    namespace.push(NAMESPACE_SEPARATOR);
    namespace
}

/// Typed builder that renders to an [`Options`] map and runs [`configure`].
///
/// ```rust
/// use wrkrs_config::Configuration;
///
/// let config = Configuration::builder()
///     .server("localhost:6379")
///     .process("worker-1")
///     .poll_interval(1)
///     .build()
///     .unwrap();
///
/// assert_eq!(config.poll_interval_secs(), 1);
/// ```
#[derive(Debug, Clone, Default)]
pub struct ConfigurationBuilder {
    options: Options,
}

impl ConfigurationBuilder {
    /// Create a new builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the Redis server address.
    pub fn server(self, server: impl Into<String>) -> Self {
        self.option(OptionKey::Server.as_str(), server)
    }

    /// Set the process identifier.
    pub fn process(self, process: impl Into<String>) -> Self {
        self.option(OptionKey::Process.as_str(), process)
    }

    /// Set the key namespace.
    pub fn namespace(self, namespace: impl Into<String>) -> Self {
        self.option(OptionKey::Namespace.as_str(), namespace)
    }

    /// Set the maximum idle connections.
    pub fn pool(self, max_idle: u32) -> Self {
        self.option(OptionKey::Pool.as_str(), max_idle.to_string())
    }

    /// Set the poll interval in seconds.
    pub fn poll_interval(self, secs: u64) -> Self {
        self.option(OptionKey::PollInterval.as_str(), secs.to_string())
    }

    /// Set the dial timeout in milliseconds.
    pub fn dial_timeout(self, ms: u64) -> Self {
        self.option(OptionKey::DialTimeout.as_str(), ms.to_string())
    }

    /// Set the read timeout in milliseconds.
    pub fn read_timeout(self, ms: u64) -> Self {
        self.option(OptionKey::ReadTimeout.as_str(), ms.to_string())
    }

    /// Set the write timeout in milliseconds.
    pub fn write_timeout(self, ms: u64) -> Self {
        self.option(OptionKey::WriteTimeout.as_str(), ms.to_string())
    }

    /// Set a raw option.
    pub fn option(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.options.insert(key, value);
        self
    }

    /// Validate and build the configuration.
    pub fn build(self) -> ConfigResult<Configuration> {
        configure(&self.options)
    }
}
