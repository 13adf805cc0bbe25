//! The resolved configuration snapshot.

use std::time::Duration;

use serde::Serialize;

use crate::defaults::{DEFAULT_POLL_INTERVAL, DEFAULT_TIMEOUT_MS};
use crate::pool::PoolSettings;

/// Validated, fully-resolved configuration for a worker process.
///
/// Built only by [`configure`](crate::configure) and immutable afterwards.
/// Every numeric field is strictly positive, and `namespace` is either empty
/// or ends with exactly one `:`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Configuration {
    pub(crate) server: String,
    pub(crate) process_id: String,
    pub(crate) namespace: String,
    pub(crate) poll_interval_secs: u64,
    pub(crate) pool: PoolSettings,
    pub(crate) dial_timeout_ms: u64,
    pub(crate) read_timeout_ms: u64,
    pub(crate) write_timeout_ms: u64,
}

impl Default for Configuration {
    /// The unconfigured snapshot: no identity, defaults everywhere else.
    fn default() -> Self {
        Self {
            server: String::new(),
            process_id: String::new(),
            namespace: String::new(),
            poll_interval_secs: DEFAULT_POLL_INTERVAL,
            pool: PoolSettings::default(),
            dial_timeout_ms: DEFAULT_TIMEOUT_MS,
            read_timeout_ms: DEFAULT_TIMEOUT_MS,
            write_timeout_ms: DEFAULT_TIMEOUT_MS,
        }
    }
}

impl Configuration {
    /// Create a builder for configuration.
    pub fn builder() -> crate::ConfigurationBuilder {
        crate::ConfigurationBuilder::new()
    }

    /// Address of the Redis server.
    pub fn server(&self) -> &str {
        &self.server
    }

    /// Identifier of this process among peers sharing the server.
    pub fn process_id(&self) -> &str {
        &self.process_id
    }

    /// Key prefix, empty or ending in `:`.
    pub fn namespace(&self) -> &str {
        &self.namespace
    }

    /// Prefix `suffix` with the namespace.
    pub fn namespaced_key(&self, suffix: &str) -> String {
        let mut key = String::with_capacity(self.namespace.len() + suffix.len());
        key.push_str(&self.namespace);
        key.push_str(suffix);
        key
    }

    /// Poll cadence in seconds.
    pub fn poll_interval_secs(&self) -> u64 {
        self.poll_interval_secs
    }

    /// Poll cadence.
    pub fn poll_interval(&self) -> Duration {
        Duration::from_secs(self.poll_interval_secs)
    }

    /// Connection pool sizing.
    pub fn pool(&self) -> PoolSettings {
        self.pool
    }

    /// Dial timeout in milliseconds.
    pub fn dial_timeout_ms(&self) -> u64 {
        self.dial_timeout_ms
    }

    /// Read timeout in milliseconds.
    pub fn read_timeout_ms(&self) -> u64 {
        self.read_timeout_ms
    }

    /// Write timeout in milliseconds.
    pub fn write_timeout_ms(&self) -> u64 {
        self.write_timeout_ms
    }

    /// Dial timeout.
    pub fn dial_timeout(&self) -> Duration {
        Duration::from_millis(self.dial_timeout_ms)
    }

    /// Read timeout.
    pub fn read_timeout(&self) -> Duration {
        Duration::from_millis(self.read_timeout_ms)
    }

    /// Write timeout.
    pub fn write_timeout(&self) -> Duration {
        Duration::from_millis(self.write_timeout_ms)
    }

    /// Whether this snapshot came from a successful `configure`.
    pub fn is_configured(&self) -> bool {
        !self.server.is_empty() && !self.process_id.is_empty()
    }
}
