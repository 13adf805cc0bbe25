//! Holder for the configuration in effect.
//!
//! Worker, manager and poller components are handed a [`ConfigState`] (or
//! the `Arc<Configuration>` it yields) at construction. Tests build their
//! own instance, so nothing needs resetting between them.
//!
//! Bootstrap code that prefers a single ambient instance can use
//! [`global`] and [`configure_global`] instead.

use std::sync::{Arc, OnceLock};

use parking_lot::RwLock;
use tracing::{error, info};

use crate::builder::configure;
use crate::error::ConfigResult;
use crate::options::Options;
use crate::snapshot::Configuration;

/// The configuration snapshot in effect for a process.
///
/// Starts out as [`Configuration::default`]. Each successful
/// [`configure`](Self::configure) replaces the snapshot wholesale; a failed
/// one leaves it untouched.
#[derive(Debug, Default)]
pub struct ConfigState {
    current: RwLock<Arc<Configuration>>,
}

impl ConfigState {
    /// Create a state holding the unconfigured snapshot.
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a snapshot from `options` and make it current.
    pub fn configure(&self, options: &Options) -> ConfigResult<()> {
        let config = configure(options).inspect_err(|e| {
            error!(error = %e, "Configure rejected options");
        })?;
        self.replace(config);
        Ok(())
    }

    /// Make `config` current, returning the snapshot it displaced.
    ///
    /// Only reached through [`configure`](Self::configure), so the state never
    /// holds a snapshot the builder did not produce.
    pub(crate) fn replace(&self, config: Configuration) -> Arc<Configuration> {
        info!(
            server = %config.server(),
            process = %config.process_id(),
            namespace = %config.namespace(),
            "Configuration applied"
        );
        std::mem::replace(&mut *self.current.write(), Arc::new(config))
    }

    /// The snapshot in effect.
    pub fn current(&self) -> Arc<Configuration> {
        self.current.read().clone()
    }
}

static GLOBAL: OnceLock<ConfigState> = OnceLock::new();

/// The process-wide configuration state.
pub fn global() -> &'static ConfigState {
    GLOBAL.get_or_init(ConfigState::new)
}

/// Configure the process-wide state.
///
/// Call once on the main thread before starting workers.
pub fn configure_global(options: &Options) -> ConfigResult<()> {
    global().configure(options)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ConfigError;
    use crate::defaults::OptionKey;
    use pretty_assertions::assert_eq;

    fn options(process: &str) -> Options {
        Options::new()
            .set("server", "localhost:6379")
            .set("process", process)
    }

    #[test]
    fn test_starts_unconfigured() {
        let state = ConfigState::new();
        let config = state.current();

        assert!(!config.is_configured());
        assert_eq!(config.pool().max_idle(), 1);
    }

    #[test]
    fn test_configure_replaces_snapshot() {
        let state = ConfigState::new();

        state.configure(&options("1").set("pool", "20")).unwrap();
        assert_eq!(state.current().pool().max_idle(), 20);
        assert_eq!(state.current().process_id(), "1");

        state.configure(&options("2")).unwrap();
        let config = state.current();
        assert_eq!(config.process_id(), "2");
        assert_eq!(config.pool().max_idle(), 1);
    }

    #[test]
    fn test_failed_configure_keeps_previous() {
        let state = ConfigState::new();
        state.configure(&options("1").set("namespace", "prod")).unwrap();
        let before = state.current();

        let err = state.configure(&Options::new().set("process", "2")).unwrap_err();
        assert_eq!(err, ConfigError::missing(OptionKey::Server));

        let err = state.configure(&options("3").set("pool", "lots")).unwrap_err();
        assert_eq!(err.key(), OptionKey::Pool);

        assert_eq!(state.current(), before);
    }

    #[test]
    fn test_readers_keep_their_snapshot() {
        let state = ConfigState::new();
        state.configure(&options("1")).unwrap();
        let held = state.current();

        state.configure(&options("2")).unwrap();
        assert_eq!(held.process_id(), "1");
        assert_eq!(state.current().process_id(), "2");
    }

    #[test]
    fn test_only_built_snapshots_are_published() {
        let state = ConfigState::new();

        assert!(state.configure(&Options::new()).is_err());
        assert!(!state.current().is_configured());

        state.configure(&options("1")).unwrap();
        assert!(state.current().is_configured());

        assert!(state.configure(&Options::new()).is_err());
        assert!(state.current().is_configured());
    }

    #[test]
    fn test_replace_returns_previous() {
        let state = ConfigState::new();
        let new = configure(&options("9")).unwrap();

        let previous = state.replace(new.clone());
        assert!(!previous.is_configured());
        assert_eq!(*state.current(), new);
    }

    #[test]
    fn test_global_is_shared() {
        assert!(std::ptr::eq(global(), global()));
    }
}
