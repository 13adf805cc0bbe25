//! Where `WRKRS_*` variables are read from.
//!
//! [`Options::from_env`](crate::Options::from_env) and
//! [`LogSettings::from_env`](crate::logging::LogSettings::from_env) read the
//! process environment through [`StdEnvSource`]. Tests hand the `_source`
//! variants a [`MapEnvSource`] instead, so they never mutate process state.

use std::collections::HashMap;

/// A lookup of `WRKRS_*` variables by name.
pub trait EnvSource: Send + Sync {
    /// The raw value of `name`, empty values included.
    fn get(&self, name: &str) -> Option<String>;

    /// Whether `name` is set at all, even to an empty string.
    fn contains(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    /// The value of `name`, with an empty value reported as unset.
    ///
    /// Options use this, so `WRKRS_NAMESPACE=` falls back to the default.
    fn get_non_empty(&self, name: &str) -> Option<String> {
        self.get(name).filter(|value| !value.is_empty())
    }
}

/// The real process environment.
#[derive(Debug, Clone, Copy, Default)]
pub struct StdEnvSource;

impl EnvSource for StdEnvSource {
    fn get(&self, name: &str) -> Option<String> {
        std::env::var(name).ok()
    }
}

/// A fixed set of variables, for tests and embedding.
#[derive(Debug, Clone, Default)]
pub struct MapEnvSource {
    vars: HashMap<String, String>,
}

impl MapEnvSource {
    /// An environment with no variables set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set `name` to `value`.
    pub fn set(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.vars.insert(name.into(), value.into());
        self
    }
}

impl<K, V> FromIterator<(K, V)> for MapEnvSource
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            vars: iter
                .into_iter()
                .map(|(name, value)| (name.into(), value.into()))
                .collect(),
        }
    }
}

impl EnvSource for MapEnvSource {
    fn get(&self, name: &str) -> Option<String> {
        self.vars.get(name).cloned()
    }
}
