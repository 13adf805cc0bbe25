//! The string-keyed options map handed to [`configure`](crate::configure).

use std::collections::HashMap;

use indexmap::IndexMap;

use crate::defaults::OptionKey;
use crate::env::{EnvSource, StdEnvSource};

/// Raw configuration options, exactly as supplied by the bootstrap caller.
///
/// Values stay strings here; they are parsed into typed fields by the
/// builder and never travel further.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Options {
    values: IndexMap<String, String>,
}

impl Options {
    /// Create an empty options map.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set an option.
    pub fn set(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.insert(key, value);
        self
    }

    /// Insert an option, returning the previous value.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) -> Option<String> {
        self.values.insert(key.into(), value.into())
    }

    /// Get the raw value of an option.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.values.get(key).map(String::as_str)
    }

    /// Check if an option is present.
    pub fn contains(&self, key: &str) -> bool {
        self.values.contains_key(key)
    }

    /// Number of options.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Check if no options are set.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Iterate over options in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.values.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// The caller's value for `key` if present and non-empty, else its default.
    ///
    /// Returns `None` only for a required key the caller did not supply.
    pub fn resolve(&self, key: OptionKey) -> Option<&str> {
        self.get(key.as_str())
            .filter(|value| !value.is_empty())
            .or_else(|| key.default_value())
    }

    /// Keys that are not recognized options.
    pub fn unknown_keys(&self) -> impl Iterator<Item = &str> {
        self.values
            .keys()
            .map(String::as_str)
            .filter(|key| OptionKey::parse(key).is_none())
    }

    /// Overlay `other` on top of this map; `other` wins on conflicts.
    pub fn merge(mut self, other: Options) -> Self {
        self.values.extend(other.values);
        self
    }

    /// Collect options from `WRKRS_*` variables in the process environment.
    pub fn from_env() -> Self {
        Self::from_env_source(&StdEnvSource)
    }

    /// Collect options from `WRKRS_*` variables in an environment source.
    ///
    /// Variables that are unset or empty are skipped.
    pub fn from_env_source<S: EnvSource>(source: &S) -> Self {
        OptionKey::ALL
            .into_iter()
            .filter_map(|key| {
                source
                    .get_non_empty(&key.env_var())
                    .map(|value| (key.as_str().to_string(), value))
            })
            .collect()
    }
}

impl From<HashMap<String, String>> for Options {
    fn from(map: HashMap<String, String>) -> Self {
        map.into_iter().collect()
    }
}

impl<K, V> FromIterator<(K, V)> for Options
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut options = Self::new();
        options.extend(iter);
        options
    }
}

impl<K, V> Extend<(K, V)> for Options
where
    K: Into<String>,
    V: Into<String>,
{
    fn extend<I: IntoIterator<Item = (K, V)>>(&mut self, iter: I) {
        for (key, value) in iter {
            self.insert(key, value);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::env::MapEnvSource;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_resolve_applies_defaults() {
        let opts = Options::new().set("server", "localhost:6379");

        assert_eq!(opts.resolve(OptionKey::Server), Some("localhost:6379"));
        assert_eq!(opts.resolve(OptionKey::Process), None);
        assert_eq!(opts.resolve(OptionKey::Pool), Some("1"));
        assert_eq!(opts.resolve(OptionKey::Namespace), Some(""));
    }

    #[test]
    fn test_resolve_treats_empty_as_absent() {
        let opts = Options::new().set("process", "").set("poll_interval", "");

        assert_eq!(opts.resolve(OptionKey::Process), None);
        assert_eq!(opts.resolve(OptionKey::PollInterval), Some("15"));
    }

    #[test]
    fn test_unknown_keys() {
        let opts = Options::new()
            .set("server", "localhost:6379")
            .set("concurrency", "10")
            .set("Pool", "3");

        let unknown: Vec<_> = opts.unknown_keys().collect();
        assert_eq!(unknown, vec!["concurrency", "Pool"]);
    }

    #[test]
    fn test_merge_later_wins() {
        let file = Options::new().set("server", "redis-a:6379").set("pool", "5");
        let flags = Options::new().set("server", "redis-b:6379");

        let merged = file.merge(flags);
        assert_eq!(merged.get("server"), Some("redis-b:6379"));
        assert_eq!(merged.get("pool"), Some("5"));
    }

    #[test]
    fn test_from_env_source() {
        let source = MapEnvSource::new()
            .set("WRKRS_SERVER", "localhost:6379")
            .set("WRKRS_PROCESS", "worker-1")
            .set("WRKRS_POLL_INTERVAL", "3")
            .set("WRKRS_NAMESPACE", "")
            .set("UNRELATED", "x");

        let opts = Options::from_env_source(&source);
        assert_eq!(opts.len(), 3);
        assert_eq!(opts.get("poll_interval"), Some("3"));
        assert!(!opts.contains("namespace"));
    }

    #[test]
    fn test_from_hashmap() {
        let map = HashMap::from([("process".to_string(), "2".to_string())]);
        let opts = Options::from(map);
        assert_eq!(opts.get("process"), Some("2"));
    }
}
