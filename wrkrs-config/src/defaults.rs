//! Recognized option names and their defaults.

use std::fmt;

/// Default maximum number of idle connections.
pub const DEFAULT_POOL: u32 = 1;

/// Default poll interval in seconds.
pub const DEFAULT_POLL_INTERVAL: u64 = 15;

/// Default dial, read and write timeout in milliseconds.
pub const DEFAULT_TIMEOUT_MS: u64 = 500;

/// Prefix for the environment variables that carry options.
pub const ENV_PREFIX: &str = "WRKRS_";

/// Separator appended to a non-empty namespace.
pub const NAMESPACE_SEPARATOR: char = ':';

/// The option names understood by [`configure`](crate::configure).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum OptionKey {
    /// Address of the Redis server.
    Server,
    /// Identifier of this process among its peers.
    Process,
    /// Key prefix.
    Namespace,
    /// Maximum idle connections.
    Pool,
    /// Poll cadence in seconds.
    PollInterval,
    /// Dial timeout in milliseconds.
    DialTimeout,
    /// Read timeout in milliseconds.
    ReadTimeout,
    /// Write timeout in milliseconds.
    WriteTimeout,
}

/// Defaults for every optional key, in table order.
pub const DEFAULTS: &[(OptionKey, &str)] = &[
    (OptionKey::Namespace, ""),
    (OptionKey::Pool, "1"),
    (OptionKey::PollInterval, "15"),
    (OptionKey::DialTimeout, "500"),
    (OptionKey::ReadTimeout, "500"),
    (OptionKey::WriteTimeout, "500"),
];

impl OptionKey {
    /// Every key, required ones first.
    pub const ALL: [OptionKey; 8] = [
        Self::Server,
        Self::Process,
        Self::Namespace,
        Self::Pool,
        Self::PollInterval,
        Self::DialTimeout,
        Self::ReadTimeout,
        Self::WriteTimeout,
    ];

    /// The name used in options maps.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Server => "server",
            Self::Process => "process",
            Self::Namespace => "namespace",
            Self::Pool => "pool",
            Self::PollInterval => "poll_interval",
            Self::DialTimeout => "dial_timeout",
            Self::ReadTimeout => "read_timeout",
            Self::WriteTimeout => "write_timeout",
        }
    }

    /// Look up a key by its options-map name.
    pub fn parse(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|key| key.as_str() == name)
    }

    /// Default value, or `None` for required keys.
    pub fn default_value(&self) -> Option<&'static str> {
        DEFAULTS
            .iter()
            .find(|(key, _)| key == self)
            .map(|(_, value)| *value)
    }

    /// Whether `configure` fails when this key is missing.
    pub fn is_required(&self) -> bool {
        matches!(self, Self::Server | Self::Process)
    }

    /// Whether the value is parsed as an integer.
    pub fn is_numeric(&self) -> bool {
        matches!(
            self,
            Self::Pool | Self::PollInterval | Self::DialTimeout | Self::ReadTimeout | Self::WriteTimeout
        )
    }

    /// Environment variable carrying this option, e.g. `WRKRS_POLL_INTERVAL`.
    pub fn env_var(&self) -> String {
        format!("{}{}", ENV_PREFIX, self.as_str().to_uppercase())
    }

    /// What the option does, phrased to follow "which".
    pub fn describe(&self) -> &'static str {
        match self {
            Self::Server => "identifies a Redis instance",
            Self::Process => "uniquely identifies this instance",
            Self::Namespace => "prefixes every key the framework touches",
            Self::Pool => "caps the number of idle Redis connections",
            Self::PollInterval => "sets how often, in seconds, pollers check for work",
            Self::DialTimeout => "bounds, in milliseconds, connecting to Redis",
            Self::ReadTimeout => "bounds, in milliseconds, reads from Redis",
            Self::WriteTimeout => "bounds, in milliseconds, writes to Redis",
        }
    }
}

impl fmt::Display for OptionKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_roundtrips_names() {
        for key in OptionKey::ALL {
            assert_eq!(OptionKey::parse(key.as_str()), Some(key));
        }
        assert_eq!(OptionKey::parse("pollinterval"), None);
        assert_eq!(OptionKey::parse("Server"), None);
    }

    #[test]
    fn test_required_keys_have_no_default() {
        assert_eq!(OptionKey::Server.default_value(), None);
        assert_eq!(OptionKey::Process.default_value(), None);
        assert!(OptionKey::Server.is_required());
        assert!(!OptionKey::Pool.is_required());
    }

    #[test]
    fn test_default_table_matches_constants() {
        assert_eq!(OptionKey::Namespace.default_value(), Some(""));
        assert_eq!(
            OptionKey::Pool.default_value(),
            Some(DEFAULT_POOL.to_string().as_str())
        );
        assert_eq!(
            OptionKey::PollInterval.default_value(),
            Some(DEFAULT_POLL_INTERVAL.to_string().as_str())
        );
        for key in [
            OptionKey::DialTimeout,
            OptionKey::ReadTimeout,
            OptionKey::WriteTimeout,
        ] {
            assert_eq!(
                key.default_value(),
                Some(DEFAULT_TIMEOUT_MS.to_string().as_str())
            );
        }
    }

    #[test]
    fn test_env_var_names() {
        assert_eq!(OptionKey::Server.env_var(), "WRKRS_SERVER");
        assert_eq!(OptionKey::PollInterval.env_var(), "WRKRS_POLL_INTERVAL");
    }

    #[test]
    fn test_numeric_keys() {
        let numeric: Vec<_> = OptionKey::ALL.into_iter().filter(|k| k.is_numeric()).collect();
        assert_eq!(numeric.len(), 5);
        assert!(!OptionKey::Namespace.is_numeric());
    }
}
