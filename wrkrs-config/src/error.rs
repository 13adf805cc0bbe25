//! Configuration error types.

use thiserror::Error;

use crate::defaults::OptionKey;

/// Result type for configuration operations.
pub type ConfigResult<T> = Result<T, ConfigError>;

/// Errors raised while building a [`Configuration`](crate::Configuration).
///
/// Every variant is fatal: the same input always reproduces the same error,
/// so callers should report it and stop rather than retry.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// A required option was absent or empty.
    ///
    /// The message text is stable across releases.
    #[error("Configure requires a '{}' option, which {}", .name, .name.describe())]
    MissingRequiredOption {
        /// The missing option.
        name: OptionKey,
    },

    /// A numeric option could not be parsed as an integer.
    #[error("Configure option '{key}' must be an integer, got '{value}'")]
    InvalidNumericOption {
        /// The offending option.
        key: OptionKey,
        /// The raw value supplied by the caller.
        value: String,
    },

    /// A numeric option parsed but was not strictly positive.
    #[error("Configure option '{key}' must be greater than zero, got '{value}'")]
    OptionOutOfRange {
        /// The offending option.
        key: OptionKey,
        /// The raw value supplied by the caller.
        value: String,
    },
}

impl ConfigError {
    /// Create a missing-option error.
    pub fn missing(name: OptionKey) -> Self {
        Self::MissingRequiredOption { name }
    }

    /// Create an invalid-numeric error.
    pub fn invalid_numeric(key: OptionKey, value: impl Into<String>) -> Self {
        Self::InvalidNumericOption {
            key,
            value: value.into(),
        }
    }

    /// Create an out-of-range error.
    pub fn out_of_range(key: OptionKey, value: impl Into<String>) -> Self {
        Self::OptionOutOfRange {
            key,
            value: value.into(),
        }
    }

    /// The option this error refers to.
    pub fn key(&self) -> OptionKey {
        match self {
            Self::MissingRequiredOption { name } => *name,
            Self::InvalidNumericOption { key, .. } | Self::OptionOutOfRange { key, .. } => *key,
        }
    }

    /// Check if this is a missing-option error.
    pub fn is_missing_option(&self) -> bool {
        matches!(self, Self::MissingRequiredOption { .. })
    }
}
