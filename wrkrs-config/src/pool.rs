//! Connection pool sizing.

use serde::Serialize;

use crate::defaults::{DEFAULT_POOL, OptionKey};
use crate::error::{ConfigError, ConfigResult};

/// Sizing handed to the Redis connection pool.
///
/// Built only through [`PoolSettings::new`] or [`Default`], so `max_idle` is
/// always at least 1.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PoolSettings {
    pub(crate) max_idle: u32,
}

impl Default for PoolSettings {
    fn default() -> Self {
        Self {
            max_idle: DEFAULT_POOL,
        }
    }
}

impl PoolSettings {
    /// Create pool settings, rejecting a zero-sized pool.
    pub fn new(max_idle: u32) -> ConfigResult<Self> {
        if max_idle == 0 {
            return Err(ConfigError::out_of_range(OptionKey::Pool, "0"));
        }
        Ok(Self { max_idle })
    }

    /// Maximum number of idle connections.
    pub fn max_idle(&self) -> u32 {
        self.max_idle
    }
}
