//! # wrkrs-config
//!
//! Configuration gateway for the wrkrs Redis-backed job framework.
//!
//! Every setting arrives as a string (typically from environment variables
//! or command-line flags). [`configure`] validates the required identity,
//! fills in defaults, parses numbers and normalizes the namespace, producing
//! an immutable [`Configuration`]. A [`ConfigState`] holds the snapshot in
//! effect and is handed to the components that need it.
//!
//! | option | required | default |
//! |---|---|---|
//! | `server` | yes | |
//! | `process` | yes | |
//! | `namespace` | no | `""` |
//! | `pool` | no | `1` |
//! | `poll_interval` | no | `15` (seconds) |
//! | `dial_timeout` | no | `500` (ms) |
//! | `read_timeout` | no | `500` (ms) |
//! | `write_timeout` | no | `500` (ms) |
//!
//! ## Example
//!
//! ```rust
//! use wrkrs_config::{ConfigState, Options};
//!
//! let state = ConfigState::new();
//! assert_eq!(state.current().pool().max_idle(), 1);
//!
//! state
//!     .configure(&Options::new().set("server", "localhost:6379").set("process", "2"))
//!     .unwrap();
//!
//! let config = state.current();
//! assert_eq!(config.process_id(), "2");
//! assert_eq!(config.dial_timeout_ms(), 500);
//!
//! let err = state.configure(&Options::new().set("process", "2")).unwrap_err();
//! assert_eq!(
//!     err.to_string(),
//!     "Configure requires a 'server' option, which identifies a Redis instance"
//! );
//! ```

pub mod builder;
pub mod defaults;
pub mod env;
pub mod error;
pub mod logging;
pub mod options;
pub mod pool;
pub mod snapshot;
pub mod state;

pub use builder::{ConfigurationBuilder, configure};
pub use defaults::{DEFAULTS, OptionKey};
pub use env::{EnvSource, MapEnvSource, StdEnvSource};
pub use error::{ConfigError, ConfigResult};
pub use options::Options;
pub use pool::PoolSettings;
pub use snapshot::Configuration;
pub use state::{ConfigState, configure_global, global};

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::builder::{ConfigurationBuilder, configure};
    pub use crate::error::{ConfigError, ConfigResult};
    pub use crate::options::Options;
    pub use crate::snapshot::Configuration;
    pub use crate::state::ConfigState;
}
