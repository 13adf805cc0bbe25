//! # wrkrs
//!
//! Configuration gateway for a Redis-backed background job framework.
//!
//! A worker process is configured once at startup from a flat map of string
//! options. The gateway checks the required identity (`server`, `process`),
//! applies defaults, parses the numeric settings and normalizes the key
//! namespace. The resulting [`Configuration`] is what the connection pool,
//! poller and manager are built from.
//!
//! ## Quick Start
//!
//! ```rust
//! use wrkrs::prelude::*;
//!
//! fn main() -> Result<(), ConfigError> {
//!     let state = ConfigState::new();
//!
//!     state.configure(
//!         &Options::new()
//!             .set("server", "localhost:6379")
//!             .set("process", "worker-1")
//!             .set("namespace", "prod"),
//!     )?;
//!
//!     let config = state.current();
//!     assert_eq!(config.namespaced_key("queue:default"), "prod:queue:default");
//!     assert_eq!(config.poll_interval_secs(), 15);
//!     Ok(())
//! }
//! ```

#![cfg_attr(docsrs, feature(doc_cfg))]
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

/// Configuration types, builder and state.
pub mod config {
    pub use wrkrs_config::*;
}

/// Logging bootstrap.
pub use wrkrs_config::logging;

/// Prelude module for convenient imports.
pub mod prelude {
    pub use wrkrs_config::prelude::*;
    pub use wrkrs_config::{OptionKey, PoolSettings};
}

// Re-export key types at the crate root
pub use wrkrs_config::{
    ConfigError, ConfigResult, ConfigState, Configuration, ConfigurationBuilder, OptionKey,
    Options, PoolSettings, configure, configure_global, global,
};
