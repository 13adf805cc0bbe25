//! wrkrs CLI - bootstrap caller for the wrkrs configuration gateway.
//!
//! Assembles the options map from a `wrkrs.toml` file, `WRKRS_*`
//! environment variables and command-line flags, then validates or prints
//! the resolved configuration.

pub mod cli;
pub mod commands;
pub mod error;
pub mod output;
pub mod sources;
