//! CLI error types and result alias.

use miette::Diagnostic;
use thiserror::Error;
use wrkrs_config::ConfigError;

/// Result type alias for CLI operations
pub type CliResult<T> = Result<T, CliError>;

/// CLI error types
#[derive(Error, Debug, Diagnostic)]
pub enum CliError {
    /// IO error
    #[error("IO error: {0}")]
    #[diagnostic(code(wrkrs::io))]
    Io(#[from] std::io::Error),

    /// Options file error
    #[error("Configuration error: {0}")]
    #[diagnostic(code(wrkrs::config))]
    Config(String),

    /// Options rejected by `configure`
    #[error(transparent)]
    #[diagnostic(code(wrkrs::configure))]
    Configure(#[from] ConfigError),

    /// Output formatting error
    #[error("Format error: {0}")]
    #[diagnostic(code(wrkrs::format))]
    Format(String),
}

impl From<toml::de::Error> for CliError {
    fn from(err: toml::de::Error) -> Self {
        CliError::Config(format!("Failed to parse TOML: {}", err))
    }
}

impl From<toml::ser::Error> for CliError {
    fn from(err: toml::ser::Error) -> Self {
        CliError::Format(format!("Failed to serialize TOML: {}", err))
    }
}

impl From<serde_json::Error> for CliError {
    fn from(err: serde_json::Error) -> Self {
        CliError::Format(format!("Failed to serialize JSON: {}", err))
    }
}
