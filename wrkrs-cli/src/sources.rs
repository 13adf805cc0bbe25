//! Assembling the options map from files, environment and flags.

use std::path::{Path, PathBuf};

use indexmap::IndexMap;
use serde::Deserialize;
use tracing::debug;
use wrkrs_config::Options;

use crate::cli::SourceArgs;
use crate::error::{CliError, CliResult};

/// Default options file name (looked up in the working directory)
pub const CONFIG_FILE_NAME: &str = "wrkrs.toml";

/// On-disk options file.
///
/// ```toml
/// [wrkrs]
/// server = "localhost:6379"
/// process = "worker-1"
/// pool = 20
/// ```
#[derive(Debug, Default, Deserialize)]
struct OptionsFile {
    #[serde(default)]
    wrkrs: IndexMap<String, toml::Value>,
}

/// Options resolved from every source, plus where they came from.
#[derive(Debug, Default)]
pub struct CollectedOptions {
    /// The merged options map.
    pub options: Options,
    /// Options file that was read, if any.
    pub file: Option<PathBuf>,
    /// Number of options taken from the environment.
    pub from_env: usize,
    /// Number of options given as flags.
    pub from_flags: usize,
}

/// Parse an options file. Values must be strings or integers.
pub fn parse_options_file(content: &str) -> CliResult<Options> {
    let file: OptionsFile = toml::from_str(content)?;

    file.wrkrs
        .into_iter()
        .map(|(key, value)| match value {
            toml::Value::String(s) => Ok((key, s)),
            toml::Value::Integer(n) => Ok((key, n.to_string())),
            other => Err(CliError::Config(format!(
                "option '{}' must be a string or integer, got {}",
                key,
                other.type_str()
            ))),
        })
        .collect()
}

/// Read and parse an options file.
pub async fn load_options_file(path: &Path) -> CliResult<Options> {
    let content = tokio::fs::read_to_string(path).await.map_err(|e| {
        CliError::Config(format!("Failed to read {}: {}", path.display(), e))
    })?;
    parse_options_file(&content)
}

/// Collect options with precedence file < environment < flags.
pub async fn collect(args: &SourceArgs) -> CliResult<CollectedOptions> {
    let file = match &args.config {
        Some(path) => Some(path.clone()),
        None => {
            let default = std::env::current_dir()?.join(CONFIG_FILE_NAME);
            default.is_file().then_some(default)
        }
    };

    let file_options = match &file {
        Some(path) => load_options_file(path).await?,
        None => Options::new(),
    };

    let env_options = if args.no_env {
        Options::new()
    } else {
        Options::from_env()
    };

    let flag_options = args.flag_options();

    let collected = CollectedOptions {
        from_env: env_options.len(),
        from_flags: flag_options.len(),
        options: file_options.merge(env_options).merge(flag_options),
        file,
    };

    debug!(
        file = ?collected.file,
        from_env = collected.from_env,
        from_flags = collected.from_flags,
        "Collected configure options"
    );

    Ok(collected)
}
