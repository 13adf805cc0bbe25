//! CLI argument definitions using clap.

use clap::{Args, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

use wrkrs_config::{OptionKey, Options};

/// wrkrs - configuration bootstrap for Redis-backed workers
#[derive(Parser, Debug)]
#[command(name = "wrkrs")]
#[command(version)]
#[command(about = "wrkrs CLI - configuration bootstrap for Redis-backed workers", long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Log level for wrkrs events on stderr (overrides WRKRS_LOG_LEVEL)
    #[arg(long, global = true)]
    pub log_level: Option<String>,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Command,
}

/// Available CLI commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Validate worker configuration
    Check(SourceArgs),

    /// Print the resolved worker configuration
    Show(ShowArgs),

    /// List recognized options and their defaults
    Defaults,

    /// Display version information
    Version,
}

// =============================================================================
// Option Sources
// =============================================================================

/// Where options come from. Later sources override earlier ones:
/// config file, then `WRKRS_*` environment variables, then flags.
#[derive(Args, Debug, Default)]
pub struct SourceArgs {
    /// Path to a TOML options file (defaults to ./wrkrs.toml if present)
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Ignore WRKRS_* environment variables
    #[arg(long)]
    pub no_env: bool,

    /// Redis server address, e.g. localhost:6379
    #[arg(long)]
    pub server: Option<String>,

    /// Identifier unique to this process
    #[arg(long)]
    pub process: Option<String>,

    /// Key namespace
    #[arg(long)]
    pub namespace: Option<String>,

    /// Maximum idle Redis connections
    #[arg(long)]
    pub pool: Option<String>,

    /// Poll interval in seconds
    #[arg(long)]
    pub poll_interval: Option<String>,

    /// Dial timeout in milliseconds
    #[arg(long)]
    pub dial_timeout: Option<String>,

    /// Read timeout in milliseconds
    #[arg(long)]
    pub read_timeout: Option<String>,

    /// Write timeout in milliseconds
    #[arg(long)]
    pub write_timeout: Option<String>,

    /// Raw option as key=value (repeatable)
    #[arg(short = 'o', long = "option", value_parser = parse_key_value)]
    pub options: Vec<(String, String)>,
}

impl SourceArgs {
    /// Options given on the command line.
    pub fn flag_options(&self) -> Options {
        let named = [
            (OptionKey::Server, &self.server),
            (OptionKey::Process, &self.process),
            (OptionKey::Namespace, &self.namespace),
            (OptionKey::Pool, &self.pool),
            (OptionKey::PollInterval, &self.poll_interval),
            (OptionKey::DialTimeout, &self.dial_timeout),
            (OptionKey::ReadTimeout, &self.read_timeout),
            (OptionKey::WriteTimeout, &self.write_timeout),
        ];

        let mut options: Options = self.options.iter().cloned().collect();
        options.extend(
            named
                .into_iter()
                .filter_map(|(key, value)| value.clone().map(|v| (key.as_str(), v))),
        );
        options
    }
}

fn parse_key_value(s: &str) -> Result<(String, String), String> {
    let (key, value) = s
        .split_once('=')
        .ok_or_else(|| format!("expected key=value, got '{}'", s))?;
    if key.is_empty() {
        return Err(format!("missing key in '{}'", s));
    }
    Ok((key.to_string(), value.to_string()))
}

// =============================================================================
// Show Command
// =============================================================================

/// Arguments for the `show` command
#[derive(Args, Debug)]
pub struct ShowArgs {
    /// Option sources
    #[command(flatten)]
    pub source: SourceArgs,

    /// Output format
    #[arg(short, long, default_value = "text")]
    pub format: OutputFormat,
}

/// Output formats for `show`
#[derive(ValueEnum, Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
    Toml,
}
