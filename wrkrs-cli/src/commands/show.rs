//! `wrkrs show` command - Print the resolved worker configuration.

use wrkrs_config::{ConfigState, Configuration};

use crate::cli::{OutputFormat, ShowArgs};
use crate::error::CliResult;
use crate::output;
use crate::sources;

/// Run the show command
pub async fn run(args: ShowArgs) -> CliResult<()> {
    let collected = sources::collect(&args.source).await?;

    let state = ConfigState::new();
    state.configure(&collected.options)?;
    let config = state.current();

    match args.format {
        OutputFormat::Text => output::snapshot(&config),
        OutputFormat::Json => println!("{}", render_json(&config)?),
        OutputFormat::Toml => print!("{}", render_toml(&config)?),
    }

    Ok(())
}

/// Render a configuration as pretty JSON.
pub fn render_json(config: &Configuration) -> CliResult<String> {
    Ok(serde_json::to_string_pretty(config)?)
}

/// Render a configuration as TOML.
pub fn render_toml(config: &Configuration) -> CliResult<String> {
    Ok(toml::to_string_pretty(config)?)
}
