//! wrkrs CLI - configuration bootstrap for Redis-backed workers.

use clap::Parser;

use wrkrs_cli::cli::{Cli, Command};
use wrkrs_cli::commands;
use wrkrs_cli::error::CliResult;
use wrkrs_cli::output;

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    match cli.log_level.as_deref() {
        Some(level) => wrkrs_config::logging::init_with_level(level),
        None => wrkrs_config::logging::init(),
    }

    if let Err(e) = run(cli).await {
        output::newline();
        output::error(&e.to_string());
        std::process::exit(1);
    }
}

async fn run(cli: Cli) -> CliResult<()> {
    match cli.command {
        Command::Check(args) => commands::check::run(args).await,
        Command::Show(args) => commands::show::run(args).await,
        Command::Defaults => commands::defaults::run().await,
        Command::Version => commands::version::run().await,
    }
}
