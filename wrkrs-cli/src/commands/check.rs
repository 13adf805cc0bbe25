//! `wrkrs check` command - Validate worker configuration.

use wrkrs_config::ConfigState;

use crate::cli::SourceArgs;
use crate::error::CliResult;
use crate::output::{self, kv, success};
use crate::sources;

/// Run the check command
pub async fn run(args: SourceArgs) -> CliResult<()> {
    output::header("Check Configuration");

    output::step(1, 2, "Collecting options...");
    let collected = sources::collect(&args).await?;

    match &collected.file {
        Some(path) => kv("File", &path.display().to_string()),
        None => kv("File", "none"),
    }
    kv("Environment", &collected.from_env.to_string());
    kv("Flags", &collected.from_flags.to_string());

    output::step(2, 2, "Validating...");
    let state = ConfigState::new();
    state.configure(&collected.options)?;
    let config = state.current();

    let unknown: Vec<_> = collected.options.unknown_keys().collect();
    output::newline();
    if unknown.is_empty() {
        success("Configuration is valid!");
    } else {
        success("Configuration is valid with warnings:");
        for key in unknown {
            output::unknown_option(key);
        }
    }

    output::newline();
    kv("Server", config.server());
    kv("Process", config.process_id());
    if !config.namespace().is_empty() {
        kv("Namespace", config.namespace());
    }

    Ok(())
}
