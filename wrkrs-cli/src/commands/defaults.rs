//! `wrkrs defaults` command - List recognized options.

use wrkrs_config::OptionKey;

use crate::error::CliResult;
use crate::output;

/// Run the defaults command
pub async fn run() -> CliResult<()> {
    output::header("Options");

    for key in OptionKey::ALL {
        output::option_row(key);
    }

    output::newline();
    output::dim("Precedence: wrkrs.toml < WRKRS_* environment < flags");

    Ok(())
}
