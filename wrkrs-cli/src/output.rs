//! Terminal rendering for wrkrs commands.
//!
//! Everything here prints to stdout except [`error`], which goes to stderr
//! alongside log events.

use owo_colors::OwoColorize;
use wrkrs_config::{Configuration, OptionKey};

/// Print a command title, underlined.
pub fn header(text: &str) {
    println!();
    println!("{}", text.bold().cyan());
    println!("{}", "─".repeat(text.chars().count()).dimmed());
    println!();
}

/// Print a section title.
pub fn section(text: &str) {
    println!("{}", text.bold().white());
}

/// Print an indented `key: value` line.
pub fn kv(key: &str, value: &str) {
    println!("  {}: {}", key.dimmed(), value);
}

/// Print a progress marker such as `[1/2] Collecting options...`.
pub fn step(current: usize, total: usize, text: &str) {
    println!("{} {}", format!("[{}/{}]", current, total).dimmed(), text);
}

/// Print a passed check.
pub fn success(text: &str) {
    println!("{} {}", "✔".green().bold(), text.green());
}

/// Print a warning about an option that `configure` ignores.
pub fn unknown_option(key: &str) {
    println!(
        "{} {}",
        "⚠".yellow().bold(),
        format!("Unrecognized option '{}' is ignored", key).yellow()
    );
}

/// Print a failure to stderr.
pub fn error(text: &str) {
    eprintln!("{} {}", "✖".red().bold(), text.red());
}

/// Print a blank line.
pub fn newline() {
    println!();
}

/// Print dimmed text.
pub fn dim(text: &str) {
    println!("{}", text.dimmed());
}

/// Print one row of the options table.
pub fn option_row(key: OptionKey) {
    println!("  {} {}", "•".dimmed(), option_line(key));
}

/// `pool [default: 1] (WRKRS_POOL) - caps the number of idle Redis connections`
pub fn option_line(key: OptionKey) -> String {
    let default = match key.default_value() {
        None => "required".to_string(),
        Some("") => "default: (empty)".to_string(),
        Some(value) => format!("default: {}", value),
    };
    format!(
        "{} [{}] ({}) - {}",
        key,
        default,
        key.env_var(),
        key.describe()
    )
}

/// Print every field of a resolved snapshot, units included.
pub fn snapshot(config: &Configuration) {
    section("Configuration");
    for (key, value) in snapshot_rows(config) {
        kv(key.as_str(), &value);
    }
}

/// The rows [`snapshot`] prints, in option-table order.
pub fn snapshot_rows(config: &Configuration) -> Vec<(OptionKey, String)> {
    vec![
        (OptionKey::Server, config.server().to_string()),
        (OptionKey::Process, config.process_id().to_string()),
        (OptionKey::Namespace, config.namespace().to_string()),
        (OptionKey::Pool, config.pool().max_idle().to_string()),
        (
            OptionKey::PollInterval,
            format!("{}s", config.poll_interval_secs()),
        ),
        (
            OptionKey::DialTimeout,
            format!("{}ms", config.dial_timeout_ms()),
        ),
        (
            OptionKey::ReadTimeout,
            format!("{}ms", config.read_timeout_ms()),
        ),
        (
            OptionKey::WriteTimeout,
            format!("{}ms", config.write_timeout_ms()),
        ),
    ]
}
