//! Shared CLI helpers used across multiple commands.

use clap::ValueEnum;

/// Output encoding for command results.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable table
    #[default]
    Text,
    /// Pretty-printed JSON
    Json,
    /// TOML document
    Toml,
}

/// Print a rendered document, adding a trailing newline only when missing.
pub fn emit(rendered: &str) {
    if rendered.ends_with('\n') {
        print!("{rendered}");
    } else {
        println!("{rendered}");
    }
}
