//! Command-line interface for sidetab.
//!
//! A small development harness around the settings sanitizer: it runs
//! the exact callback the host registers, against a form file, and
//! prints the record the host would persist.

use clap::Parser;
use std::path::PathBuf;

/// Sidetab - settings sanitization for the side tab plugin.
///
/// Reads a submitted settings form (TOML key/value pairs) and prints
/// the sanitized record that would be persisted.
#[derive(Parser, Debug)]
#[command(
    name = "sidetab",
    version,
    about = "Sanitize a side tab settings form",
    after_help = "Examples:\n  \
                  sidetab form.toml\n  \
                  cat form.toml | sidetab\n  \
                  sidetab --check form.toml\n  \
                  sidetab --defaults"
)]
pub struct Cli {
    /// Submitted form file to sanitize (reads from stdin if not provided)
    #[arg(value_name = "FILE")]
    pub form: Option<PathBuf>,

    /// Set the logging level (trace, debug, info, warn, error)
    #[arg(short = 'l', long = "loglevel", default_value = "warn")]
    pub log_level: String,

    /// Print the default settings record and exit
    #[arg(long = "defaults")]
    pub defaults: bool,

    /// Fail unless the sanitized settings can render the tab
    #[arg(long = "check")]
    pub check: bool,

    /// Write the sanitized record to a file instead of stdout
    #[arg(short = 'o', long = "output", value_name = "FILE")]
    pub output: Option<PathBuf>,
}

impl Cli {
    /// Check if we should read the form from stdin.
    pub fn should_read_stdin(&self) -> bool {
        self.form.is_none() && !self.defaults
    }
}
