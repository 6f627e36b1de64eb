//! Sidetab - settings sanitization for the side tab plugin.
//!
//! This binary runs the settings sanitizer against a submitted form
//! (TOML key/value pairs from a file or stdin) and prints the record
//! the host would persist.

mod cli;

use clap::Parser as ClapParser;
use cli::Cli;
use log::{debug, error, info, warn, LevelFilter};
use std::fs;
use std::io::{self, Read, Write};

use sidetab_core::{Result, SideTabError};
use sidetab_settings::{sanitize, RawSettings, TabSettings};

fn main() {
    let cli = <Cli as ClapParser>::parse();

    // Set up logging
    setup_logging(&cli.log_level);
    info!("Sidetab v{}", env!("CARGO_PKG_VERSION"));

    // Run the main application
    if let Err(e) = run(&cli) {
        error!("Error: {}", e);
        std::process::exit(1);
    }
}

/// Set up logging based on the log level argument.
fn setup_logging(level: &str) {
    let filter = match level.to_lowercase().as_str() {
        "trace" => LevelFilter::Trace,
        "debug" => LevelFilter::Debug,
        "info" => LevelFilter::Info,
        "warn" => LevelFilter::Warn,
        "error" => LevelFilter::Error,
        _ => LevelFilter::Warn,
    };

    env_logger::Builder::new()
        .filter_level(filter)
        .format(|buf, record| {
            writeln!(
                buf,
                "[{}] {}: {}",
                record.level(),
                record.target(),
                record.args()
            )
        })
        .init();
}

/// Main application logic.
fn run(cli: &Cli) -> Result<()> {
    let settings = if cli.defaults {
        TabSettings::default()
    } else {
        let form = load_form(cli)?;
        debug!("Loaded form with {} field(s)", form.len());
        sanitize(&form)
    };
    debug!("Sanitized settings: {:?}", settings);

    if cli.check && !settings.is_renderable() {
        return Err(SideTabError::Settings(
            "the tab will not display without text_for_tab and tab_url".to_string(),
        ));
    }

    let rendered = settings.to_toml_string()?;
    match &cli.output {
        Some(path) => {
            fs::write(path, rendered)?;
            info!("Wrote sanitized settings to {}", path.display());
        }
        None => {
            io::stdout().write_all(rendered.as_bytes())?;
        }
    }

    Ok(())
}

/// Read the submitted form from the file argument or stdin.
fn load_form(cli: &Cli) -> Result<RawSettings> {
    let content = match &cli.form {
        Some(path) => fs::read_to_string(path)?,
        None => {
            let mut buffer = String::new();
            io::stdin().read_to_string(&mut buffer)?;
            buffer
        }
    };

    parse_form(&content)
}

/// Parse TOML key/value pairs into the raw string form.
///
/// The sanitizer sees what a browser would have submitted, so every
/// scalar is carried as its string spelling. Nested tables and arrays
/// have no form equivalent and are skipped.
fn parse_form(content: &str) -> Result<RawSettings> {
    let table: toml::Table = content
        .parse()
        .map_err(|e| SideTabError::Settings(format!("Form parse error: {e}")))?;

    let mut form = RawSettings::new();
    for (key, value) in table {
        match value {
            toml::Value::String(s) => {
                form.set(key, s);
            }
            toml::Value::Integer(n) => {
                form.set(key, n.to_string());
            }
            toml::Value::Float(f) => {
                form.set(key, f.to_string());
            }
            toml::Value::Boolean(b) => {
                form.set(key, b.to_string());
            }
            other => {
                warn!("Skipping non-scalar form field {key:?} ({})", other.type_str());
            }
        }
    }

    Ok(form)
}
