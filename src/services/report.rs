//! Human-readable console summary of the loaded configuration.
use std::io::{self, Write};

use crate::models::config::AppConfig;

/// Write the summary of `config` to `out`.
pub fn write_summary<W: Write>(config: &AppConfig, out: &mut W) -> io::Result<()> {
    writeln!(out, "=== Configuration ===")?;
    writeln!(out, "App name: {}", config.app_name)?;
    writeln!(out, "Version: {}", config.version)?;

    let database = &config.database;
    writeln!(out)?;
    writeln!(out, "Database:")?;
    writeln!(out, "  Host: {}", database.host)?;
    writeln!(out, "  Port: {}", database.port)?;
    writeln!(out, "  Username: {}", database.username)?;
    writeln!(out, "  Password: {}", database.password)?;

    writeln!(out)?;
    writeln!(out, "Server:")?;
    writeln!(out, "  Port: {}", config.server.port)?;
    writeln!(out, "  Timeout: {}s", config.server.timeout)?;

    writeln!(out)?;
    writeln!(out, "Features:")?;
    for (index, feature) in config.features.iter().enumerate() {
        writeln!(out, "  {}. {}", index + 1, feature)?;
    }

    Ok(())
}

/// Print the summary to stdout, ignoring write failures.
pub fn print_summary(config: &AppConfig) {
    let stdout = io::stdout();
    let mut handle = stdout.lock();
    if write_summary(config, &mut handle).and_then(|_| handle.flush()).is_err() {
        log::warn!("Failed to print configuration summary");
    }
}
