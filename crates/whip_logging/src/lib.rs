#![deny(missing_docs)]
//! Diagnostic logging for the whiplink workspace.
//!
//! The tool keeps a single append-only log file at [`LOG_PATH`], truncated
//! on every start. Nothing ever reads it back; it exists so that failures
//! the UI collapses into a generic message stay diagnosable.

use std::fs::{self, File};
use std::path::Path;

use log::LevelFilter;
use simplelog::{Config, ConfigBuilder, WriteLogger};

/// Relative path of the diagnostic log file.
pub const LOG_PATH: &str = "./tmp/whip.log";

/// Opens the diagnostic log at `path`, truncating any previous contents,
/// and installs it as the global logger.
///
/// Failure to create the file (or its parent directory) is non-fatal: no
/// logger is installed and every log macro becomes a no-op.
pub fn init_diagnostic_log(path: &str) {
    let path = Path::new(path);
    if let Some(parent) = path.parent() {
        let _ = fs::create_dir_all(parent);
    }
    if let Ok(file) = File::create(path) {
        let _ = WriteLogger::init(LevelFilter::Info, build_config(), file);
    }
}

fn build_config() -> Config {
    ConfigBuilder::new()
        .set_time_format_rfc3339()
        .set_target_level(LevelFilter::Error)
        .build()
}

/// Initializes a simple terminal logger for use in unit tests.
///
/// This safely no-ops if another logger has already been initialized.
pub fn initialize_for_tests() {
    use simplelog::{ColorChoice, CombinedLogger, TermLogger, TerminalMode};

    // Use debug level in debug builds, info in release builds.
    let level = if cfg!(debug_assertions) {
        LevelFilter::Debug
    } else {
        LevelFilter::Info
    };

    // Ignore the error if a logger was already set by another test.
    let _ = CombinedLogger::init(vec![TermLogger::new(
        level,
        Config::default(),
        TerminalMode::Mixed,
        ColorChoice::Auto,
    )]);
}
