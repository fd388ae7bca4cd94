//! Main application entry point (CLI binary).
//!
//! This is a thin wrapper around the `js_status` library that handles:
//! - Command-line argument parsing
//! - Logger initialization
//! - Exit codes
//!
//! All core functionality is implemented in the library crate.

use anyhow::{Context, Result};
use clap::Parser;
use std::process;

use js_status::initialization::init_logger_with;
use js_status::{run_check, Config, InputError};

#[tokio::main]
async fn main() -> Result<()> {
    // Parse command-line arguments into Config
    let config = Config::parse();

    // Initialize logger based on config
    let log_level = config.log_level.clone();
    let log_format = config.log_format.clone();
    init_logger_with(log_level.into(), log_format).context("Failed to initialize logger")?;

    match run_check(config).await {
        Ok(report) => {
            log::info!(
                "Checked {} URL{} ({} active, {} inactive) in {:.1}s",
                report.total_urls,
                if report.total_urls == 1 { "" } else { "s" },
                report.active,
                report.inactive,
                report.elapsed_seconds
            );
            Ok(())
        }
        Err(e) => {
            match e.downcast_ref::<InputError>() {
                Some(InputError::NotFound(path)) => {
                    eprintln!("[!] Input file not found: {}", path.display())
                }
                _ => eprintln!("js_status error: {:#}", e),
            }
            process::exit(1);
        }
    }
}
