//! Main application modules.
//!
//! This module provides the user-facing console lines and the end-of-run
//! summaries printed by `run_check`.

pub mod console;
pub mod statistics;

// Re-export public API
pub use console::{format_download_line, format_verdict_line};
pub use statistics::{print_failure_statistics, print_saved_summary};
