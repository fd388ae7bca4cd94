//! End-of-run summaries.

use log::info;
use std::path::Path;
use strum::IntoEnumIterator;

use crate::error_handling::{ErrorType, FailureStats};

/// Prints the `[*] Saved:` block listing the three artifacts and their sizes.
pub fn print_saved_summary(
    active_path: &Path,
    active: usize,
    inactive_path: &Path,
    inactive: usize,
    csv_path: &Path,
    rows: usize,
) {
    println!("\n[*] Saved:");
    println!("    {}   ({})", active_path.display(), active);
    println!("    {} ({})", inactive_path.display(), inactive);
    println!("    {} ({} rows)", csv_path.display(), rows);
}

/// Logs how many inactive verdicts fell into each failure category.
pub fn print_failure_statistics(stats: &FailureStats) {
    let total_errors = stats.total_errors();
    if total_errors == 0 {
        return;
    }

    info!("Inactive URL causes ({} total):", total_errors);
    for error_type in ErrorType::iter() {
        let count = stats.get_error_count(error_type);
        if count > 0 {
            info!("   {}: {}", error_type.as_str(), count);
        }
    }
}
