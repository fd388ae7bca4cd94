//! js_status library: reachability checks for JavaScript URLs
//!
//! This library probes a list of URLs believed to point at JavaScript files,
//! classifies each one as active or inactive (HEAD with GET fallback, retries
//! with exponential backoff, a bounded pool of concurrent probes), writes the
//! active/inactive lists and a CSV report, and optionally downloads the active
//! scripts.
//!
//! # Example
//!
//! ```no_run
//! use js_status::{Config, run_check};
//!
//! # #[tokio::main]
//! # async fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let config = Config {
//!     input: std::path::PathBuf::from("js_files.txt"),
//!     workers: 50,
//!     check_js_header: true,
//!     ..Default::default()
//! };
//!
//! let report = run_check(config).await?;
//! println!("{} active, {} inactive", report.active, report.inactive);
//! # Ok(())
//! # }
//! ```
//!
//! # Requirements
//!
//! This library requires a Tokio runtime. Use `#[tokio::main]` in your application
//! or ensure you're calling library functions within an async context.

#![warn(missing_docs)]

mod app;
pub mod classify;
pub mod config;
pub mod dispatch;
pub mod download;
mod error_handling;
pub mod initialization;
pub mod input;
pub mod naming;
pub mod probe;
pub mod report;

// Re-export public API
pub use config::{Config, LogFormat, LogLevel};
pub use error_handling::{DownloadError, ErrorType, InitializationError, InputError};
pub use run::{run_check, CheckReport};

// Internal run module (contains the top-level orchestration)
mod run {
    use anyhow::{Context, Result};
    use log::info;
    use std::sync::Arc;
    use std::time::Instant;

    use crate::app::{
        format_download_line, format_verdict_line, print_failure_statistics, print_saved_summary,
    };
    use crate::config::Config;
    use crate::dispatch::{dispatch_probes, Tally};
    use crate::download::download_all;
    use crate::initialization::init_client;
    use crate::input::read_urls;
    use crate::probe::HttpProber;
    use crate::report::{write_csv_report, write_url_list};

    /// Results of a check run.
    #[derive(Debug, Clone, Default)]
    pub struct CheckReport {
        /// Number of distinct URLs checked
        pub total_urls: usize,
        /// Number of URLs judged active
        pub active: usize,
        /// Number of URLs judged inactive
        pub inactive: usize,
        /// Number of scripts written to disk
        pub downloaded: usize,
        /// Number of downloads that failed
        pub download_failures: usize,
        /// Elapsed time in seconds
        pub elapsed_seconds: f64,
    }

    /// Runs a check with the provided configuration.
    ///
    /// Reads and deduplicates the input file, probes every URL, writes the
    /// active list, the inactive list and the CSV report, then downloads the
    /// active scripts when `config.download` is set.
    ///
    /// An empty URL set prints a notice and returns an empty report without
    /// writing anything.
    ///
    /// # Errors
    ///
    /// This function will return an error if:
    /// - The input file is missing or unreadable (`InputError`, before any network activity)
    /// - The HTTP client cannot be built
    /// - An output artifact cannot be written
    ///
    /// Individual probe and download failures never surface here; they are
    /// recorded per URL.
    pub async fn run_check(config: Config) -> Result<CheckReport> {
        let urls = read_urls(&config.input).await?;
        if urls.is_empty() {
            println!("[!] No URLs found in input.");
            return Ok(CheckReport::default());
        }

        let client = init_client(&config).context("Failed to initialize HTTP client")?;
        let prober = Arc::new(HttpProber::new(client.clone(), config.probe_settings()));

        println!(
            "[*] Checking {} URLs with {} workers ...",
            urls.len(),
            config.workers
        );
        let start_time = Instant::now();

        let results = dispatch_probes(
            &urls,
            prober,
            config.retry_policy(),
            config.workers,
            |result| println!("{}", format_verdict_line(result)),
        )
        .await;
        let tally = Tally::from_results(results);
        info!(
            "Probed {} URLs in {:.2}s ({} active, {} inactive)",
            tally.rows.len(),
            start_time.elapsed().as_secs_f64(),
            tally.active.len(),
            tally.inactive.len()
        );

        write_url_list(&config.active_out, &tally.active)?;
        write_url_list(&config.inactive_out, &tally.inactive)?;
        write_csv_report(&config.csv, &tally.rows)?;

        print_saved_summary(
            &config.active_out,
            tally.active.len(),
            &config.inactive_out,
            tally.inactive.len(),
            &config.csv,
            tally.rows.len(),
        );
        print_failure_statistics(&tally.failures);

        let (downloaded, download_failures) = if config.download && !tally.active.is_empty() {
            println!(
                "\n[*] Downloading {} active files to: {}",
                tally.active.len(),
                config.out_dir.display()
            );
            download_all(
                &client,
                &tally.active,
                &config.out_dir,
                config.timeout_duration(),
                |url, outcome| println!("{}", format_download_line(url, outcome)),
            )
            .await
        } else {
            (0, 0)
        };

        Ok(CheckReport {
            total_urls: tally.rows.len(),
            active: tally.active.len(),
            inactive: tally.inactive.len(),
            downloaded,
            download_failures,
            elapsed_seconds: start_time.elapsed().as_secs_f64(),
        })
    }
}
