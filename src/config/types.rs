//! Configuration types and CLI options.
//!
//! This module defines enums and structs used for command-line argument parsing
//! and configuration.

use std::path::PathBuf;
use std::time::Duration;

use clap::{Parser, ValueEnum};

use crate::config::constants::{
    DEFAULT_ACTIVE_PATH, DEFAULT_BACKOFF_SECS, DEFAULT_CSV_PATH, DEFAULT_INACTIVE_PATH,
    DEFAULT_INPUT_PATH, DEFAULT_OUT_DIR, DEFAULT_RETRIES, DEFAULT_TIMEOUT_SECS,
    DEFAULT_USER_AGENT, DEFAULT_WORKERS,
};
use crate::probe::{ProbeSettings, RetryPolicy};

/// Logging level for the application.
///
/// Controls the verbosity of log output, from most restrictive (Error) to most
/// verbose (Trace).
#[derive(Clone, Debug, ValueEnum)]
pub enum LogLevel {
    /// Only error messages
    Error,
    /// Error and warning messages
    Warn,
    /// Error, warning, and informational messages
    Info,
    /// All messages except trace
    Debug,
    /// All messages including trace
    Trace,
}

impl From<LogLevel> for log::LevelFilter {
    fn from(l: LogLevel) -> Self {
        match l {
            LogLevel::Error => log::LevelFilter::Error,
            LogLevel::Warn => log::LevelFilter::Warn,
            LogLevel::Info => log::LevelFilter::Info,
            LogLevel::Debug => log::LevelFilter::Debug,
            LogLevel::Trace => log::LevelFilter::Trace,
        }
    }
}

/// Log output format.
///
/// - `Plain`: Human-readable format with colors (default)
/// - `Json`: Structured JSON format for machine parsing
#[derive(Clone, Debug, ValueEnum)]
pub enum LogFormat {
    /// Human-readable format with colors (default)
    Plain,
    /// Structured JSON format for machine parsing
    Json,
}

/// Command-line options and library configuration.
///
/// Parsed by `clap` in the binary; library callers can build it directly and
/// fill the rest from `Default`.
///
/// # Examples
///
/// ```bash
/// # Check the default input file
/// js_status
///
/// # Require a JavaScript content type and download what is active
/// js_status -i urls.txt --check-js-header --download --outdir ./js
/// ```
///
/// ```no_run
/// use js_status::Config;
/// use std::path::PathBuf;
///
/// let config = Config {
///     input: PathBuf::from("urls.txt"),
///     workers: 50,
///     ..Default::default()
/// };
/// ```
#[derive(Debug, Clone, Parser)]
#[command(
    name = "js_status",
    about = "Check JS URLs and split active/inactive."
)]
pub struct Config {
    /// Input file with URLs (one per line)
    #[arg(short, long, value_parser, default_value = DEFAULT_INPUT_PATH)]
    pub input: PathBuf,

    /// Timeout per request (seconds)
    #[arg(short, long, value_parser = parse_timeout, default_value_t = DEFAULT_TIMEOUT_SECS)]
    pub timeout: u64,

    /// Number of parallel workers
    #[arg(short, long, value_parser = parse_workers, default_value_t = DEFAULT_WORKERS)]
    pub workers: usize,

    /// Retries for transient failures
    #[arg(long, default_value_t = DEFAULT_RETRIES)]
    pub retries: u32,

    /// Backoff base seconds (exponential)
    #[arg(long, value_parser = parse_backoff, default_value_t = DEFAULT_BACKOFF_SECS)]
    pub backoff: f64,

    /// Require Content-Type to look like JavaScript (falls back to URL .js)
    #[arg(long)]
    pub check_js_header: bool,

    /// Download active JS files
    #[arg(long)]
    pub download: bool,

    /// Download folder (if --download)
    #[arg(long = "outdir", value_parser, default_value = DEFAULT_OUT_DIR)]
    pub out_dir: PathBuf,

    /// CSV report file
    #[arg(long, value_parser, default_value = DEFAULT_CSV_PATH)]
    pub csv: PathBuf,

    /// File receiving the active URLs
    #[arg(long, value_parser, default_value = DEFAULT_ACTIVE_PATH)]
    pub active_out: PathBuf,

    /// File receiving the inactive URLs
    #[arg(long, value_parser, default_value = DEFAULT_INACTIVE_PATH)]
    pub inactive_out: PathBuf,

    /// HTTP User-Agent header value
    #[arg(long, default_value = DEFAULT_USER_AGENT)]
    pub user_agent: String,

    /// Log level: error|warn|info|debug|trace
    #[arg(long, value_enum, default_value_t = LogLevel::Warn)]
    pub log_level: LogLevel,

    /// Log format: plain|json
    #[arg(long, value_enum, default_value_t = LogFormat::Plain)]
    pub log_format: LogFormat,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            input: PathBuf::from(DEFAULT_INPUT_PATH),
            timeout: DEFAULT_TIMEOUT_SECS,
            workers: DEFAULT_WORKERS,
            retries: DEFAULT_RETRIES,
            backoff: DEFAULT_BACKOFF_SECS,
            check_js_header: false,
            download: false,
            out_dir: PathBuf::from(DEFAULT_OUT_DIR),
            csv: PathBuf::from(DEFAULT_CSV_PATH),
            active_out: PathBuf::from(DEFAULT_ACTIVE_PATH),
            inactive_out: PathBuf::from(DEFAULT_INACTIVE_PATH),
            user_agent: DEFAULT_USER_AGENT.to_string(),
            log_level: LogLevel::Warn,
            log_format: LogFormat::Plain,
        }
    }
}

impl Config {
    /// Per-request timeout as a `Duration`.
    pub fn timeout_duration(&self) -> Duration {
        Duration::from_secs(self.timeout)
    }

    /// Settings for a single probe attempt.
    pub fn probe_settings(&self) -> ProbeSettings {
        ProbeSettings {
            timeout: self.timeout_duration(),
            require_js_header: self.check_js_header,
        }
    }

    /// Retry policy wrapped around each probe.
    pub fn retry_policy(&self) -> RetryPolicy {
        RetryPolicy {
            max_retries: self.retries,
            backoff_secs: self.backoff,
        }
    }
}

fn parse_timeout(s: &str) -> Result<u64, String> {
    let secs: u64 = s
        .parse()
        .map_err(|_| format!("`{s}` is not a whole number of seconds"))?;
    if secs == 0 {
        return Err("timeout must be at least 1 second".to_string());
    }
    Ok(secs)
}

fn parse_workers(s: &str) -> Result<usize, String> {
    let workers: usize = s
        .parse()
        .map_err(|_| format!("`{s}` is not a valid worker count"))?;
    if workers == 0 {
        return Err("at least one worker is required".to_string());
    }
    Ok(workers)
}

fn parse_backoff(s: &str) -> Result<f64, String> {
    let secs: f64 = s
        .parse()
        .map_err(|_| format!("`{s}` is not a number of seconds"))?;
    if !secs.is_finite() || secs < 0.0 {
        return Err("backoff must be a non-negative number of seconds".to_string());
    }
    Ok(secs)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_log_level_conversion() {
        assert_eq!(
            log::LevelFilter::from(LogLevel::Error),
            log::LevelFilter::Error
        );
        assert_eq!(
            log::LevelFilter::from(LogLevel::Warn),
            log::LevelFilter::Warn
        );
        assert_eq!(
            log::LevelFilter::from(LogLevel::Info),
            log::LevelFilter::Info
        );
        assert_eq!(
            log::LevelFilter::from(LogLevel::Debug),
            log::LevelFilter::Debug
        );
        assert_eq!(
            log::LevelFilter::from(LogLevel::Trace),
            log::LevelFilter::Trace
        );
    }

    #[test]
    fn test_config_default() {
        let config = Config::default();
        assert_eq!(config.input, PathBuf::from("js_files.txt"));
        assert_eq!(config.timeout, 12);
        assert_eq!(config.workers, 20);
        assert_eq!(config.retries, 2);
        assert_eq!(config.backoff, 0.5);
        assert!(!config.check_js_header);
        assert!(!config.download);
        assert_eq!(config.out_dir, PathBuf::from("active_js_downloads"));
        assert_eq!(config.csv, PathBuf::from("report.csv"));
    }

    #[test]
    fn test_cli_defaults_match_default_impl() {
        let parsed = Config::try_parse_from(["js_status"]).expect("defaults should parse");
        let default = Config::default();
        assert_eq!(parsed.input, default.input);
        assert_eq!(parsed.timeout, default.timeout);
        assert_eq!(parsed.workers, default.workers);
        assert_eq!(parsed.retries, default.retries);
        assert_eq!(parsed.backoff, default.backoff);
        assert_eq!(parsed.out_dir, default.out_dir);
        assert_eq!(parsed.csv, default.csv);
        assert_eq!(parsed.active_out, default.active_out);
        assert_eq!(parsed.inactive_out, default.inactive_out);
        assert_eq!(parsed.user_agent, default.user_agent);
    }

    #[test]
    fn test_cli_short_and_long_flags() {
        let parsed = Config::try_parse_from([
            "js_status",
            "-i",
            "urls.txt",
            "-t",
            "3",
            "-w",
            "4",
            "--retries",
            "0",
            "--backoff",
            "1.5",
            "--check-js-header",
            "--download",
            "--outdir",
            "dl",
            "--csv",
            "out.csv",
        ])
        .expect("flags should parse");
        assert_eq!(parsed.input, PathBuf::from("urls.txt"));
        assert_eq!(parsed.timeout, 3);
        assert_eq!(parsed.workers, 4);
        assert_eq!(parsed.retries, 0);
        assert_eq!(parsed.backoff, 1.5);
        assert!(parsed.check_js_header);
        assert!(parsed.download);
        assert_eq!(parsed.out_dir, PathBuf::from("dl"));
        assert_eq!(parsed.csv, PathBuf::from("out.csv"));
    }

    #[test]
    fn test_cli_rejects_zero_workers() {
        assert!(Config::try_parse_from(["js_status", "-w", "0"]).is_err());
    }

    #[test]
    fn test_cli_rejects_zero_timeout() {
        assert!(Config::try_parse_from(["js_status", "-t", "0"]).is_err());
    }

    #[test]
    fn test_cli_rejects_negative_backoff() {
        assert!(Config::try_parse_from(["js_status", "--backoff=-1"]).is_err());
        assert!(Config::try_parse_from(["js_status", "--backoff", "NaN"]).is_err());
    }

    #[test]
    fn test_probe_settings_and_retry_policy() {
        let config = Config {
            timeout: 7,
            check_js_header: true,
            retries: 4,
            backoff: 0.25,
            ..Default::default()
        };
        let settings = config.probe_settings();
        assert_eq!(settings.timeout, Duration::from_secs(7));
        assert!(settings.require_js_header);

        let policy = config.retry_policy();
        assert_eq!(policy.max_retries, 4);
        assert_eq!(policy.backoff_secs, 0.25);
    }
}
