//! Configuration constants.
//!
//! This module defines the defaults and fixed tables used throughout the
//! application: timeouts, pool sizes, retry parameters, the JavaScript MIME
//! types the classifier accepts and the HTML signatures the downloader rejects.

/// Default per-request timeout in seconds
pub const DEFAULT_TIMEOUT_SECS: u64 = 12;

/// Default number of probes in flight at once
pub const DEFAULT_WORKERS: usize = 20;

/// Default number of retries after the first failed attempt
/// Set to 2 = initial attempt + 2 retries (total 3 attempts)
pub const DEFAULT_RETRIES: u32 = 2;

/// Default backoff base in seconds.
/// The delay before retry `n` (starting at 0) is `backoff * 2^n`.
pub const DEFAULT_BACKOFF_SECS: f64 = 0.5;

/// Default User-Agent string for HTTP requests.
///
/// Users can override this via the `--user-agent` CLI flag.
pub const DEFAULT_USER_AGENT: &str = "Mozilla/5.0 (JS-URL-Checker)";

/// Accept header sent with every probe and download
pub const ACCEPT_ANY: &str = "*/*";

// Default file locations
/// URL list read when `--input` is not given
pub const DEFAULT_INPUT_PATH: &str = "js_files.txt";
/// Download directory
pub const DEFAULT_OUT_DIR: &str = "active_js_downloads";
/// CSV report path
pub const DEFAULT_CSV_PATH: &str = "report.csv";
/// Active URL list path
pub const DEFAULT_ACTIVE_PATH: &str = "active_js_urls.txt";
/// Inactive URL list path
pub const DEFAULT_INACTIVE_PATH: &str = "inactive_js_urls.txt";

/// Content types treated as JavaScript (matched case-insensitively as substrings).
pub const JS_CONTENT_TYPES: &[&str] = &[
    "application/javascript",
    "text/javascript",
    "application/x-javascript",
    "application/ecmascript",
    "text/ecmascript",
];

/// Payload prefixes that identify an HTML document (compared lower-cased).
pub const HTML_SIGNATURES: &[&[u8]] = &[b"<!doctype html", b"<html", b"<head", b"<body"];

/// Number of leading body bytes inspected when sniffing downloads for HTML
pub const HTML_SNIFF_BYTES: usize = 200;

// File naming
/// Maximum length of a generated file name in characters
pub const MAX_FILENAME_LEN: usize = 180;
/// File name used when sanitizing leaves nothing behind
pub const FALLBACK_FILENAME: &str = "file.js";
/// Hex characters of the URL hash used for synthesized names (`script_<hash>.js`)
pub const SYNTHETIC_NAME_HASH_LEN: usize = 12;
/// Hex characters of the query-string hash appended to names of URLs with a query
pub const QUERY_HASH_LEN: usize = 6;
/// Hex characters of the URL hash used to disambiguate existing files
pub const COLLISION_HASH_LEN: usize = 8;

/// Suffix appended to the status of a GET response rejected by the classifier
pub const NON_JS_CONTENT_TYPE_NOTE: &str = "(non-js content-type)";
