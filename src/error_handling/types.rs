//! Error type definitions.
//!
//! This module defines the typed errors raised outside the per-URL path
//! (initialization, input) and by the downloader, plus the failure categories
//! used to label inactive verdicts.

use std::path::PathBuf;

use log::SetLoggerError;
use reqwest::Error as ReqwestError;
use strum_macros::EnumIter as EnumIterMacro;
use thiserror::Error;

use super::categorization::describe_request_error;

/// Error types for initialization failures.
#[derive(Error, Debug)]
#[allow(clippy::enum_variant_names)] // All variants end with "Error" by convention
pub enum InitializationError {
    /// Error initializing the logger.
    #[error("Logger initialization error: {0}")]
    LoggerError(#[from] SetLoggerError),

    /// Error initializing the HTTP client.
    #[error("HTTP client initialization error: {0}")]
    HttpClientError(#[from] ReqwestError),
}

/// Errors reading the URL list. Both are fatal and happen before any network activity.
#[derive(Error, Debug)]
pub enum InputError {
    /// The input file does not exist.
    #[error("Input file not found: {}", .0.display())]
    NotFound(PathBuf),

    /// The input file exists but could not be read.
    #[error("Failed to read input file {}: {source}", path.display())]
    Read {
        /// Path of the input file
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },
}

/// Reasons a single download can fail.
///
/// Each variant is reported for its URL only; the remaining downloads continue.
#[derive(Error, Debug)]
pub enum DownloadError {
    /// Transport-level failure (connect, timeout, body read).
    #[error("{}", describe_request_error(.0))]
    Request(#[from] ReqwestError),

    /// The server answered with a status outside 200-399.
    #[error("HTTPError {0}")]
    Status(u16),

    /// The body looks like an HTML page rather than a script.
    #[error("Downloaded content looks like HTML, not JS (Content-Type: {content_type})")]
    HtmlContent {
        /// Declared content type of the rejected response
        content_type: String,
    },

    /// The output directory or file could not be written.
    #[error("Failed to write {}: {source}", path.display())]
    Io {
        /// Path that could not be created or written
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },
}

/// Categories of inactive verdicts.
///
/// Every inactive `ProbeResult` maps to exactly one category. The category
/// label prefixes the status string of transport failures so report rows stay
/// diagnosable without a structured error.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIterMacro)]
pub enum ErrorType {
    // HTTP responses that disqualify a URL
    HttpStatus,       // Final status outside 200-399
    NonJsContentType, // GET succeeded but content type and URL both rejected
    // Transport failures
    Timeout,
    Connect,
    Redirect,
    Request,
    Body,
    Decode,
    Builder,
    Other,
    // The probe task itself died
    WorkerFault,
}

impl std::fmt::Display for ErrorType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl ErrorType {
    /// Human-readable description used in the end-of-run statistics.
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorType::HttpStatus => "HTTP status outside 200-399",
            ErrorType::NonJsContentType => "Non-JavaScript content type",
            ErrorType::Timeout => "HTTP request timeout error",
            ErrorType::Connect => "HTTP request connect error",
            ErrorType::Redirect => "HTTP request redirect error",
            ErrorType::Request => "HTTP request error",
            ErrorType::Body => "HTTP request body error",
            ErrorType::Decode => "HTTP request decode error",
            ErrorType::Builder => "HTTP request builder error",
            ErrorType::Other => "HTTP request other error",
            ErrorType::WorkerFault => "Probe worker fault",
        }
    }

    /// Short prefix used in status strings (`"<label>: <message>"`).
    pub fn label(&self) -> &'static str {
        match self {
            ErrorType::HttpStatus => "HTTPError",
            ErrorType::NonJsContentType => "ContentTypeError",
            ErrorType::Timeout => "TimeoutError",
            ErrorType::Connect => "ConnectError",
            ErrorType::Redirect => "RedirectError",
            ErrorType::Request => "RequestError",
            ErrorType::Body => "BodyError",
            ErrorType::Decode => "DecodeError",
            ErrorType::Builder => "BuilderError",
            ErrorType::Other => "Error",
            ErrorType::WorkerFault => "WorkerFault",
        }
    }
}
