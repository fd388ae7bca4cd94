//! Probe verdict types.

use std::fmt;

use crate::config::NON_JS_CONTENT_TYPE_NOTE;
use crate::error_handling::ErrorType;

/// Status column of a verdict.
///
/// Renders to the string written to the console and the CSV report: an HTTP
/// code, an annotated HTTP code, or a categorised transport error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProbeStatus {
    /// Final HTTP status of the deciding request.
    Http(u16),
    /// GET succeeded but neither the content type nor the URL looks like JavaScript.
    NonJsContentType(u16),
    /// No usable response at all.
    Failed {
        /// Failure category
        kind: ErrorType,
        /// Root-cause message
        message: String,
    },
}

impl fmt::Display for ProbeStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ProbeStatus::Http(code) => write!(f, "{code}"),
            ProbeStatus::NonJsContentType(code) => write!(f, "{code} {NON_JS_CONTENT_TYPE_NOTE}"),
            ProbeStatus::Failed { kind, message } => write!(f, "{}: {}", kind.label(), message),
        }
    }
}

/// Outcome of probing one URL once (and, after retries, the verdict for it).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProbeResult {
    /// URL exactly as read from the input
    pub url: String,
    /// Whether the URL is considered live
    pub active: bool,
    /// HTTP status or failure description
    pub status: ProbeStatus,
    /// Declared `Content-Type`, empty when absent or on failure
    pub content_type: String,
    /// URL after redirects; the original URL when no response was received
    pub final_url: String,
}

impl ProbeResult {
    /// Inactive verdict without a response: empty content type, `final_url == url`.
    pub fn failed(url: &str, status: ProbeStatus) -> Self {
        ProbeResult {
            url: url.to_string(),
            active: false,
            status,
            content_type: String::new(),
            final_url: url.to_string(),
        }
    }

    /// Verdict for a URL whose probe task died before producing a result.
    pub fn worker_fault(url: &str, message: impl Into<String>) -> Self {
        Self::failed(
            url,
            ProbeStatus::Failed {
                kind: ErrorType::WorkerFault,
                message: message.into(),
            },
        )
    }

    /// Failure category of an inactive verdict, `None` for active ones.
    pub fn failure_kind(&self) -> Option<ErrorType> {
        if self.active {
            return None;
        }
        Some(match &self.status {
            ProbeStatus::Http(_) => ErrorType::HttpStatus,
            ProbeStatus::NonJsContentType(_) => ErrorType::NonJsContentType,
            ProbeStatus::Failed { kind, .. } => *kind,
        })
    }
}
