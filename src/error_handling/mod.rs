//! Error handling and failure statistics.
//!
//! This module provides:
//! - Error type definitions (`thiserror`)
//! - Categorization of transport errors into `ErrorType`
//! - Rendering of errors as one-line status strings
//! - Per-category failure statistics for the end-of-run summary

mod categorization;
mod stats;
mod types;

// Re-export public API
pub use categorization::{
    categorize_reqwest_error, describe_request_error, root_cause_message, sanitize_error_message,
};
pub use stats::FailureStats;
pub use types::{DownloadError, ErrorType, InitializationError, InputError};

#[cfg(test)]
mod tests {
    use super::*;
    use crate::probe::{ProbeResult, ProbeStatus};
    use strum::IntoEnumIterator;

    fn inactive(status: ProbeStatus) -> ProbeResult {
        ProbeResult::failed("http://a/x.js", status)
    }

    #[test]
    fn test_failure_stats_initialization() {
        let stats = FailureStats::new();
        for error_type in ErrorType::iter() {
            assert_eq!(stats.get_error_count(error_type), 0);
        }
        assert_eq!(stats.total_errors(), 0);
    }

    #[test]
    fn test_failure_stats_increment() {
        let mut stats = FailureStats::new();
        stats.increment_error(ErrorType::Timeout);
        stats.increment_error(ErrorType::Timeout);
        stats.increment_error(ErrorType::Connect);
        assert_eq!(stats.get_error_count(ErrorType::Timeout), 2);
        assert_eq!(stats.get_error_count(ErrorType::Connect), 1);
        assert_eq!(stats.total_errors(), 3);
    }

    #[test]
    fn test_failure_stats_record_by_status() {
        let mut stats = FailureStats::new();
        stats.record(&inactive(ProbeStatus::Http(404)));
        stats.record(&inactive(ProbeStatus::NonJsContentType(200)));
        stats.record(&inactive(ProbeStatus::Failed {
            kind: ErrorType::Connect,
            message: "Connection refused".to_string(),
        }));

        assert_eq!(stats.get_error_count(ErrorType::HttpStatus), 1);
        assert_eq!(stats.get_error_count(ErrorType::NonJsContentType), 1);
        assert_eq!(stats.get_error_count(ErrorType::Connect), 1);
        assert_eq!(stats.total_errors(), 3);
    }

    #[test]
    fn test_failure_stats_ignores_active() {
        let mut stats = FailureStats::new();
        stats.record(&ProbeResult {
            url: "http://a/x.js".to_string(),
            active: true,
            status: ProbeStatus::Http(200),
            content_type: "application/javascript".to_string(),
            final_url: "http://a/x.js".to_string(),
        });
        assert_eq!(stats.total_errors(), 0);
    }
}
