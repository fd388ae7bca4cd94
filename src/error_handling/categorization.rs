//! Error categorization.
//!
//! Maps transport errors onto `ErrorType` categories and renders them as the
//! one-line status strings written to the console and the CSV report.

use std::error::Error as StdError;

use super::types::ErrorType;

/// Categorizes a `reqwest::Error` into an `ErrorType`.
///
/// Timeouts are checked before connect errors because a connect timeout
/// reports both.
pub fn categorize_reqwest_error(error: &reqwest::Error) -> ErrorType {
    if error.is_builder() {
        ErrorType::Builder
    } else if error.is_redirect() {
        ErrorType::Redirect
    } else if error.is_timeout() {
        ErrorType::Timeout
    } else if error.is_connect() {
        ErrorType::Connect
    } else if error.is_status() {
        ErrorType::HttpStatus
    } else if error.is_request() {
        ErrorType::Request
    } else if error.is_body() {
        ErrorType::Body
    } else if error.is_decode() {
        ErrorType::Decode
    } else {
        ErrorType::Other
    }
}

/// Returns the message of the innermost error in the `source()` chain.
///
/// reqwest wraps the interesting part ("Connection refused", "dns error")
/// several layers deep behind a generic "error sending request" message.
pub fn root_cause_message(error: &(dyn StdError + 'static)) -> String {
    let mut current = error;
    while let Some(source) = current.source() {
        current = source;
    }
    sanitize_error_message(&current.to_string())
}

/// Renders a transport error as `"<category label>: <root cause>"`.
pub fn describe_request_error(error: &reqwest::Error) -> String {
    format!(
        "{}: {}",
        categorize_reqwest_error(error).label(),
        root_cause_message(error)
    )
}

/// Removes control characters and collapses the message onto one line.
pub fn sanitize_error_message(message: &str) -> String {
    message
        .chars()
        .map(|c| if c.is_control() { ' ' } else { c })
        .collect::<String>()
        .trim()
        .to_string()
}
