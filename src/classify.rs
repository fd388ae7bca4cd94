//! Content classification.
//!
//! Pure judgements on whether a response is consistent with JavaScript, either
//! from its declared content type and URL or from the leading bytes of its body.

use crate::config::{HTML_SIGNATURES, JS_CONTENT_TYPES};

/// Returns `true` if the content type or the URL suggests JavaScript.
///
/// The content type matches when (case-insensitively) it contains one of
/// `JS_CONTENT_TYPES` or the substring `javascript`. Independently, a URL whose
/// path (everything before the first `?`) ends in `.js` is accepted, since
/// plenty of servers send scripts as `text/plain` or `application/octet-stream`.
pub fn looks_like_js_content(content_type: &str, url: &str) -> bool {
    let content_type = content_type.to_ascii_lowercase();
    if content_type.contains("javascript")
        || JS_CONTENT_TYPES.iter().any(|js| content_type.contains(js))
    {
        return true;
    }

    let url = url.to_ascii_lowercase();
    let path = url.split('?').next().unwrap_or_default();
    path.ends_with(".js")
}

/// Returns `true` if the payload prefix looks like the start of an HTML document.
///
/// Leading ASCII whitespace is skipped and the comparison is case-insensitive.
pub fn is_probably_html(prefix: &[u8]) -> bool {
    let start = prefix
        .iter()
        .position(|b| !b.is_ascii_whitespace())
        .unwrap_or(prefix.len());
    let trimmed = &prefix[start..];

    HTML_SIGNATURES.iter().any(|sig| {
        trimmed.len() >= sig.len() && trimmed[..sig.len()].eq_ignore_ascii_case(sig)
    })
}
