//! Console line formatting.

use crate::download::DownloadOutcome;
use crate::error_handling::DownloadError;
use crate::probe::ProbeResult;

/// `[OK]  <url>  (<status>)` or `[BAD] <url>  (<status>)`.
pub fn format_verdict_line(result: &ProbeResult) -> String {
    let tag = if result.active { "[OK] " } else { "[BAD]" };
    format!("{} {}  ({})", tag, result.url, result.status)
}

/// `[DL] <url> -> <path> (<size> bytes, <content_type>)` or `[DL-FAIL] <url> -> <error>`.
pub fn format_download_line(url: &str, outcome: &Result<DownloadOutcome, DownloadError>) -> String {
    match outcome {
        Ok(dl) => format!(
            "[DL] {} -> {} ({} bytes, {})",
            url,
            dl.path.display(),
            dl.size,
            dl.content_type
        ),
        Err(e) => format!("[DL-FAIL] {url} -> {e}"),
    }
}
