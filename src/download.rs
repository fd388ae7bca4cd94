//! Downloading of active scripts.
//!
//! Re-fetches each active URL with GET, rejects bodies that look like HTML and
//! writes the rest under a name from [`crate::naming`]. Downloads run one after
//! another; a failure is reported for its URL and the next download proceeds.

use std::path::{Path, PathBuf};
use std::time::Duration;

use log::{debug, warn};
use reqwest::{Client, Method};

use crate::classify::is_probably_html;
use crate::config::HTML_SNIFF_BYTES;
use crate::error_handling::DownloadError;
use crate::naming::{disambiguated_filename, filename_from_url};
use crate::probe::{content_type_of, is_active_status, standard_request};

/// A script written to disk.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DownloadOutcome {
    /// URL the script was fetched from
    pub url: String,
    /// Where the body was written
    pub path: PathBuf,
    /// Body size in bytes
    pub size: usize,
    /// Declared `Content-Type` of the GET response
    pub content_type: String,
}

/// Picks the target path for `url` inside `out_dir`.
///
/// When a file with the resolved name already exists, `_<hash8>` of the URL is
/// inserted before the extension. Only names are compared, never contents.
pub async fn resolve_target_path(out_dir: &Path, url: &str) -> Result<PathBuf, DownloadError> {
    let name = filename_from_url(url);
    let path = out_dir.join(&name);
    let exists = tokio::fs::try_exists(&path)
        .await
        .map_err(|source| DownloadError::Io {
            path: path.clone(),
            source,
        })?;
    if exists {
        let renamed = out_dir.join(disambiguated_filename(&name, url));
        debug!(
            "{} already exists, writing {} instead",
            path.display(),
            renamed.display()
        );
        return Ok(renamed);
    }
    Ok(path)
}

/// Downloads one script into `out_dir`, creating the directory if needed.
///
/// # Errors
///
/// - `DownloadError::Request` on transport failure
/// - `DownloadError::Status` when the GET status is outside 200-399
/// - `DownloadError::HtmlContent` when the first bytes look like HTML; nothing is written
/// - `DownloadError::Io` when the directory or file cannot be written
pub async fn download_file(
    client: &Client,
    url: &str,
    out_dir: &Path,
    timeout: Duration,
) -> Result<DownloadOutcome, DownloadError> {
    tokio::fs::create_dir_all(out_dir)
        .await
        .map_err(|source| DownloadError::Io {
            path: out_dir.to_path_buf(),
            source,
        })?;
    let path = resolve_target_path(out_dir, url).await?;

    let response = standard_request(client, Method::GET, url, timeout)
        .send()
        .await?;
    let status = response.status().as_u16();
    if !is_active_status(status) {
        return Err(DownloadError::Status(status));
    }
    let content_type = content_type_of(&response);
    let body = response.bytes().await?;

    let prefix = &body[..body.len().min(HTML_SNIFF_BYTES)];
    if is_probably_html(prefix) {
        return Err(DownloadError::HtmlContent { content_type });
    }

    tokio::fs::write(&path, &body)
        .await
        .map_err(|source| DownloadError::Io {
            path: path.clone(),
            source,
        })?;

    Ok(DownloadOutcome {
        url: url.to_string(),
        path,
        size: body.len(),
        content_type,
    })
}

/// Downloads every URL sequentially, reporting each outcome through `on_outcome`.
///
/// Returns `(succeeded, failed)` counts. Exactly one outcome is produced per URL.
pub async fn download_all<F>(
    client: &Client,
    urls: &[String],
    out_dir: &Path,
    timeout: Duration,
    mut on_outcome: F,
) -> (usize, usize)
where
    F: FnMut(&str, &Result<DownloadOutcome, DownloadError>),
{
    let mut succeeded = 0;
    let mut failed = 0;
    for url in urls {
        let outcome = download_file(client, url, out_dir, timeout).await;
        match &outcome {
            Ok(_) => succeeded += 1,
            Err(e) => {
                warn!("Download of {url} failed: {e}");
                failed += 1;
            }
        }
        on_outcome(url, &outcome);
    }
    (succeeded, failed)
}
