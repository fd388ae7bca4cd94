//! URL list input.

use std::collections::HashSet;
use std::io::ErrorKind;
use std::path::Path;

use log::info;

use crate::error_handling::InputError;

/// Extracts the URL set from raw lines.
///
/// Lines are trimmed; empty lines and lines starting with `#` are skipped.
/// Duplicates (exact string match, no normalization) keep their first position.
pub fn dedup_urls<I, S>(lines: I) -> Vec<String>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut seen = HashSet::new();
    let mut urls = Vec::new();
    for line in lines {
        let trimmed = line.as_ref().trim();
        if trimmed.is_empty() || trimmed.starts_with('#') {
            continue;
        }
        if seen.insert(trimmed.to_string()) {
            urls.push(trimmed.to_string());
        }
    }
    urls
}

/// Reads and deduplicates the URL file.
///
/// Invalid UTF-8 is replaced rather than rejected.
///
/// # Errors
///
/// `InputError::NotFound` if the file does not exist, `InputError::Read` for
/// any other I/O failure.
pub async fn read_urls(path: &Path) -> Result<Vec<String>, InputError> {
    let bytes = tokio::fs::read(path).await.map_err(|source| {
        if source.kind() == ErrorKind::NotFound {
            InputError::NotFound(path.to_path_buf())
        } else {
            InputError::Read {
                path: path.to_path_buf(),
                source,
            }
        }
    })?;

    let text = String::from_utf8_lossy(&bytes);
    let urls = dedup_urls(text.lines());
    info!("Read {} unique URLs from {}", urls.len(), path.display());
    Ok(urls)
}
