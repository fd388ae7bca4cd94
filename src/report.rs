//! Output artifacts: active/inactive URL lists and the CSV report.

use anyhow::{Context, Result};
use csv::WriterBuilder;
use serde::Serialize;
use std::path::Path;

use crate::probe::ProbeResult;

/// Column names of the CSV report, in order.
pub const REPORT_HEADER: [&str; 5] = ["url", "active", "status", "content_type", "final_url"];

/// One CSV row. Field order matches `REPORT_HEADER`.
#[derive(Debug, Serialize)]
struct ReportRow<'a> {
    url: &'a str,
    active: bool,
    status: String,
    content_type: &'a str,
    final_url: &'a str,
}

impl<'a> From<&'a ProbeResult> for ReportRow<'a> {
    fn from(result: &'a ProbeResult) -> Self {
        ReportRow {
            url: &result.url,
            active: result.active,
            status: result.status.to_string(),
            content_type: &result.content_type,
            final_url: &result.final_url,
        }
    }
}

/// Newline-joined URLs with a trailing newline; empty string for no URLs.
pub fn url_list_contents(urls: &[String]) -> String {
    let mut contents = urls.join("\n");
    if !urls.is_empty() {
        contents.push('\n');
    }
    contents
}

/// Writes a URL list file (see [`url_list_contents`]).
pub fn write_url_list(path: &Path, urls: &[String]) -> Result<()> {
    std::fs::write(path, url_list_contents(urls))
        .with_context(|| format!("Failed to write URL list: {}", path.display()))
}

/// Writes the CSV report: header row, then one row per verdict.
pub fn write_csv_report(path: &Path, rows: &[ProbeResult]) -> Result<()> {
    let file = std::fs::File::create(path)
        .with_context(|| format!("Failed to create CSV report: {}", path.display()))?;
    let mut writer = WriterBuilder::new().has_headers(false).from_writer(file);

    writer
        .write_record(REPORT_HEADER)
        .context("Failed to write CSV header")?;
    for row in rows {
        writer
            .serialize(ReportRow::from(row))
            .with_context(|| format!("Failed to write CSV row for {}", row.url))?;
    }
    writer.flush().context("Failed to flush CSV report")?;
    Ok(())
}
