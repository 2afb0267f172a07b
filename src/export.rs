//! Subscriber export. The server produces the blob; this side only picks the
//! format, names the file after the current date and writes it out.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use time::{Date, OffsetDateTime};

use crate::store::write_atomic;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ExportFormat {
    Csv,
    Json,
}

impl ExportFormat {
    pub fn parse(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "csv" => Ok(ExportFormat::Csv),
            "json" => Ok(ExportFormat::Json),
            other => anyhow::bail!("unsupported export format {} (expected csv or json)", other),
        }
    }

    /// Doubles as the `format` query value and the file extension.
    pub fn as_str(self) -> &'static str {
        match self {
            ExportFormat::Csv => "csv",
            ExportFormat::Json => "json",
        }
    }
}

pub fn export_file_name(format: ExportFormat, date: Date) -> String {
    format!(
        "subscribers-{:04}-{:02}-{:02}.{}",
        date.year(),
        u8::from(date.month()),
        date.day(),
        format.as_str()
    )
}

/// Writes the export under `dir`, named for today's date. Returns the path.
pub fn write_export(dir: &Path, format: ExportFormat, bytes: &[u8]) -> Result<PathBuf> {
    let path = dir.join(export_file_name(format, OffsetDateTime::now_utc().date()));
    write_atomic(&path, bytes).with_context(|| format!("write export {}", path.display()))?;
    Ok(path)
}

#[cfg(test)]
#[path = "tests/export_tests.rs"]
mod tests;
