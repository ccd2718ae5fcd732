//! Report rendering
//!
//! One line per classified path. The text lines are the stable surface other
//! tooling greps for; JSON lines and the trailing summary are opt-in.

use crate::diff::{Classification, Comparison, DiffEntry, Summary};
use crate::tree::path::display_key;
use serde::{Deserialize, Serialize};
use serde_json::json;
use std::io::{self, Write};

/// Report output format
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum ReportFormat {
    /// Human-readable lines
    #[default]
    Text,
    /// One JSON object per line
    Json,
}

/// Report configuration
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReportConfig {
    #[serde(default)]
    pub format: ReportFormat,

    /// Append an aggregate line after the entries
    #[serde(default)]
    pub summary: bool,

    /// Exit non-zero when any path is not a match
    #[serde(default)]
    pub fail_on_mismatch: bool,
}

/// Render a single entry as a text line (without newline)
pub fn format_entry_text(entry: &DiffEntry) -> String {
    let path = display_key(&entry.relative_path);
    match entry.classification {
        Classification::Match => format!("Files match: {}", path),
        Classification::Differ => format!("Files differ: {}", path),
        Classification::MissingInSecond => format!("File missing in second folder: {}", path),
        Classification::MissingInFirst => format!("File missing in first folder: {}", path),
    }
}

pub fn format_summary_text(summary: &Summary) -> String {
    format!(
        "Summary: {} match, {} differ, {} missing in second folder, {} missing in first folder",
        summary.matched, summary.differ, summary.missing_in_second, summary.missing_in_first
    )
}

/// Writes comparison results to any sink
pub struct Reporter<W: Write> {
    out: W,
    format: ReportFormat,
    summary: bool,
}

impl<W: Write> Reporter<W> {
    pub fn new(out: W, config: &ReportConfig) -> Self {
        Self {
            out,
            format: config.format,
            summary: config.summary,
        }
    }

    pub fn write_entry(&mut self, entry: &DiffEntry) -> io::Result<()> {
        match self.format {
            ReportFormat::Text => writeln!(self.out, "{}", format_entry_text(entry)),
            ReportFormat::Json => {
                let line = json!({
                    "path": display_key(&entry.relative_path),
                    "status": entry.classification,
                });
                writeln!(self.out, "{}", line)
            }
        }
    }

    pub fn write_summary(&mut self, summary: &Summary) -> io::Result<()> {
        match self.format {
            ReportFormat::Text => writeln!(self.out, "{}", format_summary_text(summary)),
            ReportFormat::Json => writeln!(self.out, "{}", json!({ "summary": summary })),
        }
    }

    /// Write every entry, then the summary when enabled, and flush
    pub fn write_comparison(&mut self, comparison: &Comparison) -> io::Result<()> {
        for entry in comparison.entries() {
            self.write_entry(entry)?;
        }
        if self.summary {
            self.write_summary(&comparison.summary())?;
        }
        self.out.flush()
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}
