//! JSON output formatter for machine-readable results.
//!
//! Each operation prints exactly one document: its result or its error.
//! Informational lines are dropped and warnings travel inside the result.

use super::formatter::JsonOutput;
use super::formatter::OutputFormatter;
use anyhow::Result;
use jampzip_core::CreationReport;
use jampzip_core::ExtractionReport;
use serde::Serialize;
use std::io::Write;
use std::io::{self};

pub struct JsonFormatter {
    operation: &'static str,
}

impl JsonFormatter {
    pub const fn new(operation: &'static str) -> Self {
        Self { operation }
    }

    fn output<T: Serialize>(value: &T) -> Result<()> {
        let json = serde_json::to_string_pretty(value)?;
        writeln!(io::stdout(), "{json}")?;
        Ok(())
    }
}

#[derive(Serialize)]
struct CreationOutput {
    output_path: String,
    files_added: usize,
    directories_added: usize,
    entries_skipped: usize,
    encrypted: bool,
    bytes_written: u64,
    bytes_compressed: u64,
    compression_ratio: f64,
    compression_percentage: f64,
    duration_ms: u128,
    warnings: Vec<String>,
}

impl From<&CreationReport> for CreationOutput {
    fn from(report: &CreationReport) -> Self {
        Self {
            output_path: report.output_path.display().to_string(),
            files_added: report.files_added,
            directories_added: report.directories_added,
            entries_skipped: report.entries_skipped,
            encrypted: report.encrypted,
            bytes_written: report.bytes_written,
            bytes_compressed: report.bytes_compressed,
            compression_ratio: report.compression_ratio(),
            compression_percentage: report.compression_percentage(),
            duration_ms: report.duration.as_millis(),
            warnings: report.warnings.clone(),
        }
    }
}

#[derive(Serialize)]
struct ExtractionOutput {
    format: String,
    source: String,
    target: String,
    files_extracted: usize,
    directories_created: usize,
    bytes_written: u64,
    zip_status: String,
    source_deleted: bool,
    duration_ms: u128,
    warnings: Vec<String>,
}

impl From<&ExtractionReport> for ExtractionOutput {
    fn from(report: &ExtractionReport) -> Self {
        Self {
            format: report.format.to_string(),
            source: report.source.display().to_string(),
            target: report.target.display().to_string(),
            files_extracted: report.files_extracted,
            directories_created: report.directories_created,
            bytes_written: report.bytes_written,
            zip_status: report.zip_status.to_string(),
            source_deleted: report.source_deleted,
            duration_ms: report.duration.as_millis(),
            warnings: report.warnings.clone(),
        }
    }
}

impl OutputFormatter for JsonFormatter {
    fn format_creation_result(&self, report: &CreationReport) -> Result<()> {
        Self::output(&JsonOutput::success(
            self.operation,
            CreationOutput::from(report),
        ))
    }

    fn format_extraction_result(&self, report: &ExtractionReport) -> Result<()> {
        Self::output(&JsonOutput::success(
            self.operation,
            ExtractionOutput::from(report),
        ))
    }

    fn format_info(&self, _message: &str) {}

    fn format_error(&self, error: &anyhow::Error) {
        let output = JsonOutput::error(self.operation, format!("{error:#}"));
        let _ = Self::output(&output);
    }

    fn format_success(&self, _message: &str) {}

    fn format_warning(&self, _message: &str) {}
}
