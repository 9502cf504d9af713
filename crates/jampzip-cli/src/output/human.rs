//! Human-readable output formatter with colors and styling.

use super::formatter::OutputFormatter;
use anyhow::Result;
use console::Term;
use console::style;
use jampzip_core::CreationReport;
use jampzip_core::ExtractionReport;

pub struct HumanFormatter {
    verbose: bool,
    quiet: bool,
    use_colors: bool,
    term: Term,
    err_term: Term,
}

impl HumanFormatter {
    pub fn new(verbose: bool, quiet: bool) -> Self {
        Self {
            verbose,
            quiet,
            use_colors: console::colors_enabled(),
            term: Term::stdout(),
            err_term: Term::stderr(),
        }
    }

    fn line(&self, text: &str) {
        let _ = self.term.write_line(text);
    }

    fn format_size(bytes: u64) -> String {
        const KB: u64 = 1024;
        const MB: u64 = KB * 1024;
        const GB: u64 = MB * 1024;

        match bytes {
            b if b >= GB => format!("{:.1} GB", b as f64 / GB as f64),
            b if b >= MB => format!("{:.1} MB", b as f64 / MB as f64),
            b if b >= KB => format!("{:.1} KB", b as f64 / KB as f64),
            b => format!("{b} B"),
        }
    }

    fn format_number(n: usize) -> String {
        let digits = n.to_string();
        let mut result = String::with_capacity(digits.len() + digits.len() / 3);
        for (i, c) in digits.chars().enumerate() {
            if i > 0 && (digits.len() - i) % 3 == 0 {
                result.push(',');
            }
            result.push(c);
        }
        result
    }
}

impl OutputFormatter for HumanFormatter {
    fn format_creation_result(&self, report: &CreationReport) -> Result<()> {
        if self.quiet {
            return Ok(());
        }

        for warning in &report.warnings {
            self.format_warning(warning);
        }

        self.format_success(&format!(
            "Zip file created: {}",
            report.output_path.display()
        ));

        if self.verbose {
            self.line(&format!(
                "  Files added:      {}",
                Self::format_number(report.files_added)
            ));
            self.line(&format!(
                "  Empty dirs:       {}",
                Self::format_number(report.directories_added)
            ));
            self.line(&format!(
                "  Total entries:    {}",
                Self::format_number(report.total_items())
            ));
            if report.entries_skipped > 0 {
                self.line(&format!("  Skipped:          {}", report.entries_skipped));
            }
            self.line(&format!(
                "  Total size:       {}",
                Self::format_size(report.bytes_written)
            ));
            self.line(&format!(
                "  Compressed size:  {} ({:.1}% saved)",
                Self::format_size(report.bytes_compressed),
                report.compression_percentage()
            ));
            if report.encrypted {
                self.line("  Encryption:       AES-256");
            }
            self.line(&format!("  Duration:         {:?}", report.duration));
        }

        Ok(())
    }

    fn format_extraction_result(&self, report: &ExtractionReport) -> Result<()> {
        if self.quiet {
            return Ok(());
        }

        for warning in &report.warnings {
            self.format_warning(warning);
        }

        self.format_success("Extraction completed.");

        if self.verbose {
            self.line(&format!(
                "  Files extracted: {}",
                Self::format_number(report.files_extracted)
            ));
            self.line(&format!(
                "  Directories:     {}",
                Self::format_number(report.directories_created)
            ));
            self.line(&format!(
                "  Total size:      {}",
                Self::format_size(report.bytes_written)
            ));
            self.line(&format!(
                "  Total items:     {}",
                Self::format_number(report.total_items())
            ));
            self.line(&format!("  Status:          {}", report.zip_status));
            if report.source_deleted {
                self.line(&format!("  Deleted:         {}", report.source.display()));
            }
            self.line(&format!("  Duration:        {:?}", report.duration));
        }

        Ok(())
    }

    fn format_info(&self, message: &str) {
        if !self.quiet {
            self.line(message);
        }
    }

    fn format_error(&self, error: &anyhow::Error) {
        // Always show errors, even in quiet mode
        if self.use_colors {
            let _ = self
                .err_term
                .write_line(&format!("{} {error:?}", style("ERROR:").red().bold()));
        } else {
            let _ = self.err_term.write_line(&format!("ERROR: {error:?}"));
        }
    }

    fn format_success(&self, message: &str) {
        if self.quiet {
            return;
        }

        if self.use_colors {
            self.line(&format!("{} {message}", style("✓").green().bold()));
        } else {
            self.line(message);
        }
    }

    fn format_warning(&self, message: &str) {
        if self.quiet {
            return;
        }

        if self.use_colors {
            self.line(&format!("{} {message}", style("⚠").yellow().bold()));
        } else {
            self.line(&format!("WARNING: {message}"));
        }
    }
}
