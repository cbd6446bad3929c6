//! Text output formatter for human-readable display
//!
//! This module provides:
//! - A per-file mismatch report listing each differing package with the
//!   version every source records (or "Not specified")
//! - A short confirmation when everything is in sync
//! - Verbose listing of every compared descriptor

use crate::checker::{CheckOutcome, FileReport};
use crate::output::{OutputFormatter, Verbosity};
use colored::Colorize;
use std::io::Write;

/// Marker printed for a source that does not mention the package
const NOT_SPECIFIED: &str = "Not specified";

/// Text formatter for human-readable output
pub struct TextFormatter {
    /// Verbosity level
    verbosity: Verbosity,
}

impl TextFormatter {
    /// Create a new text formatter
    pub fn new(verbosity: Verbosity) -> Self {
        Self { verbosity }
    }

    fn format_report(
        &self,
        outcome: &CheckOutcome,
        report: &FileReport,
        writer: &mut dyn Write,
    ) -> std::io::Result<()> {
        writeln!(
            writer,
            "The following minimum version differences were found between {}, {} and {}. \
             Please ensure these are aligned:",
            report.path.display(),
            outcome.compat_path.display(),
            outcome.pyproject_path.display()
        )?;
        writeln!(writer)?;

        for entry in &report.differences {
            let missing = NOT_SPECIFIED.yellow().to_string();
            let version = |v: &Option<String>| match v {
                Some(v) => v.clone(),
                None => missing.clone(),
            };
            writeln!(writer, "{}", entry.package.bold())?;
            writeln!(writer, "{}: {}", report.path.display(), version(&entry.ci))?;
            writeln!(
                writer,
                "{}: {}",
                outcome.compat_path.display(),
                version(&entry.code)
            )?;
            writeln!(
                writer,
                "{}: {}",
                outcome.pyproject_path.display(),
                version(&entry.manifest)
            )?;
            writeln!(writer)?;
        }

        Ok(())
    }
}

impl OutputFormatter for TextFormatter {
    fn format(&self, outcome: &CheckOutcome, writer: &mut dyn Write) -> std::io::Result<()> {
        if self.verbosity == Verbosity::Verbose {
            for report in &outcome.reports {
                let status = if report.is_in_sync() {
                    "in sync".green().to_string()
                } else {
                    format!("{} differing", report.differences.len())
                        .red()
                        .to_string()
                };
                writeln!(writer, "checked {}: {}", report.path.display(), status)?;
            }
            writeln!(writer)?;
        }

        for report in &outcome.reports {
            if !report.is_in_sync() {
                self.format_report(outcome, report, writer)?;
            }
        }

        if !outcome.has_differences() && self.verbosity != Verbosity::Quiet {
            writeln!(
                writer,
                "{} CI descriptor(s) in sync with {} and {}",
                outcome.files_checked(),
                outcome.compat_path.display(),
                outcome.pyproject_path.display()
            )?;
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::diff::DiffEntry;
    use std::path::PathBuf;

    fn outcome_with(differences: Vec<DiffEntry>) -> CheckOutcome {
        CheckOutcome {
            compat_path: PathBuf::from("pandas/compat/_optional.py"),
            pyproject_path: PathBuf::from("pyproject.toml"),
            reports: vec![FileReport {
                path: PathBuf::from("ci/deps/minimum_versions.yaml"),
                differences,
            }],
        }
    }

    fn render(outcome: &CheckOutcome, verbosity: Verbosity) -> String {
        let mut buf = Vec::new();
        TextFormatter::new(verbosity)
            .format(outcome, &mut buf)
            .unwrap();
        String::from_utf8(buf).unwrap()
    }

    #[test]
    fn test_mismatch_report_lists_all_three_sources() {
        let outcome = outcome_with(vec![DiffEntry {
            package: "foo".to_string(),
            ci: Some("1.1".to_string()),
            code: Some("1.0".to_string()),
            manifest: None,
        }]);
        let out = render(&outcome, Verbosity::Normal);
        assert!(out.contains("Please ensure these are aligned"));
        assert!(out.contains("foo"));
        assert!(out.contains("ci/deps/minimum_versions.yaml: 1.1"));
        assert!(out.contains("pandas/compat/_optional.py: 1.0"));
        assert!(out.contains("Not specified"));
    }

    #[test]
    fn test_in_sync_confirmation() {
        let outcome = outcome_with(vec![]);
        let out = render(&outcome, Verbosity::Normal);
        assert!(out.contains("in sync"));
        assert!(!out.contains("Please ensure"));
    }

    #[test]
    fn test_quiet_in_sync_prints_nothing() {
        let outcome = outcome_with(vec![]);
        let out = render(&outcome, Verbosity::Quiet);
        assert!(out.is_empty());
    }

    #[test]
    fn test_quiet_still_prints_mismatches() {
        let outcome = outcome_with(vec![DiffEntry {
            package: "foo".to_string(),
            ci: Some("1.1".to_string()),
            code: Some("1.0".to_string()),
            manifest: Some("1.0".to_string()),
        }]);
        let out = render(&outcome, Verbosity::Quiet);
        assert!(out.contains("Please ensure these are aligned"));
    }

    #[test]
    fn test_verbose_lists_every_file() {
        let outcome = outcome_with(vec![]);
        let out = render(&outcome, Verbosity::Verbose);
        assert!(out.contains("checked ci/deps/minimum_versions.yaml"));
    }
}
