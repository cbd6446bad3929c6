//! JSON output formatter for machine processing
//!
//! Schema:
//!
//! ```json
//! {
//!   "in_sync": false,
//!   "files_checked": 2,
//!   "compat_path": "pandas/compat/_optional.py",
//!   "pyproject_path": "pyproject.toml",
//!   "files": [
//!     {
//!       "path": "ci/deps/minimum_versions.yaml",
//!       "differences": [
//!         { "package": "foo", "ci": "1.1", "code": "1.0", "manifest": null }
//!       ]
//!     }
//!   ]
//! }
//! ```

use crate::checker::{CheckOutcome, FileReport};
use crate::output::OutputFormatter;
use serde::Serialize;
use std::io::Write;
use std::path::Path;

#[derive(Serialize)]
struct JsonReport<'a> {
    in_sync: bool,
    files_checked: usize,
    compat_path: &'a Path,
    pyproject_path: &'a Path,
    files: &'a [FileReport],
}

/// JSON formatter
#[derive(Default)]
pub struct JsonFormatter;

impl JsonFormatter {
    /// Create a new JSON formatter
    pub fn new() -> Self {
        Self
    }
}

impl OutputFormatter for JsonFormatter {
    fn format(&self, outcome: &CheckOutcome, writer: &mut dyn Write) -> std::io::Result<()> {
        let report = JsonReport {
            in_sync: !outcome.has_differences(),
            files_checked: outcome.files_checked(),
            compat_path: &outcome.compat_path,
            pyproject_path: &outcome.pyproject_path,
            files: &outcome.reports,
        };
        serde_json::to_writer_pretty(&mut *writer, &report)?;
        writeln!(writer)
    }
}
