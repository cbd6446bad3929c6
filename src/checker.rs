//! Check driver coordinating the whole comparison pass
//!
//! This module provides:
//! - CI descriptor discovery (flat in the project root, recursive under the
//!   CI dependency directory)
//! - One-time construction of the code-table and manifest sets
//! - An independent three-way diff per discovered descriptor
//! - Aggregation into a single outcome the caller turns into an exit code

use crate::cli::CliArgs;
use crate::diff::{find_diff, DiffEntry};
use crate::error::{AppError, IoError, SourceError};
use crate::source::{ci_yaml, pyproject, CompatTable};
use serde::Serialize;
use std::fs;
use std::path::{Path, PathBuf};

/// Comparison result for one CI descriptor file
#[derive(Debug, Clone, Serialize)]
pub struct FileReport {
    /// The descriptor that was compared
    pub path: PathBuf,
    /// Differing packages; empty when the file agrees with both other sources
    pub differences: Vec<DiffEntry>,
}

impl FileReport {
    /// Whether this descriptor agrees with the code table and manifest
    pub fn is_in_sync(&self) -> bool {
        self.differences.is_empty()
    }
}

/// Aggregated result of a full comparison pass
#[derive(Debug, Clone, Serialize)]
pub struct CheckOutcome {
    /// The compat module the code table was read from
    pub compat_path: PathBuf,
    /// The manifest the optional-dependency groups were read from
    pub pyproject_path: PathBuf,
    /// One report per discovered descriptor, in path order
    pub reports: Vec<FileReport>,
}

impl CheckOutcome {
    /// Whether any descriptor disagreed with the other two sources
    pub fn has_differences(&self) -> bool {
        self.reports.iter().any(|report| !report.is_in_sync())
    }

    /// Number of descriptors that were compared
    pub fn files_checked(&self) -> usize {
        self.reports.len()
    }
}

/// Driver for the comparison pass
pub struct Checker {
    args: CliArgs,
}

impl Checker {
    /// Create a new checker with the given CLI arguments
    pub fn new(args: CliArgs) -> Self {
        Self { args }
    }

    /// Run the whole pass: build the two fixed sets once, then compare every
    /// discovered CI descriptor against them.
    ///
    /// Source parse failures are fatal and abort before any report exists;
    /// version differences never abort — every descriptor is evaluated and
    /// reported.
    pub fn run(&self) -> Result<CheckOutcome, AppError> {
        let compat_path = self.args.compat();
        let compat = CompatTable::parse(&read_source(&compat_path)?, &compat_path)?;
        let code_optional = compat.optional_versions();

        let pyproject_path = self.args.pyproject();
        let manifest_optional = pyproject::parse(
            &read_source(&pyproject_path)?,
            compat.install_mapping(),
            &pyproject_path,
        )?;

        let mut outcome = CheckOutcome {
            compat_path,
            pyproject_path,
            reports: Vec::new(),
        };
        for path in discover_ci_files(&self.args.path, &self.args.ci_dir())? {
            let ci = ci_yaml::parse(&read_source(&path)?);
            let differences = find_diff(&ci.optional, &code_optional, &manifest_optional);
            outcome.reports.push(FileReport { path, differences });
        }

        Ok(outcome)
    }
}

fn read_source(path: &Path) -> Result<String, SourceError> {
    if !path.exists() {
        return Err(SourceError::not_found(path));
    }
    fs::read_to_string(path).map_err(|e| SourceError::read_error(path, e))
}

fn is_yaml(path: &Path) -> bool {
    matches!(
        path.extension().and_then(|ext| ext.to_str()),
        Some("yml") | Some("yaml")
    )
}

/// Discover CI descriptors: `.yml`/`.yaml` files directly in the project
/// root, plus everything under the CI dependency directory, recursively.
/// Either location may be empty or absent. Results are sorted so repeated
/// runs report in the same order.
fn discover_ci_files(root: &Path, ci_dir: &Path) -> Result<Vec<PathBuf>, IoError> {
    let mut files = Vec::new();

    for entry in fs::read_dir(root).map_err(|e| IoError::list_dir(root, e))? {
        let path = entry.map_err(|e| IoError::list_dir(root, e))?.path();
        if path.is_file() && is_yaml(&path) {
            files.push(path);
        }
    }

    if ci_dir.is_dir() {
        collect_yaml_recursive(ci_dir, &mut files)?;
    }

    files.sort();
    Ok(files)
}

fn collect_yaml_recursive(dir: &Path, files: &mut Vec<PathBuf>) -> Result<(), IoError> {
    for entry in fs::read_dir(dir).map_err(|e| IoError::list_dir(dir, e))? {
        let path = entry.map_err(|e| IoError::list_dir(dir, e))?.path();
        if path.is_dir() {
            collect_yaml_recursive(&path, files)?;
        } else if is_yaml(&path) {
            files.push(path);
        }
    }
    Ok(())
}
