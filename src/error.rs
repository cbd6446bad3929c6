//! Application error types using thiserror
//!
//! Error hierarchy:
//! - SourceError: Issues reading or parsing one of the three version sources
//! - IoError: File discovery failures
//!
//! Source parse errors are fatal: they abort the run before any report is
//! produced. Version mismatches are not errors at all — they accumulate into
//! the check outcome and only influence the exit status.

use std::path::PathBuf;
use thiserror::Error;

/// Application-level error type
#[derive(Error, Debug)]
pub enum AppError {
    /// Version source related errors
    #[error(transparent)]
    Source(#[from] SourceError),

    /// IO related errors
    #[error(transparent)]
    Io(#[from] IoError),
}

/// Errors related to reading and parsing the version sources
#[derive(Error, Debug)]
pub enum SourceError {
    /// Source file not found
    #[error("source file not found: {path}")]
    NotFound { path: PathBuf },

    /// Failed to read a source file
    #[error("failed to read {path}: {source}")]
    ReadError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// TOML parsing error (pyproject.toml)
    #[error("failed to parse TOML in {path}: {message}")]
    TomlParseError { path: PathBuf, message: String },

    /// A required optional-dependency group is missing from the manifest
    #[error("missing optional-dependency group '{group}' in {path}")]
    MissingGroup { path: PathBuf, group: String },

    /// A manifest dependency string does not use the minimum-version pin
    #[error("dependency '{spec}' in {path} is not pinned with '>='")]
    UnexpectedPin { path: PathBuf, spec: String },

    /// The compat module does not declare the expected table
    #[error("table '{table}' not found in {path}")]
    MissingTable { path: PathBuf, table: String },
}

/// Errors related to IO operations
#[derive(Error, Debug)]
pub enum IoError {
    /// Directory could not be listed
    #[error("failed to list directory {path}: {source}")]
    ListDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl SourceError {
    /// Creates a new NotFound error
    pub fn not_found(path: impl Into<PathBuf>) -> Self {
        SourceError::NotFound { path: path.into() }
    }

    /// Creates a new ReadError
    pub fn read_error(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        SourceError::ReadError {
            path: path.into(),
            source,
        }
    }

    /// Creates a new TomlParseError
    pub fn toml_parse_error(path: impl Into<PathBuf>, message: impl Into<String>) -> Self {
        SourceError::TomlParseError {
            path: path.into(),
            message: message.into(),
        }
    }

    /// Creates a new MissingGroup error
    pub fn missing_group(path: impl Into<PathBuf>, group: impl Into<String>) -> Self {
        SourceError::MissingGroup {
            path: path.into(),
            group: group.into(),
        }
    }

    /// Creates a new UnexpectedPin error
    pub fn unexpected_pin(path: impl Into<PathBuf>, spec: impl Into<String>) -> Self {
        SourceError::UnexpectedPin {
            path: path.into(),
            spec: spec.into(),
        }
    }

    /// Creates a new MissingTable error
    pub fn missing_table(path: impl Into<PathBuf>, table: impl Into<String>) -> Self {
        SourceError::MissingTable {
            path: path.into(),
            table: table.into(),
        }
    }
}

impl IoError {
    /// Creates a new ListDir error
    pub fn list_dir(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        IoError::ListDir {
            path: path.into(),
            source,
        }
    }
}
