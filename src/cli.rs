//! CLI argument parsing module for versync

use clap::Parser;
use std::path::{Path, PathBuf};

/// Minimum-version sync checker for optional dependencies
#[derive(Parser, Debug, Clone)]
#[command(
    name = "versync",
    version,
    about = "Checks that dependency minimum versions agree across CI configs, \
             pyproject.toml and the in-code compatibility table"
)]
pub struct CliArgs {
    /// Project root to check (default: current directory)
    #[arg(default_value = ".")]
    pub path: PathBuf,

    // Source locations, resolved relative to the project root when relative.
    // The defaults mirror the repository layout this hook was written for.
    /// Directory scanned recursively for CI environment descriptors
    #[arg(long, default_value = "ci/deps")]
    pub ci_dir: PathBuf,

    /// Package manifest with the optional-dependency groups
    #[arg(long, default_value = "pyproject.toml")]
    pub pyproject: PathBuf,

    /// Source module declaring the in-code compatibility table
    #[arg(long, default_value = "pandas/compat/_optional.py")]
    pub compat: PathBuf,

    // Output options
    /// Output the report in JSON format
    #[arg(long)]
    pub json: bool,

    /// Enable verbose output
    #[arg(long)]
    pub verbose: bool,

    /// Enable quiet mode - minimal output
    #[arg(short, long)]
    pub quiet: bool,
}

impl CliArgs {
    fn resolve(&self, path: &Path) -> PathBuf {
        if path.is_absolute() {
            path.to_path_buf()
        } else {
            self.path.join(path)
        }
    }

    /// CI descriptor directory resolved against the project root
    pub fn ci_dir(&self) -> PathBuf {
        self.resolve(&self.ci_dir)
    }

    /// Manifest path resolved against the project root
    pub fn pyproject(&self) -> PathBuf {
        self.resolve(&self.pyproject)
    }

    /// Compat module path resolved against the project root
    pub fn compat(&self) -> PathBuf {
        self.resolve(&self.compat)
    }
}
