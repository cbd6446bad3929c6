//! In-code compatibility table reader
//!
//! The checked project declares its minimum supported versions in a source
//! module as two dict literals:
//!
//! ```text
//! VERSIONS = {
//!     "bs4": "4.11.2",
//!     ...
//! }
//! INSTALL_MAPPING = {
//!     "bs4": "beautifulsoup4",
//!     ...
//! }
//! ```
//!
//! A pre-commit tool cannot import that module, so the two tables are lifted
//! out textually: scan for the assignment line, then collect quoted
//! key/value entries until the closing brace.

use crate::domain::{is_excluded, normalize_name, DependencySet, TEST_RUNNER};
use crate::error::SourceError;
use regex::Regex;
use std::collections::BTreeMap;
use std::path::Path;
use std::sync::LazyLock;

// Matches one dict entry, e.g. `"bs4": "4.11.2",`
static ENTRY_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"^"([^"]+)"\s*:\s*"([^"]*)"\s*,?$"#).unwrap());

/// The compatibility table declared by the checked project: minimum versions
/// keyed by import name, plus the import-name → distribution-name aliases.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CompatTable {
    versions: BTreeMap<String, String>,
    install_mapping: BTreeMap<String, String>,
}

/// Collect the `NAME = {` dict literal starting at `start`, stopping at the
/// closing brace. Non-entry lines (comments, blank lines) inside the block
/// are skipped.
fn collect_block(lines: &[&str], start: usize) -> BTreeMap<String, String> {
    let mut entries = BTreeMap::new();
    for line in &lines[start + 1..] {
        let line = line.trim();
        if line.starts_with('}') {
            break;
        }
        if let Some(caps) = ENTRY_RE.captures(line) {
            entries.insert(caps[1].to_string(), caps[2].to_string());
        }
    }
    entries
}

impl CompatTable {
    /// Extract the `VERSIONS` and `INSTALL_MAPPING` tables from the raw text
    /// of the compat module. A module without `VERSIONS` is unusable; a
    /// module without `INSTALL_MAPPING` simply has no renamed packages.
    /// `path` is only used for error messages.
    pub fn parse(content: &str, path: &Path) -> Result<Self, SourceError> {
        let lines: Vec<&str> = content.lines().collect();
        let find = |name: &str| {
            lines
                .iter()
                .position(|line| line.trim_start().starts_with(&format!("{name} = {{")))
        };

        let versions_at = find("VERSIONS")
            .ok_or_else(|| SourceError::missing_table(path, "VERSIONS"))?;
        let versions = collect_block(&lines, versions_at);
        let install_mapping = find("INSTALL_MAPPING")
            .map(|at| collect_block(&lines, at))
            .unwrap_or_default();

        Ok(Self {
            versions,
            install_mapping,
        })
    }

    /// The import-name → distribution-name aliases, shared with the manifest
    /// reader so that all three sources use one key space.
    pub fn install_mapping(&self) -> &BTreeMap<String, String> {
        &self.install_mapping
    }

    /// Build the code-table dependency set: excluded packages and the
    /// test-runner key are dropped, remaining keys are aliased and
    /// lowercased. No error paths.
    pub fn optional_versions(&self) -> DependencySet {
        self.versions
            .iter()
            .filter(|(package, _)| !is_excluded(package) && *package != TEST_RUNNER)
            .map(|(package, version)| {
                (normalize_name(&self.install_mapping, package), version.clone())
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn parse(content: &str) -> Result<CompatTable, SourceError> {
        CompatTable::parse(content, &PathBuf::from("_optional.py"))
    }

    const MODULE: &str = r#"
from __future__ import annotations

VERSIONS = {
    "bs4": "4.11.2",
    # comment inside the table
    "numpy": "1.22.4",
    "pytest": "7.3.2",
    "tzdata": "2022.1",
}

INSTALL_MAPPING = {
    "bs4": "beautifulsoup4",
}
"#;

    #[test]
    fn test_parse_versions_and_mapping() {
        let table = parse(MODULE).unwrap();
        assert_eq!(
            table.install_mapping().get("bs4"),
            Some(&"beautifulsoup4".to_string())
        );
    }

    #[test]
    fn test_optional_versions_normalization() {
        let set = parse(MODULE).unwrap().optional_versions();
        assert_eq!(set.get("beautifulsoup4"), Some("4.11.2"));
        assert_eq!(set.get("numpy"), Some("1.22.4"));
        assert!(!set.contains("bs4"));
    }

    #[test]
    fn test_test_runner_is_dropped() {
        let set = parse(MODULE).unwrap().optional_versions();
        assert!(!set.contains("pytest"));
    }

    #[test]
    fn test_excluded_packages_are_dropped() {
        let set = parse(MODULE).unwrap().optional_versions();
        assert!(!set.contains("tzdata"));
    }

    #[test]
    fn test_missing_versions_table_is_an_error() {
        let err = parse("INSTALL_MAPPING = {\n}\n").unwrap_err();
        assert!(matches!(err, SourceError::MissingTable { ref table, .. } if table == "VERSIONS"));
    }

    #[test]
    fn test_missing_install_mapping_means_no_aliases() {
        let content = "VERSIONS = {\n    \"numpy\": \"1.22.4\",\n}\n";
        let table = parse(content).unwrap();
        assert!(table.install_mapping().is_empty());
        assert_eq!(table.optional_versions().get("numpy"), Some("1.22.4"));
    }

    #[test]
    fn test_keys_are_lowercased() {
        let content = "VERSIONS = {\n    \"SQLAlchemy\": \"1.4.36\",\n}\n";
        let set = parse(content).unwrap().optional_versions();
        assert_eq!(set.get("sqlalchemy"), Some("1.4.36"));
    }
}
