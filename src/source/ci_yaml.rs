//! CI environment descriptor parser
//!
//! Handles:
//! - Sentinel-comment section detection ("# required dependencies",
//!   "# optional dependencies")
//! - Dependency lines of the form `- name<pin>version  # comment`
//! - `- pip:` sub-list markers
//!
//! The descriptors are YAML, but they are deliberately not parsed with a YAML
//! parser: the section boundaries live in comments, which any real parser
//! throws away. A line scanner with a small state machine is the whole job.

use crate::domain::{is_excluded, DependencySet};

/// Sentinel comment opening the required-dependency section
const REQUIRED_SENTINEL: &str = "# required dependencies";

/// Sentinel comment opening the optional-dependency section
const OPTIONAL_SENTINEL: &str = "# optional dependencies";

/// Section state while scanning a descriptor.
///
/// Dependency lines only count once the required sentinel has gone by; an
/// optional sentinel on its own does not open a section. Once both sentinels
/// have been seen the optional section is absorbing: a repeated required
/// sentinel does not reopen the required section.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Section {
    /// Required sentinel not seen yet; lines are ignored. Remembers whether
    /// the optional sentinel has already gone by.
    Scanning { optional_seen: bool },
    /// After the required sentinel, before the optional one
    Required,
    /// After both sentinels
    Optional,
}

impl Section {
    fn after_required_sentinel(self) -> Self {
        match self {
            Section::Scanning {
                optional_seen: false,
            } => Section::Required,
            Section::Scanning {
                optional_seen: true,
            } => Section::Optional,
            other => other,
        }
    }

    fn after_optional_sentinel(self) -> Self {
        match self {
            Section::Scanning { .. } => Section::Scanning {
                optional_seen: true,
            },
            _ => Section::Optional,
        }
    }
}

/// Minimum versions extracted from one CI descriptor file
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CiVersions {
    /// Packages listed under the required-dependency sentinel
    pub required: DependencySet,
    /// Packages listed under the optional-dependency sentinel.
    ///
    /// Only this set participates in the three-way comparison; the required
    /// set is extracted but not currently checked against the other sources.
    pub optional: DependencySet,
}

/// Version pin operators, tried in this order. A line carrying both `>=` and
/// `<` (a range constraint) splits at `>=` and keeps the rest glued to the
/// version token; kept for compatibility with the descriptors in the wild.
const PINS: &[&str] = &["==", ">=", "=", "<"];

/// Split a dependency declaration into (package, version) at the first pin
/// operator found. Without any pin the whole line is the package and the
/// version is empty.
fn split_pin(line: &str) -> (&str, &str) {
    for pin in PINS {
        if let Some((package, version)) = line.split_once(pin) {
            return (package, version);
        }
    }
    (line, "")
}

/// Extract the required and optional minimum-version sets from the raw text
/// of a CI descriptor.
///
/// Dependency lines carry a two-character list-item prefix ("- ") which is
/// stripped from the package token before lowercasing. Excluded packages are
/// dropped. Lines before the required sentinel, blank lines and `- pip:`
/// markers contribute nothing.
pub fn parse(content: &str) -> CiVersions {
    let mut section = Section::Scanning {
        optional_seen: false,
    };
    let mut versions = CiVersions::default();

    for line in content.lines() {
        if line.contains(REQUIRED_SENTINEL) {
            section = section.after_required_sentinel();
            continue;
        }
        if line.contains(OPTIONAL_SENTINEL) {
            section = section.after_optional_sentinel();
            continue;
        }
        if line.contains("- pip:") {
            continue;
        }
        if matches!(section, Section::Scanning { .. }) || line.trim().is_empty() {
            continue;
        }

        // Trailing comments are not part of the declaration
        let line = line.split('#').next().unwrap_or("");
        let (package, version) = split_pin(line.trim());

        // Drop the two-character bullet prefix
        let package = package.get(2..).unwrap_or("").to_lowercase();
        if is_excluded(&package) {
            continue;
        }

        match section {
            Section::Required => versions.required.insert(package, version),
            Section::Optional => versions.optional.insert(package, version),
            Section::Scanning { .. } => unreachable!(),
        }
    }

    versions
}
