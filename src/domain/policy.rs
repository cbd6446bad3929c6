//! Comparison policy: exclusions and package name normalization

use std::collections::BTreeMap;

/// Packages deliberately left out of the comparison.
///
/// Their minimum versions are environment-specific or intentionally unpinned
/// in at least one of the three sources, so comparing them only produces
/// noise.
pub const EXCLUDED_PACKAGES: &[&str] = &["tzdata", "blosc"];

/// The test-runner key in the compat table. It is not a runtime optional
/// dependency and is stripped from the code table; the manifest side removes
/// it via the `all − test` group subtraction instead.
pub const TEST_RUNNER: &str = "pytest";

/// Whether a package is on the exclusion list
pub fn is_excluded(package: &str) -> bool {
    EXCLUDED_PACKAGES.contains(&package)
}

/// Normalize a package key into the shared key space of all three sources:
/// map an import name to its published distribution name (identity when no
/// alias exists), then lowercase.
pub fn normalize_name(aliases: &BTreeMap<String, String>, name: &str) -> String {
    aliases
        .get(name)
        .map(String::as_str)
        .unwrap_or(name)
        .to_lowercase()
}
