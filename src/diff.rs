//! Three-way minimum-version diff
//!
//! The comparison is over full (package, version) pairs: a package only
//! agrees across the three sources when all of them record the exact same
//! version string. Versions are opaque, so even a cosmetic difference such as
//! `1.0` vs `1.0.0` is a mismatch; the gate exists to force the sources to be
//! textually identical.

use crate::domain::DependencySet;
use serde::Serialize;
use std::collections::BTreeSet;

/// One differing package, with the version each source records (`None` when
/// the source does not mention the package at all).
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DiffEntry {
    /// Normalized package name
    pub package: String,
    /// Version recorded by the CI descriptor
    pub ci: Option<String>,
    /// Version recorded by the in-code compatibility table
    pub code: Option<String>,
    /// Version recorded by the package manifest
    pub manifest: Option<String>,
}

/// Compare the three optional-dependency sets and return one entry per
/// package whose (package, version) pair is not common to all three.
///
/// Formally this is the symmetric difference `(A ∪ B ∪ C) − (A ∩ B ∩ C)`
/// over pair sets, collapsed to package names. Entries come back sorted by
/// package name so repeated runs produce identical output.
pub fn find_diff(ci: &DependencySet, code: &DependencySet, manifest: &DependencySet) -> Vec<DiffEntry> {
    let ci_pairs = ci.pairs();
    let code_pairs = code.pairs();
    let manifest_pairs = manifest.pairs();

    let union: BTreeSet<_> = ci_pairs
        .iter()
        .chain(code_pairs.iter())
        .chain(manifest_pairs.iter())
        .copied()
        .collect();
    let common: BTreeSet<_> = ci_pairs
        .iter()
        .filter(|pair| code_pairs.contains(*pair) && manifest_pairs.contains(*pair))
        .copied()
        .collect();

    let packages: BTreeSet<&str> = union
        .difference(&common)
        .map(|(package, _)| *package)
        .collect();

    packages
        .into_iter()
        .map(|package| DiffEntry {
            package: package.to_string(),
            ci: ci.get(package).map(str::to_string),
            code: code.get(package).map(str::to_string),
            manifest: manifest.get(package).map(str::to_string),
        })
        .collect()
}
