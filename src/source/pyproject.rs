//! pyproject.toml optional-dependency reader
//!
//! Handles:
//! - project.optional-dependencies (PEP 621)
//! - the `all` group minus the `test` group, which is the set of optional
//!   dependencies the package actually advertises to installers
//!
//! Every advertised dependency string is expected to carry a `>=` pin; any
//! other comparator is a fatal parse error, because a manifest that drifts to
//! exact or upper-bound pins can no longer be compared as minimum versions.

use crate::domain::{is_excluded, normalize_name, DependencySet};
use crate::error::SourceError;
use std::collections::BTreeMap;
use std::collections::BTreeSet;
use std::path::Path;
use toml::Value;

/// Extract the named group from project.optional-dependencies as a set of
/// dependency strings.
fn group<'a>(
    optional: &'a toml::Table,
    name: &str,
    path: &Path,
) -> Result<BTreeSet<&'a str>, SourceError> {
    let deps = optional
        .get(name)
        .and_then(|g| g.as_array())
        .ok_or_else(|| SourceError::missing_group(path, name))?;
    Ok(deps.iter().filter_map(Value::as_str).collect())
}

/// Build the advertised optional-dependency set from a pyproject.toml
/// document.
///
/// Computes `all − test` over the optional-dependency groups, splits each
/// remaining string on `>=`, and normalizes the package name through the
/// alias map. `path` is only used for error messages.
pub fn parse(
    content: &str,
    aliases: &BTreeMap<String, String>,
    path: &Path,
) -> Result<DependencySet, SourceError> {
    let doc: Value = content
        .parse()
        .map_err(|e: toml::de::Error| SourceError::toml_parse_error(path, e.to_string()))?;

    let optional = doc
        .get("project")
        .and_then(|p| p.get("optional-dependencies"))
        .and_then(|d| d.as_table())
        .ok_or_else(|| SourceError::missing_group(path, "project.optional-dependencies"))?;

    let all = group(optional, "all", path)?;
    let test = group(optional, "test", path)?;

    let mut set = DependencySet::new();
    for dep in all.difference(&test) {
        let (package, version) = dep
            .trim()
            .split_once(">=")
            .ok_or_else(|| SourceError::unexpected_pin(path, *dep))?;
        set.insert(normalize_name(aliases, package), version);
    }

    for &package in crate::domain::EXCLUDED_PACKAGES {
        set.remove(package);
    }

    Ok(set)
}
