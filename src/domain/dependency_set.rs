//! Package → minimum-version mapping built by the source readers

use std::collections::{BTreeMap, BTreeSet};

/// A snapshot mapping normalized package names to their declared minimum
/// version.
///
/// Versions are opaque strings: the tool never orders them, it only compares
/// them for textual equality. Keys are expected to be normalized (aliased and
/// lowercased) by the reader that built the set, so that all three sources
/// share one key space.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DependencySet {
    records: BTreeMap<String, String>,
}

impl DependencySet {
    /// Create an empty set
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a package's minimum version, replacing any earlier entry
    pub fn insert(&mut self, package: impl Into<String>, version: impl Into<String>) {
        self.records.insert(package.into(), version.into());
    }

    /// Remove a package, if present
    pub fn remove(&mut self, package: &str) {
        self.records.remove(package);
    }

    /// Look up the recorded version for a package
    pub fn get(&self, package: &str) -> Option<&str> {
        self.records.get(package).map(String::as_str)
    }

    /// Whether a package is recorded in this set
    pub fn contains(&self, package: &str) -> bool {
        self.records.contains_key(package)
    }

    /// Number of recorded packages
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether the set is empty
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Iterate over (package, version) entries in name order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.records
            .iter()
            .map(|(name, version)| (name.as_str(), version.as_str()))
    }

    /// The full (package, version) pair set.
    ///
    /// This is the view the differ operates on: a package counts as agreeing
    /// across sources only when the whole pair matches, so three sources with
    /// three different versions contribute three distinct pairs.
    pub fn pairs(&self) -> BTreeSet<(&str, &str)> {
        self.iter().collect()
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for DependencySet {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut set = Self::new();
        for (package, version) in iter {
            set.insert(package, version);
        }
        set
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_insert_and_get() {
        let mut set = DependencySet::new();
        set.insert("numpy", "1.22.4");
        assert_eq!(set.get("numpy"), Some("1.22.4"));
        assert_eq!(set.get("scipy"), None);
        assert!(set.contains("numpy"));
        assert!(!set.contains("scipy"));
    }

    #[test]
    fn test_insert_replaces() {
        let mut set = DependencySet::new();
        set.insert("numpy", "1.22.4");
        set.insert("numpy", "1.23.0");
        assert_eq!(set.len(), 1);
        assert_eq!(set.get("numpy"), Some("1.23.0"));
    }

    #[test]
    fn test_remove() {
        let mut set = DependencySet::from_iter([("numpy", "1.22.4"), ("scipy", "1.8.1")]);
        set.remove("numpy");
        assert_eq!(set.len(), 1);
        assert!(!set.contains("numpy"));
        set.remove("not-there");
        assert_eq!(set.len(), 1);
    }

    #[test]
    fn test_iter_is_name_ordered() {
        let set = DependencySet::from_iter([("zlib", "1.0"), ("aiohttp", "3.8")]);
        let names: Vec<&str> = set.iter().map(|(name, _)| name).collect();
        assert_eq!(names, vec!["aiohttp", "zlib"]);
    }

    #[test]
    fn test_pairs_distinguish_versions() {
        let a = DependencySet::from_iter([("numpy", "1.22.4")]);
        let b = DependencySet::from_iter([("numpy", "1.23.0")]);
        assert_ne!(a.pairs(), b.pairs());
        assert_eq!(a.pairs(), a.clone().pairs());
    }

    #[test]
    fn test_empty() {
        let set = DependencySet::new();
        assert!(set.is_empty());
        assert_eq!(set.len(), 0);
        assert!(set.pairs().is_empty());
    }
}
