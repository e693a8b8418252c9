// Ordered namespace prefix -> root directory registry

use std::path::{Path, PathBuf};

/// Ordered mapping of namespace prefixes to base directories.
///
/// Registration order is significant: resolution scans entries in the
/// order they were added and the first matching prefix wins. Adding an
/// existing prefix overwrites its root but keeps its position; new
/// prefixes are appended.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NamespaceMap {
    entries: Vec<(String, PathBuf)>,
}

impl NamespaceMap {
    /// Create an empty map.
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a map from an ordered sequence of (prefix, root) pairs.
    /// Roots are expected to be absolute; nothing is checked against the
    /// filesystem at construction time.
    pub fn from_entries<I, P, R>(entries: I) -> Self
    where
        I: IntoIterator<Item = (P, R)>,
        P: Into<String>,
        R: Into<PathBuf>,
    {
        let mut map = Self::new();
        for (prefix, root) in entries {
            map.add(prefix, root);
        }
        map
    }

    /// Register a namespace root. Overwrites in place if the prefix is
    /// already registered, otherwise appends.
    pub fn add<P: Into<String>, R: Into<PathBuf>>(&mut self, prefix: P, root: R) {
        let prefix = prefix.into();
        let root = root.into();

        if let Some(entry) = self.entries.iter_mut().find(|(p, _)| *p == prefix) {
            entry.1 = root;
        } else {
            self.entries.push((prefix, root));
        }
    }

    /// Look up the root registered for an exact prefix.
    pub fn get(&self, prefix: &str) -> Option<&Path> {
        self.entries
            .iter()
            .find(|(p, _)| p == prefix)
            .map(|(_, root)| root.as_path())
    }

    /// Iterate entries in registration order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Path)> {
        self.entries
            .iter()
            .map(|(prefix, root)| (prefix.as_str(), root.as_path()))
    }

    /// Number of registered namespaces.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether no namespaces are registered.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
