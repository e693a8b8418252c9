// Symbol name -> file path translation
// Scans registered namespace prefixes in order and maps the remainder
// of the name onto the filesystem under the matching root.

use crate::error::ResolveError;
use crate::namespace_map::NamespaceMap;
use log::trace;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Translation strategy for turning a symbol name into a file path.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Strategy {
    /// Scan prefixes in registration order; separators in the remainder
    /// become path separators. This is the strategy wired into the load
    /// path.
    #[default]
    PrefixScan,

    /// Older convention: the first namespace segment is the lookup key,
    /// the full namespace is kept in the produced path, and underscores
    /// in the class segment become path separators. Retained for
    /// backward compatibility; opt-in only.
    LegacySegment,
}

/// How a registered prefix is matched against a symbol name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum PrefixMatching {
    /// A prefix matches only when followed by the separator or the end
    /// of the name. `Foo` does not match `FooBar\Baz`.
    #[default]
    SegmentBoundary,

    /// Plain leading-substring comparison. `Foo` matches `FooBar\Baz`
    /// and the character after the prefix is skipped as if it were the
    /// separator. Compatibility mode for maps that relied on the old
    /// behavior.
    Substring,
}

/// Resolver configuration: separator, extension, and strategy selection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolverConfig {
    /// Namespace separator character in symbol names.
    pub separator: char,
    /// File extension appended to resolved paths, without the dot.
    pub extension: String,
    /// Translation strategy.
    pub strategy: Strategy,
    /// Prefix matching mode (`PrefixScan` only).
    pub matching: PrefixMatching,
}

impl ResolverConfig {
    /// Config with the given extension and default separator (`\`),
    /// prefix-scan strategy, and segment-boundary matching.
    pub fn new<S: Into<String>>(extension: S) -> Self {
        Self {
            separator: '\\',
            extension: extension.into(),
            strategy: Strategy::default(),
            matching: PrefixMatching::default(),
        }
    }

    /// Use a different namespace separator.
    pub fn with_separator(mut self, separator: char) -> Self {
        self.separator = separator;
        self
    }

    /// Select the translation strategy.
    pub fn with_strategy(mut self, strategy: Strategy) -> Self {
        self.strategy = strategy;
        self
    }

    /// Select the prefix matching mode.
    pub fn with_matching(mut self, matching: PrefixMatching) -> Self {
        self.matching = matching;
        self
    }
}

/// Translates fully-qualified symbol names into file paths using an
/// ordered namespace map.
///
/// Resolution never checks that the file defines the symbol; it only
/// computes where the file is expected to live (`resolve_path`) and,
/// optionally, whether it exists (`locate`, `file_exists`).
#[derive(Debug, Clone)]
pub struct Resolver {
    namespaces: NamespaceMap,
    config: ResolverConfig,
}

impl Resolver {
    /// Create a resolver over an initial namespace map.
    pub fn new(namespaces: NamespaceMap, config: ResolverConfig) -> Self {
        Self { namespaces, config }
    }

    /// Create a resolver with no namespaces registered yet.
    pub fn empty(config: ResolverConfig) -> Self {
        Self::new(NamespaceMap::new(), config)
    }

    /// Register a namespace root. Same semantics as `NamespaceMap::add`.
    pub fn add_namespace<P: Into<String>, R: Into<PathBuf>>(&mut self, prefix: P, root: R) {
        self.namespaces.add(prefix, root);
    }

    /// The registered namespaces, in registration order.
    pub fn namespaces(&self) -> &NamespaceMap {
        &self.namespaces
    }

    /// The active configuration.
    pub fn config(&self) -> &ResolverConfig {
        &self.config
    }

    /// Translate a fully-qualified symbol name into the path of the file
    /// expected to define it.
    ///
    /// Leading and trailing separator characters are trimmed first. The
    /// first matching namespace wins; separators in the remainder are
    /// translated to the host path separator and the configured
    /// extension is appended.
    ///
    /// # Errors
    /// Returns `ResolveError::NoNamespaceMatch` if no registered prefix
    /// matches. Does not touch the filesystem.
    pub fn resolve_path(&self, symbol: &str) -> Result<PathBuf, ResolveError> {
        let trimmed = symbol.trim_matches(self.config.separator);

        let resolved = match self.config.strategy {
            Strategy::PrefixScan => self.resolve_prefix_scan(trimmed),
            Strategy::LegacySegment => self.resolve_legacy_segment(trimmed),
        };

        match resolved {
            Some(path) => {
                trace!("resolved '{}' -> {}", symbol, path.display());
                Ok(path)
            }
            None => Err(ResolveError::NoNamespaceMatch {
                symbol: symbol.to_string(),
            }),
        }
    }

    /// Like `resolve_path`, but also requires the file to exist.
    ///
    /// # Errors
    /// `NoNamespaceMatch` if no prefix matches, `FileMissing` if the
    /// resolved file is absent.
    pub fn locate(&self, symbol: &str) -> Result<PathBuf, ResolveError> {
        let path = self.resolve_path(symbol)?;
        if path.exists() {
            Ok(path)
        } else {
            Err(ResolveError::FileMissing {
                symbol: symbol.to_string(),
                path,
            })
        }
    }

    /// Whether a file exists for the given symbol name. False both when
    /// no namespace matches and when the resolved file is missing.
    pub fn file_exists(&self, symbol: &str) -> bool {
        self.locate(symbol).is_ok()
    }

    fn resolve_prefix_scan(&self, trimmed: &str) -> Option<PathBuf> {
        for (prefix, root) in self.namespaces.iter() {
            if let Some(remainder) = self.prefix_remainder(trimmed, prefix) {
                return Some(self.join_translated(root, remainder));
            }
        }
        None
    }

    /// Match one prefix against the trimmed name and return the
    /// remainder after the separator slot, or None if it does not match.
    fn prefix_remainder<'a>(&self, trimmed: &'a str, prefix: &str) -> Option<&'a str> {
        let rest = trimmed.strip_prefix(prefix)?;

        if self.config.matching == PrefixMatching::SegmentBoundary
            && !(rest.is_empty() || rest.starts_with(self.config.separator))
        {
            return None;
        }

        // One character after the prefix is consumed as the separator
        // slot, whatever it is. In substring mode that reproduces the
        // historic remainder exactly.
        let mut chars = rest.chars();
        chars.next();
        Some(chars.as_str())
    }

    fn resolve_legacy_segment(&self, trimmed: &str) -> Option<PathBuf> {
        let sep = self.config.separator;

        // Lookup key is the first segment, exact match only. A name
        // without a separator has no segment key and never resolves.
        let (main_ns, _) = trimmed.split_once(sep)?;
        let root = self.namespaces.get(main_ns)?;

        let (ns_part, class_part) = trimmed.rsplit_once(sep)?;
        let path_sep = std::path::MAIN_SEPARATOR.to_string();

        let mut filename = ns_part.replace(sep, &path_sep);
        filename.push(std::path::MAIN_SEPARATOR);
        filename.push_str(&class_part.replace('_', &path_sep));

        Some(root.join(format!("{}.{}", filename, self.config.extension)))
    }

    fn join_translated(&self, root: &Path, remainder: &str) -> PathBuf {
        let translated: String = remainder
            .chars()
            .map(|c| {
                if c == self.config.separator {
                    std::path::MAIN_SEPARATOR
                } else {
                    c
                }
            })
            .collect();

        root.join(format!("{}.{}", translated, self.config.extension))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn resolver(entries: &[(&str, &str)]) -> Resolver {
        Resolver::new(
            NamespaceMap::from_entries(entries.iter().copied()),
            ResolverConfig::new("php"),
        )
    }

    #[test]
    fn test_resolve_basic() {
        let resolver = resolver(&[("acme\\core", "/srv/acme")]);

        let path = resolver.resolve_path("acme\\core\\Widget").unwrap();
        assert_eq!(path, PathBuf::from("/srv/acme/Widget.php"));

        let path = resolver.resolve_path("acme\\core\\sub\\Gadget").unwrap();
        assert_eq!(path, PathBuf::from("/srv/acme/sub/Gadget.php"));
    }

    #[test]
    fn test_resolve_no_match() {
        let resolver = resolver(&[("acme\\core", "/srv/acme")]);

        let err = resolver.resolve_path("other\\Thing").unwrap_err();
        assert!(matches!(err, ResolveError::NoNamespaceMatch { .. }));
    }

    #[test]
    fn test_leading_and_trailing_separators_trimmed() {
        let resolver = resolver(&[("acme\\core", "/srv/acme")]);

        let path = resolver.resolve_path("\\acme\\core\\Widget\\").unwrap();
        assert_eq!(path, PathBuf::from("/srv/acme/Widget.php"));
    }

    #[test]
    fn test_first_registered_match_wins() {
        let resolver = resolver(&[("acme", "/first"), ("acme\\core", "/second")]);

        // "acme" was registered first and matches at a segment boundary,
        // so the longer "acme\core" prefix never gets a chance.
        let path = resolver.resolve_path("acme\\core\\Widget").unwrap();
        assert_eq!(path, PathBuf::from("/first/core/Widget.php"));
    }

    #[test]
    fn test_segment_boundary_matching_default() {
        let resolver = resolver(&[("Foo", "/a"), ("FooBar", "/b")]);

        // Under segment-boundary matching "Foo" cannot match "FooBar",
        // so the symbol resolves under /b.
        let path = resolver.resolve_path("FooBar\\Baz").unwrap();
        assert_eq!(path, PathBuf::from("/b/Baz.php"));

        let path = resolver.resolve_path("Foo\\Qux").unwrap();
        assert_eq!(path, PathBuf::from("/a/Qux.php"));
    }

    #[test]
    fn test_substring_matching_prefix_hazard() {
        let map = NamespaceMap::from_entries([("Foo", "/a"), ("FooBar", "/b")]);
        let config = ResolverConfig::new("php").with_matching(PrefixMatching::Substring);
        let resolver = Resolver::new(map, config);

        // Historic hazard: "Foo" substring-matches "FooBar\Baz" and one
        // character after the prefix is skipped as if it were the
        // separator, so the path lands under /a rather than /b/Baz.php.
        let path = resolver.resolve_path("FooBar\\Baz").unwrap();
        assert!(path.starts_with("/a"));
        assert_eq!(path, PathBuf::from("/a/ar/Baz.php"));
    }

    #[test]
    fn test_custom_separator_and_extension() {
        let map = NamespaceMap::from_entries([("std", "/lib/std")]);
        let config = ResolverConfig::new("vx").with_separator('.');
        let resolver = Resolver::new(map, config);

        let path = resolver.resolve_path("std.io.File").unwrap();
        assert_eq!(path, PathBuf::from("/lib/std/io/File.vx"));
    }

    #[test]
    fn test_legacy_segment_strategy() {
        let map = NamespaceMap::from_entries([("acme", "/srv/lib")]);
        let config = ResolverConfig::new("php").with_strategy(Strategy::LegacySegment);
        let resolver = Resolver::new(map, config);

        // The full namespace stays in the path and underscores in the
        // class segment become directories.
        let path = resolver.resolve_path("acme\\core\\Some_Widget").unwrap();
        assert_eq!(path, PathBuf::from("/srv/lib/acme/core/Some/Widget.php"));
    }

    #[test]
    fn test_legacy_segment_requires_separator() {
        let map = NamespaceMap::from_entries([("acme", "/srv/lib")]);
        let config = ResolverConfig::new("php").with_strategy(Strategy::LegacySegment);
        let resolver = Resolver::new(map, config);

        let err = resolver.resolve_path("acme").unwrap_err();
        assert!(matches!(err, ResolveError::NoNamespaceMatch { .. }));
    }

    #[test]
    fn test_legacy_segment_key_is_exact() {
        let map = NamespaceMap::from_entries([("acme", "/srv/lib")]);
        let config = ResolverConfig::new("php").with_strategy(Strategy::LegacySegment);
        let resolver = Resolver::new(map, config);

        // "acmeco" is not an exact first-segment key, no prefix scan here.
        let err = resolver.resolve_path("acmeco\\Widget").unwrap_err();
        assert!(matches!(err, ResolveError::NoNamespaceMatch { .. }));
    }

    #[test]
    fn test_empty_and_separator_only_symbols() {
        let resolver = resolver(&[("acme\\core", "/srv/acme")]);

        assert!(resolver.resolve_path("").is_err());
        assert!(resolver.resolve_path("\\\\").is_err());
    }

    #[test]
    fn test_file_exists_false_when_unresolvable() {
        let resolver = resolver(&[("acme\\core", "/srv/acme")]);
        assert!(!resolver.file_exists("other\\Thing"));
    }

    #[test]
    fn test_locate_against_filesystem() {
        use tempfile::tempdir;

        let tmp = tempdir().expect("tempdir");
        let root = tmp.path().join("acme");
        std::fs::create_dir_all(root.join("sub")).expect("created namespace root");
        std::fs::write(root.join("Widget.php"), "<?php class Widget {}").expect("wrote file");

        let map = NamespaceMap::from_entries([("acme\\core", root.clone())]);
        let resolver = Resolver::new(map, ResolverConfig::new("php"));

        assert!(resolver.file_exists("acme\\core\\Widget"));
        let located = resolver.locate("acme\\core\\Widget").expect("located");
        assert_eq!(located, root.join("Widget.php"));

        let err = resolver.locate("acme\\core\\sub\\Gadget").unwrap_err();
        assert!(matches!(err, ResolveError::FileMissing { .. }));
        assert!(!resolver.file_exists("acme\\core\\sub\\Gadget"));
    }
}
