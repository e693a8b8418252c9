// On-demand symbol loading over a resolver
// Reads each resolved file once into an in-process source table.

use crate::error::ResolveError;
use crate::resolver::Resolver;
use log::debug;
use std::collections::hash_map::Entry;
use std::collections::HashMap;
use std::fs;
use std::path::PathBuf;

/// Loads symbol sources on demand.
///
/// The source table stands in for a dynamic host's symbol table: loading
/// a symbol reads its resolved file exactly once, keyed by path, so two
/// symbols resolving to the same file share one read. There is no
/// process-wide registration; hand the loader to whatever component
/// performs lookups.
#[derive(Debug)]
pub struct Loader {
    resolver: Resolver,
    /// Loaded sources, keyed by resolved path.
    sources: HashMap<PathBuf, String>,
}

impl Loader {
    /// Create a loader over a resolver.
    pub fn new(resolver: Resolver) -> Self {
        Self {
            resolver,
            sources: HashMap::new(),
        }
    }

    /// The underlying resolver.
    pub fn resolver(&self) -> &Resolver {
        &self.resolver
    }

    /// Mutable access, so namespaces can still be added during an
    /// initialization phase.
    pub fn resolver_mut(&mut self) -> &mut Resolver {
        &mut self.resolver
    }

    /// Load the file for a symbol, if it resolves and exists.
    ///
    /// Never fails: an unmatched name, a missing file, or an unreadable
    /// file is a silent no-op, logged at debug level. Repeated calls for
    /// symbols resolving to an already-loaded file do nothing.
    pub fn load_symbol(&mut self, symbol: &str) {
        if let Err(err) = self.try_load(symbol) {
            debug!("load miss for '{}': {}", symbol, err);
        }
    }

    /// Load the file for a symbol, surfacing the failure kind.
    ///
    /// Same work as `load_symbol`, for callers that want diagnostics.
    ///
    /// # Errors
    /// `NoNamespaceMatch`, `FileMissing`, or `Unreadable`.
    pub fn try_load(&mut self, symbol: &str) -> Result<&str, ResolveError> {
        let path = self.resolver.resolve_path(symbol)?;

        let source = match self.sources.entry(path) {
            Entry::Occupied(entry) => entry.into_mut(),
            Entry::Vacant(entry) => {
                if !entry.key().exists() {
                    return Err(ResolveError::FileMissing {
                        symbol: symbol.to_string(),
                        path: entry.key().clone(),
                    });
                }
                let text = fs::read_to_string(entry.key()).map_err(|source| {
                    ResolveError::Unreadable {
                        path: entry.key().clone(),
                        source,
                    }
                })?;
                entry.insert(text)
            }
        };

        Ok(source.as_str())
    }

    /// Whether the file for this symbol has already been loaded.
    pub fn is_loaded(&self, symbol: &str) -> bool {
        self.resolver
            .resolve_path(symbol)
            .map(|path| self.sources.contains_key(&path))
            .unwrap_or(false)
    }

    /// Source text for a symbol, if its file has been loaded.
    pub fn source(&self, symbol: &str) -> Option<&str> {
        let path = self.resolver.resolve_path(symbol).ok()?;
        self.sources.get(&path).map(String::as_str)
    }

    /// Number of distinct files loaded so far.
    pub fn loaded_count(&self) -> usize {
        self.sources.len()
    }
}
