// Manifest parser - sympath.json

use crate::namespace_map::NamespaceMap;
use crate::resolver::{PrefixMatching, Resolver, ResolverConfig, Strategy};
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Main manifest structure (sympath.json)
///
/// Namespaces are a JSON array, not an object: entry order is
/// registration order and first match wins.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SympathManifest {
    /// File extension appended to resolved paths, without the dot.
    pub extension: String,

    /// Namespace separator character in symbol names.
    #[serde(default = "default_separator")]
    pub separator: char,

    #[serde(default)]
    pub strategy: Strategy,

    #[serde(default)]
    pub matching: PrefixMatching,

    #[serde(default)]
    pub namespaces: Vec<NamespaceEntry>,
}

/// One prefix -> root mapping entry.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NamespaceEntry {
    pub prefix: String,
    pub root: PathBuf,
}

fn default_separator() -> char {
    '\\'
}

impl SympathManifest {
    /// Parse sympath.json from file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(&path)
            .with_context(|| format!("Failed to read {}", path.as_ref().display()))?;

        Self::from_str(&content)
    }

    /// Parse sympath.json from string
    pub fn from_str(content: &str) -> Result<Self> {
        let manifest: SympathManifest =
            serde_json::from_str(content).context("Failed to parse sympath.json")?;

        manifest.validate()?;
        Ok(manifest)
    }

    /// Write manifest to file
    pub fn to_file<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let content = serde_json::to_string_pretty(self).context("Failed to serialize manifest")?;

        fs::write(&path, content)
            .with_context(|| format!("Failed to write {}", path.as_ref().display()))?;

        Ok(())
    }

    /// Validate manifest
    fn validate(&self) -> Result<()> {
        if self.extension.is_empty() {
            anyhow::bail!("Extension cannot be empty");
        }

        if self.extension.starts_with('.') {
            anyhow::bail!("Extension must not include the leading dot: {}", self.extension);
        }

        for entry in &self.namespaces {
            if entry.prefix.is_empty() {
                anyhow::bail!("Namespace prefix cannot be empty");
            }

            if !entry.root.is_absolute() {
                anyhow::bail!(
                    "Namespace root for '{}' must be absolute: {}",
                    entry.prefix,
                    entry.root.display()
                );
            }
        }

        Ok(())
    }

    /// Build the resolver configuration described by this manifest.
    pub fn resolver_config(&self) -> ResolverConfig {
        ResolverConfig::new(self.extension.clone())
            .with_separator(self.separator)
            .with_strategy(self.strategy)
            .with_matching(self.matching)
    }

    /// Build a resolver with the manifest's namespaces registered in
    /// order.
    pub fn into_resolver(self) -> Resolver {
        let config = self.resolver_config();
        let map = NamespaceMap::from_entries(
            self.namespaces
                .into_iter()
                .map(|entry| (entry.prefix, entry.root)),
        );
        Resolver::new(map, config)
    }
}

impl Default for SympathManifest {
    fn default() -> Self {
        Self {
            extension: "php".to_string(),
            separator: default_separator(),
            strategy: Strategy::default(),
            matching: PrefixMatching::default(),
            namespaces: Vec::new(),
        }
    }
}
