// sympath-core - Namespace-to-path symbol resolver
//
// Maps an ordered set of namespace prefixes to filesystem roots and
// translates fully-qualified symbol names into the paths of the files
// expected to define them. The `Loader` adds on-demand, read-once
// loading over the resolution.
//
// The original pattern this implements comes from dynamically-loaded
// hosts, where a resolver like this is registered on a global autoload
// stack and invoked on every symbol miss. A statically-linked target
// has no such stack, so there is no register/unregister surface here:
// construct a `Loader` and hand it directly to the component that needs
// on-demand lookups.

pub mod error;
pub mod loader;
pub mod manifest;
pub mod namespace_map;
pub mod resolver;

pub use error::ResolveError;
pub use loader::Loader;
pub use manifest::{NamespaceEntry, SympathManifest};
pub use namespace_map::NamespaceMap;
pub use resolver::{PrefixMatching, Resolver, ResolverConfig, Strategy};

/// Crate version
pub const VERSION: &str = "0.2.0";
