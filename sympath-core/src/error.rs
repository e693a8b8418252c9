// Error types for symbol resolution

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while resolving or loading a symbol.
///
/// The silent load path (`Loader::load_symbol`) never surfaces these;
/// they exist for the diagnostic APIs (`resolve_path`, `locate`,
/// `try_load`) and the CLI.
#[derive(Debug, Error)]
pub enum ResolveError {
    /// No registered namespace prefix matches the symbol name.
    #[error("no registered namespace matches '{symbol}'")]
    NoNamespaceMatch { symbol: String },

    /// The symbol resolved to a path, but no file exists there.
    #[error("file for '{symbol}' does not exist: {path}")]
    FileMissing { symbol: String, path: PathBuf },

    /// The resolved file exists but could not be read.
    #[error("failed to read {path}: {source}")]
    Unreadable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}
