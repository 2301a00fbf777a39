//! Catalog error types.

use std::path::PathBuf;

/// Errors that can occur while materializing the vacancy catalog.
///
/// Individual malformed files and records are skipped and counted, not
/// reported here; only conditions that leave no catalog at all are errors.
#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    /// The catalog directory could not be read at all
    #[error("failed to read catalog directory {dir}: {source}")]
    Io {
        dir: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The directory contains no vector files
    #[error("no vector files (*.json) in {0}")]
    NoVectorFiles(PathBuf),
}
