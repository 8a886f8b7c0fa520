//! Bundle error types.

use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while combining or delivering a bundle.
#[derive(Debug, Error)]
pub enum BundleError {
    /// Asset type is not one of `css` or `js`.
    #[error("invalid asset type '{0}': type must be 'css' or 'js'")]
    InvalidType(String),

    /// Input file does not exist (strict mode only).
    #[error("input file not found: {}", path.display())]
    MissingInput { path: PathBuf },

    /// Filesystem failure while reading inputs or writing the cache entry.
    #[error("IO error at `{}`", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Input list could not be serialized into a cache key.
    #[error("failed to serialize file list")]
    Key(#[from] serde_json::Error),
}

impl BundleError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}
