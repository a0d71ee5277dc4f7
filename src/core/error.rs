//! Fatal scan errors.

use std::path::PathBuf;

use thiserror::Error;

/// Errors that abort a whole scan. Nothing is retried or skipped.
#[derive(Error, Debug)]
pub enum ScanError {
    /// A file could not be read, or a root is missing or not a directory.
    #[error("Failed to read {path}: {source}")]
    Filesystem {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A directory could not be listed.
    #[error("Failed to list directory: {0}")]
    Walk(#[from] walkdir::Error),

    /// Source text is not valid TypeScript with decorators.
    #[error("Failed to parse {path}:{line}: {message}")]
    Parse {
        path: String,
        line: usize,
        message: String,
    },
}

impl ScanError {
    pub fn is_filesystem(&self) -> bool {
        matches!(self, ScanError::Filesystem { .. } | ScanError::Walk(_))
    }

    pub fn is_parse(&self) -> bool {
        matches!(self, ScanError::Parse { .. })
    }
}
