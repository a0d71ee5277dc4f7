//! File collection - recursive discovery of candidate source files.
//!
//! Files are returned in directory-listing order, depth-first: the contents of a
//! subdirectory appear where the subdirectory itself was listed. Listing order is
//! platform dependent and is not sorted.

use std::{
    fs, io,
    path::{Path, PathBuf},
    sync::LazyLock,
};

use rayon::prelude::*;
use regex::Regex;
use walkdir::WalkDir;

use crate::core::error::ScanError;

/// Base-name filter for routable source files.
pub static ROUTABLE_FILE_FILTER: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\.ts$").unwrap());

/// Recursively collect every non-directory entry under `dir` whose base name
/// matches `filter`.
///
/// Symbolic links are listed but never followed into. Any unreadable directory,
/// including `dir` itself, fails the whole collection. So does a `dir` that is
/// not a directory.
pub fn collect_files(dir: &Path, filter: &Regex) -> Result<Vec<PathBuf>, ScanError> {
    let metadata = fs::metadata(dir).map_err(|source| ScanError::Filesystem {
        path: dir.to_path_buf(),
        source,
    })?;
    if !metadata.is_dir() {
        return Err(ScanError::Filesystem {
            path: dir.to_path_buf(),
            source: io::ErrorKind::NotADirectory.into(),
        });
    }

    let mut files = Vec::new();

    for entry in WalkDir::new(dir).min_depth(1) {
        let entry = entry?;
        if entry.file_type().is_dir() {
            continue;
        }
        if filter.is_match(&entry.file_name().to_string_lossy()) {
            files.push(entry.into_path());
        }
    }

    Ok(files)
}

/// Collect files for several root-relative directories.
///
/// Each directory is listed independently (in parallel), and results are
/// concatenated in the order the directories were given.
pub fn collect_roots(
    root: &Path,
    root_paths: &[String],
    filter: &Regex,
) -> Result<Vec<PathBuf>, ScanError> {
    let per_root: Vec<Vec<PathBuf>> = root_paths
        .par_iter()
        .map(|dir| collect_files(&root.join(dir), filter))
        .collect::<Result<_, ScanError>>()?;

    Ok(per_root.into_iter().flatten().collect())
}
