//! Registry building - runs collection and extraction over the whole project.

use std::{fs, path::Path};

use crate::core::collect::{ROUTABLE_FILE_FILTER, collect_roots};
use crate::core::data::{Diagnostic, Registry, RoutableRecord};
use crate::core::error::ScanError;
use crate::core::extract::extract_with;
use crate::core::parsers::{SourceParser, SwcParser};
use crate::utils::route_path;

/// Result of one complete scan.
#[derive(Debug, Default)]
pub struct ScanOutcome {
    pub registry: Registry,
    /// Malformed declarations, in discovery order.
    pub diagnostics: Vec<Diagnostic>,
    /// Number of files read and parsed.
    pub files_scanned: usize,
    /// Files with a declaration site that produced no patterns, as manifest paths.
    pub empty_declarations: Vec<String>,
}

/// Scan `root_paths` (relative to `root`) and build a fresh registry.
pub fn build_registry(root: &Path, root_paths: &[String]) -> Result<ScanOutcome, ScanError> {
    build_registry_with(&SwcParser, root, root_paths)
}

/// Scan with a specific parser.
///
/// Any unreadable file or parse failure aborts the scan; no partial registry is
/// returned.
pub fn build_registry_with<P: SourceParser + ?Sized>(
    parser: &P,
    root: &Path,
    root_paths: &[String],
) -> Result<ScanOutcome, ScanError> {
    let files = collect_roots(root, root_paths, &ROUTABLE_FILE_FILTER)?;
    let mut outcome = ScanOutcome::default();

    for file in &files {
        let code = fs::read_to_string(file).map_err(|source| ScanError::Filesystem {
            path: file.clone(),
            source,
        })?;
        let file_path = file.to_string_lossy();
        let extraction = extract_with(parser, code, &file_path)?;
        outcome.files_scanned += 1;
        outcome.diagnostics.extend(extraction.diagnostics);

        let path = route_path(root, file);
        if extraction.patterns.is_empty() {
            if extraction.site_count > 0 {
                outcome.empty_declarations.push(path);
            }
            continue;
        }

        outcome.registry.push(RoutableRecord {
            patterns: extraction.patterns,
            path,
            match_target: extraction.match_target,
        });
    }

    Ok(outcome)
}
