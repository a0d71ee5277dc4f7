//! Pattern extraction - per-file discovery of routable declarations.
//!
//! ## Module Structure
//!
//! - `sites`: Finds `ROUTABLE_TARGETS` exports and `@Routable(...)` decorators
//! - `node`: Lowers swc expressions into the converter's node sum type
//! - `converter`: Turns a site's node tree into match patterns

pub mod converter;
pub mod node;
pub mod sites;


pub use converter::{SiteExtraction, convert_site};
pub use node::{PatternNode, Property};
pub use sites::{DeclarationSite, ROUTABLE_DECORATOR, ROUTABLE_EXPORT, SiteMatcher};

use crate::core::data::{Diagnostic, Pattern, RouteMatchTarget};
use crate::core::error::ScanError;
use crate::core::parsers::{SourceParser, SwcParser};

/// Everything extracted from one file.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct FileExtraction {
    /// Patterns from every well-formed site, in source order.
    pub patterns: Vec<Pattern>,
    /// Match target of the first site that declared one.
    pub match_target: Option<RouteMatchTarget>,
    /// One entry per malformed site.
    pub diagnostics: Vec<Diagnostic>,
    /// Number of declaration sites found, well-formed or not.
    pub site_count: usize,
}

/// Merge the contributions of a file's declaration sites.
///
/// Malformed sites are reported and skipped without affecting the others.
pub fn extract_from_sites(file_path: &str, sites: &[DeclarationSite]) -> FileExtraction {
    let mut extraction = FileExtraction {
        site_count: sites.len(),
        ..Default::default()
    };

    for site in sites {
        match convert_site(&site.node) {
            Ok(SiteExtraction {
                patterns,
                match_target,
            }) => {
                extraction.patterns.extend(patterns);
                if extraction.match_target.is_none() {
                    extraction.match_target = match_target;
                }
            }
            Err(reason) => extraction.diagnostics.push(Diagnostic {
                file_path: file_path.to_string(),
                line: site.line,
                site: site.kind,
                reason,
            }),
        }
    }

    extraction
}

/// Parse `code` and extract its routable declarations with the given parser.
pub fn extract_with<P: SourceParser + ?Sized>(
    parser: &P,
    code: String,
    file_path: &str,
) -> Result<FileExtraction, ScanError> {
    let sites = parser.declaration_sites(code, file_path)?;
    Ok(extract_from_sites(file_path, &sites))
}

/// Parse `code` as TypeScript and extract its routable declarations.
pub fn extract_from_file(code: String, file_path: &str) -> Result<FileExtraction, ScanError> {
    extract_with(&SwcParser, code, file_path)
}
