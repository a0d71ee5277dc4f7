use std::fmt;

/// The two shapes a routable declaration can take.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SiteKind {
    /// `export const ROUTABLE_TARGETS = ...`
    NamedExport,
    /// `@Routable(...)` on a class declaration
    Decorator,
}

impl fmt::Display for SiteKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SiteKind::NamedExport => f.write_str("ROUTABLE_TARGETS export"),
            SiteKind::Decorator => f.write_str("@Routable decorator"),
        }
    }
}

/// Why a declaration site was rejected.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MalformedReason {
    /// Object configuration without a `match` property.
    MissingMatch,
    /// `matchTarget` is present but not a string literal.
    NonStringMatchTarget,
    /// `matchTarget` is a string outside `name`, `name-chain`, `path`.
    UnknownMatchTarget(String),
    /// Regular-expression literal with flags the host engine rejects.
    InvalidRegexFlags(String),
}

impl fmt::Display for MalformedReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MalformedReason::MissingMatch => {
                f.write_str("object configuration is missing the `match` property")
            }
            MalformedReason::NonStringMatchTarget => {
                f.write_str("`matchTarget` must be a string literal")
            }
            MalformedReason::UnknownMatchTarget(value) => write!(
                f,
                "invalid `matchTarget` \"{}\" (expected \"name\", \"name-chain\" or \"path\")",
                value
            ),
            MalformedReason::InvalidRegexFlags(flags) => {
                write!(f, "invalid regular expression flags \"{}\"", flags)
            }
        }
    }
}

/// A malformed routable declaration.
///
/// Not fatal: the site contributes no patterns and the scan continues.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Diagnostic {
    pub file_path: String,
    /// Line of the declaration site (1-indexed).
    pub line: usize,
    pub site: SiteKind,
    pub reason: MalformedReason,
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "malformed {}: {} ({}:{})",
            self.site, self.reason, self.file_path, self.line
        )
    }
}
