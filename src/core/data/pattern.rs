use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

/// JavaScript regular-expression flag characters.
pub const REGEX_FLAGS: &str = "dgimsuvy";

/// A single match pattern declared by a routable file.
///
/// Downstream routing code tests incoming paths or route names against these.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum Pattern {
    /// A plain string: `'user/:id'`
    Literal { text: String },
    /// A regular-expression literal: `/^api\/v\d+/i`
    Regex { source: String, flags: String },
}

impl Pattern {
    pub fn literal(text: impl Into<String>) -> Self {
        Pattern::Literal { text: text.into() }
    }

    pub fn regex(source: impl Into<String>, flags: impl Into<String>) -> Self {
        Pattern::Regex {
            source: source.into(),
            flags: flags.into(),
        }
    }
}

impl fmt::Display for Pattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Pattern::Literal { text } => write!(f, "\"{}\"", text),
            Pattern::Regex { source, flags } => write!(f, "/{}/{}", source, flags),
        }
    }
}

/// Checks that `flags` only holds known flag characters, each at most once,
/// and does not combine `u` with `v`.
pub fn is_valid_regex_flags(flags: &str) -> bool {
    let mut seen = String::with_capacity(flags.len());
    for c in flags.chars() {
        if !REGEX_FLAGS.contains(c) || seen.contains(c) {
            return false;
        }
        seen.push(c);
    }
    !(seen.contains('u') && seen.contains('v'))
}

/// What a record's patterns are compared against.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum RouteMatchTarget {
    /// The route name.
    Name,
    /// The chain of route names from the root to the matched route.
    NameChain,
    /// The route path.
    Path,
}

impl RouteMatchTarget {
    pub const ALL: [RouteMatchTarget; 3] = [
        RouteMatchTarget::Name,
        RouteMatchTarget::NameChain,
        RouteMatchTarget::Path,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            RouteMatchTarget::Name => "name",
            RouteMatchTarget::NameChain => "name-chain",
            RouteMatchTarget::Path => "path",
        }
    }
}

impl fmt::Display for RouteMatchTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for RouteMatchTarget {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        RouteMatchTarget::ALL
            .into_iter()
            .find(|target| target.as_str() == s)
            .ok_or(())
    }
}
