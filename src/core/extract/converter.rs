//! Pattern-node conversion.
//!
//! Turns one declaration site's [`PatternNode`] tree into match patterns. A site is
//! all-or-nothing: any malformed object configuration inside it discards every
//! pattern the site would otherwise have produced.

use super::node::{PatternNode, Property};
use crate::core::data::{MalformedReason, Pattern, RouteMatchTarget, pattern::is_valid_regex_flags};

const MATCH_KEY: &str = "match";
const MATCH_TARGET_KEY: &str = "matchTarget";

/// Patterns contributed by a single declaration site.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct SiteExtraction {
    pub patterns: Vec<Pattern>,
    pub match_target: Option<RouteMatchTarget>,
}

/// Convert a declaration site's node tree.
pub fn convert_site(node: &PatternNode) -> Result<SiteExtraction, MalformedReason> {
    let mut extraction = SiteExtraction::default();
    convert(node, &mut extraction)?;
    Ok(extraction)
}

fn convert(node: &PatternNode, out: &mut SiteExtraction) -> Result<(), MalformedReason> {
    match node {
        PatternNode::Literal(text) => {
            out.patterns.push(Pattern::literal(text.as_str()));
        }
        PatternNode::Regex { source, flags } => {
            if !is_valid_regex_flags(flags) {
                return Err(MalformedReason::InvalidRegexFlags(flags.clone()));
            }
            out.patterns.push(Pattern::regex(source.as_str(), flags.as_str()));
        }
        PatternNode::ArrayOf(elements) => {
            for element in elements {
                convert(element, out)?;
            }
        }
        PatternNode::ObjectConfig(props) => convert_object(props, out)?,
        PatternNode::Other => {}
    }
    Ok(())
}

fn convert_object(props: &[Property], out: &mut SiteExtraction) -> Result<(), MalformedReason> {
    let match_value =
        PatternNode::property(props, MATCH_KEY).ok_or(MalformedReason::MissingMatch)?;

    let match_target = match PatternNode::property(props, MATCH_TARGET_KEY) {
        None => None,
        Some(PatternNode::Literal(value)) => Some(
            value
                .parse::<RouteMatchTarget>()
                .map_err(|_| MalformedReason::UnknownMatchTarget(value.clone()))?,
        ),
        Some(_) => return Err(MalformedReason::NonStringMatchTarget),
    };

    convert(match_value, out)?;
    if out.match_target.is_none() {
        out.match_target = match_target;
    }
    Ok(())
}
