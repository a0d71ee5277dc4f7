//! Manifest code generation.
//!
//! Renders the registry as an ES module:
//!
//! ```js
//! export const RoutableRegistry = [
//! { match: ["user/:id", /^api\/v\d+/], loader: () => import("/src/controllers/user.ts") }
//! ];
//! ```

use std::borrow::Cow;

use crate::core::data::{Pattern, Registry, RoutableRecord};

/// Name of the exported array constant.
pub const REGISTRY_EXPORT: &str = "RoutableRegistry";

/// Render the full source text of the manifest module.
///
/// Pure: the same registry always renders to the same text.
pub fn render(registry: &Registry) -> String {
    let lines: Vec<String> = registry.iter().map(render_entry).collect();
    format!(
        "export const {} = [\n{}\n];",
        REGISTRY_EXPORT,
        lines.join(",\n")
    )
}

fn render_entry(record: &RoutableRecord) -> String {
    let patterns: Vec<String> = record.patterns.iter().map(render_pattern).collect();
    format!(
        "{{ match: [{}], loader: () => import({}) }}",
        patterns.join(", "),
        quote(&record.path)
    )
}

fn render_pattern(pattern: &Pattern) -> String {
    match pattern {
        Pattern::Literal { text } => quote(text),
        Pattern::Regex { source, flags } => format!("/{}/{}", regex_source(source), flags),
    }
}

/// Double-quoted string literal with JSON escaping.
fn quote(text: &str) -> String {
    serde_json::Value::from(text).to_string()
}

/// Escape a pattern body the way `RegExp.prototype.source` does, so it can be
/// placed between `/` delimiters.
///
/// An empty body becomes `(?:)`, unescaped `/` outside character classes is
/// escaped, and line terminators are written as escapes.
pub fn regex_source(source: &str) -> Cow<'_, str> {
    if source.is_empty() {
        return Cow::Borrowed("(?:)");
    }
    if !source
        .chars()
        .any(|c| matches!(c, '/' | '\n' | '\r' | '\u{2028}' | '\u{2029}'))
    {
        return Cow::Borrowed(source);
    }

    let mut out = String::with_capacity(source.len() + 4);
    let mut in_class = false;
    let mut escaped = false;

    for c in source.chars() {
        if escaped {
            escaped = false;
            match c {
                '\n' => out.push('n'),
                '\r' => out.push('r'),
                '\u{2028}' => out.push_str("u2028"),
                '\u{2029}' => out.push_str("u2029"),
                _ => out.push(c),
            }
            continue;
        }
        match c {
            '\\' => {
                escaped = true;
                out.push(c);
            }
            '[' => {
                in_class = true;
                out.push(c);
            }
            ']' => {
                in_class = false;
                out.push(c);
            }
            '/' if !in_class => out.push_str("\\/"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\u{2028}' => out.push_str("\\u2028"),
            '\u{2029}' => out.push_str("\\u2029"),
            _ => out.push(c),
        }
    }

    Cow::Owned(out)
}
