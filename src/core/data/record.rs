use serde::Serialize;

use super::pattern::{Pattern, RouteMatchTarget};

/// One routable source file and the patterns it declared.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RoutableRecord {
    /// Patterns in declaration order, array nesting flattened. Never empty.
    #[serde(rename = "match")]
    pub patterns: Vec<Pattern>,
    /// Root-relative path with forward slashes, prefixed with `/`.
    pub path: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub match_target: Option<RouteMatchTarget>,
}

/// Routable records in file-discovery order.
///
/// Records are never merged or deduplicated, even when patterns overlap.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Registry {
    records: Vec<RoutableRecord>,
}

impl Registry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, record: RoutableRecord) {
        debug_assert!(!record.patterns.is_empty());
        self.records.push(record);
    }

    pub fn records(&self) -> &[RoutableRecord] {
        &self.records
    }

    pub fn iter(&self) -> std::slice::Iter<'_, RoutableRecord> {
        self.records.iter()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

impl FromIterator<RoutableRecord> for Registry {
    fn from_iter<I: IntoIterator<Item = RoutableRecord>>(iter: I) -> Self {
        let mut registry = Registry::new();
        for record in iter {
            registry.push(record);
        }
        registry
    }
}

impl<'a> IntoIterator for &'a Registry {
    type Item = &'a RoutableRecord;
    type IntoIter = std::slice::Iter<'a, RoutableRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_json_shape() {
        let record = RoutableRecord {
            patterns: vec![Pattern::literal("a"), Pattern::regex("^b", "i")],
            path: "/src/a.ts".to_string(),
            match_target: Some(RouteMatchTarget::NameChain),
        };
        let json = serde_json::to_string(&record).unwrap();
        assert_eq!(
            json,
            r#"{"match":[{"kind":"literal","text":"a"},{"kind":"regex","source":"^b","flags":"i"}],"path":"/src/a.ts","matchTarget":"name-chain"}"#
        );
    }

    #[test]
    fn test_record_without_target_omits_field() {
        let record = RoutableRecord {
            patterns: vec![Pattern::literal("a")],
            path: "/a.ts".to_string(),
            match_target: None,
        };
        let json = serde_json::to_string(&record).unwrap();
        assert!(!json.contains("matchTarget"));
    }
}
