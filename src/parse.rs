//! Schema parsing
//!
//! Extracts `model <Name> { ... }` blocks from raw schema text into a
//! [`ModelSet`]. The parser is a regex heuristic, not a grammar: anything
//! that does not match the expected block or field shape is silently
//! skipped, never an error. Worst case is a partial model set, which the
//! rules treat as a valid (if issue-heavy) input.
//!
//! Known limitation: block bodies are matched up to the first `}`, so a
//! literal closing brace inside an attribute value truncates the body. An
//! unterminated block never matches and is dropped entirely.

use regex::Regex;

use crate::model::{Field, Model, ModelSet};

/// Field names recognized as creation/update timestamps
pub const TIMESTAMP_FIELDS: [&str; 4] = ["createdAt", "updatedAt", "created_at", "updated_at"];

/// The schema model extractor
pub struct SchemaParser {
    /// Matches a whole model block; body stops at the first `}` (non-nested)
    block_pattern: Regex,
    /// Matches one field line: name, type, optional/list marker, attributes
    field_pattern: Regex,
}

impl Default for SchemaParser {
    fn default() -> Self {
        Self::new()
    }
}

impl SchemaParser {
    pub fn new() -> Self {
        Self {
            block_pattern: Regex::new(r"model\s+(\w+)\s*\{([^}]+)\}").unwrap(),
            field_pattern: Regex::new(r"^(\w+)\s+(\w+)(\?|\[\])?(.*)$").unwrap(),
        }
    }

    /// Extract all model blocks from the schema text
    ///
    /// Duplicate model names follow the [`ModelSet`] last-wins rule. Text
    /// with zero model blocks yields an empty set, not an error.
    pub fn parse(&self, schema: &str) -> ModelSet {
        let mut models = ModelSet::new();

        for capture in self.block_pattern.captures_iter(schema) {
            let name = capture[1].to_string();
            let body = &capture[2];
            models.insert(self.parse_block(name, body));
        }

        tracing::debug!(models = models.len(), "extracted schema models");
        models
    }

    fn parse_block(&self, name: String, body: &str) -> Model {
        let mut fields = Vec::new();
        let mut indexes = Vec::new();
        let mut has_id = false;
        let mut has_timestamps = false;

        for line in body.lines().map(str::trim) {
            if line.is_empty() || line.starts_with("//") {
                continue;
            }

            // Block attributes (@@index, @@unique, ...) stay verbatim;
            // rules pattern-match into them later
            if line.starts_with("@@") {
                indexes.push(line.to_string());
                continue;
            }

            let Some(capture) = self.field_pattern.captures(line) else {
                // Lenient by design: unmatched lines are dropped
                continue;
            };

            let field_name = capture[1].to_string();
            let field_type = capture[2].to_string();
            let modifier = capture.get(3).map(|m| m.as_str()).unwrap_or("");
            let attributes = capture.get(4).map(|m| m.as_str()).unwrap_or("").to_string();

            if attributes.contains("@id") || field_name.eq_ignore_ascii_case("id") {
                has_id = true;
            }

            if TIMESTAMP_FIELDS.contains(&field_name.as_str()) {
                has_timestamps = true;
            }

            fields.push(Field {
                name: field_name,
                field_type,
                optional: modifier.contains('?'),
                array: modifier.contains("[]"),
                attributes,
            });
        }

        Model {
            name,
            fields,
            indexes,
            has_id,
            has_timestamps,
        }
    }
}

/// Parse schema text with a default parser
pub fn parse_schema(schema: &str) -> ModelSet {
    SchemaParser::new().parse(schema)
}
