//! Validation rules
//!
//! A fixed battery of independent checks over the extracted [`ModelSet`].
//! Each rule is a pure function of the full model set: no rule reads another
//! rule's output, so rules can be added, removed, or disabled without
//! affecting the rest of the battery.
//!
//! Issue ordering is deterministic: battery order, then model iteration
//! order, then emission order within the rule.

use regex::Regex;

use crate::model::{Issue, ModelSet, Severity};
use crate::parse::TIMESTAMP_FIELDS;

/// Scalar type tags that never denote a relation
pub const PRIMITIVE_TYPES: [&str; 7] = [
    "String", "Int", "Float", "Boolean", "DateTime", "Json", "Bytes",
];

/// Field-name keywords that suggest an enum-shaped value
const ENUM_KEYWORDS: [&str; 6] = ["status", "state", "type", "role", "kind", "category"];

/// One validation rule
///
/// `evaluate` must be total: it terminates and emits zero or more issues
/// for every model set, never an error. A degenerate or partial model set
/// is a valid input.
pub trait Rule {
    /// Stable identifier, used to disable rules from configuration
    fn name(&self) -> &'static str;

    /// Run the rule over the full model set
    fn evaluate(&self, models: &ModelSet) -> Vec<Issue>;
}

/// Every model needs an identity field
pub struct MissingId;

impl Rule for MissingId {
    fn name(&self) -> &'static str {
        "missing-id"
    }

    fn evaluate(&self, models: &ModelSet) -> Vec<Issue> {
        models
            .iter()
            .filter(|m| !m.has_id)
            .map(|m| Issue::model_level(Severity::Error, &m.name, "Model is missing an @id field"))
            .collect()
    }
}

/// Models should carry creation/update timestamps
pub struct MissingTimestamps;

impl Rule for MissingTimestamps {
    fn name(&self) -> &'static str {
        "missing-timestamps"
    }

    fn evaluate(&self, models: &ModelSet) -> Vec<Issue> {
        models
            .iter()
            .filter(|m| !m.has_timestamps)
            .map(|m| {
                Issue::model_level(
                    Severity::Warning,
                    &m.name,
                    "Consider adding createdAt and updatedAt timestamp fields",
                )
            })
            .collect()
    }
}

/// Relation fields should declare an explicit `@relation` attribute
pub struct UnannotatedRelation;

impl Rule for UnannotatedRelation {
    fn name(&self) -> &'static str {
        "unannotated-relation"
    }

    fn evaluate(&self, models: &ModelSet) -> Vec<Issue> {
        let mut issues = Vec::new();

        for model in models {
            for field in &model.fields {
                if models.contains(&field.field_type) && !field.attributes.contains("@relation") {
                    issues.push(Issue::field_level(
                        Severity::Info,
                        &model.name,
                        &field.name,
                        format!("Relation to {} should include @relation attribute", field.field_type),
                    ));
                }
            }
        }

        issues
    }
}

/// A capitalized non-primitive type that matches no model is a broken reference
pub struct UndefinedRelation;

impl Rule for UndefinedRelation {
    fn name(&self) -> &'static str {
        "undefined-relation"
    }

    fn evaluate(&self, models: &ModelSet) -> Vec<Issue> {
        let mut issues = Vec::new();

        for model in models {
            for field in &model.fields {
                if models.contains(&field.field_type)
                    || PRIMITIVE_TYPES.contains(&field.field_type.as_str())
                {
                    continue;
                }
                // Capitalized first letter = likely a model reference
                let looks_like_model = field
                    .field_type
                    .chars()
                    .next()
                    .is_some_and(|c| c.is_uppercase());
                if looks_like_model {
                    issues.push(Issue::field_level(
                        Severity::Error,
                        &model.name,
                        &field.name,
                        format!("References undefined model: {}", field.field_type),
                    ));
                }
            }
        }

        issues
    }
}

/// Foreign key columns named in `@relation(fields: [...])` should be indexed
pub struct UnindexedForeignKey {
    /// Extracts the `fields: [a, b]` argument of a relation attribute
    relation_fields: Regex,
    /// Extracts the field list of an `@@index([a, b])` block attribute
    index_fields: Regex,
}

impl Default for UnindexedForeignKey {
    fn default() -> Self {
        Self::new()
    }
}

impl UnindexedForeignKey {
    pub fn new() -> Self {
        Self {
            relation_fields: Regex::new(r"fields:\s*\[([^\]]+)\]").unwrap(),
            index_fields: Regex::new(r"@@index\(\[([^\]]+)\]").unwrap(),
        }
    }

    fn split_list(list: &str) -> impl Iterator<Item = &str> {
        list.split(',').map(str::trim).filter(|s| !s.is_empty())
    }
}

impl Rule for UnindexedForeignKey {
    fn name(&self) -> &'static str {
        "unindexed-foreign-key"
    }

    fn evaluate(&self, models: &ModelSet) -> Vec<Issue> {
        let mut issues = Vec::new();

        for model in models {
            let mut fk_fields: Vec<&str> = Vec::new();
            for field in &model.fields {
                if !field.attributes.contains("@relation") {
                    continue;
                }
                if let Some(capture) = self.relation_fields.captures(&field.attributes) {
                    fk_fields.extend(Self::split_list(capture.get(1).map_or("", |m| m.as_str())));
                }
            }

            let indexed: Vec<&str> = model
                .indexes
                .iter()
                .filter_map(|line| self.index_fields.captures(line))
                .flat_map(|capture| {
                    Self::split_list(capture.get(1).map_or("", |m| m.as_str())).collect::<Vec<_>>()
                })
                .collect();

            for fk in fk_fields {
                if !indexed.contains(&fk) {
                    issues.push(Issue::field_level(
                        Severity::Warning,
                        &model.name,
                        fk,
                        "Foreign key field should have an index for query performance",
                    ));
                }
            }
        }

        issues
    }
}

/// Model names are PascalCase by convention
pub struct ModelNaming;

impl Rule for ModelNaming {
    fn name(&self) -> &'static str {
        "model-naming"
    }

    fn evaluate(&self, models: &ModelSet) -> Vec<Issue> {
        models
            .iter()
            .filter(|m| !m.name.chars().next().is_some_and(|c| c.is_uppercase()))
            .map(|m| {
                Issue::model_level(
                    Severity::Warning,
                    &m.name,
                    "Model name should start with uppercase (PascalCase)",
                )
            })
            .collect()
    }
}

/// Field names are camelCase by convention, except the snake_case timestamps
pub struct FieldNaming;

impl Rule for FieldNaming {
    fn name(&self) -> &'static str {
        "field-naming"
    }

    fn evaluate(&self, models: &ModelSet) -> Vec<Issue> {
        let mut issues = Vec::new();

        for model in models {
            for field in &model.fields {
                if field.name.contains('_') && !TIMESTAMP_FIELDS.contains(&field.name.as_str()) {
                    issues.push(Issue::field_level(
                        Severity::Info,
                        &model.name,
                        &field.name,
                        "Consider using camelCase instead of snake_case for field names",
                    ));
                }
            }
        }

        issues
    }
}

/// String fields whose names suggest a closed value set
pub struct EnumCandidate;

impl Rule for EnumCandidate {
    fn name(&self) -> &'static str {
        "enum-candidate"
    }

    fn evaluate(&self, models: &ModelSet) -> Vec<Issue> {
        let mut issues = Vec::new();

        for model in models {
            for field in &model.fields {
                if field.field_type != "String" {
                    continue;
                }
                let lower = field.name.to_lowercase();
                if ENUM_KEYWORDS.iter().any(|k| lower.contains(k)) {
                    issues.push(Issue::field_level(
                        Severity::Info,
                        &model.name,
                        &field.name,
                        "Consider using an enum type for this field instead of String",
                    ));
                }
            }
        }

        issues
    }
}

/// The default rule battery, in evaluation order
pub fn default_rules() -> Vec<Box<dyn Rule>> {
    vec![
        Box::new(MissingId),
        Box::new(MissingTimestamps),
        Box::new(UnannotatedRelation),
        Box::new(UndefinedRelation),
        Box::new(UnindexedForeignKey::new()),
        Box::new(ModelNaming),
        Box::new(FieldNaming),
        Box::new(EnumCandidate),
    ]
}

/// Runs a rule battery over a model set
pub struct RuleEngine {
    rules: Vec<Box<dyn Rule>>,
}

impl Default for RuleEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl RuleEngine {
    /// Engine with the full default battery
    pub fn new() -> Self {
        Self {
            rules: default_rules(),
        }
    }

    /// Engine with an explicit rule list
    pub fn with_rules(rules: Vec<Box<dyn Rule>>) -> Self {
        Self { rules }
    }

    /// Engine with the default battery minus the named rules
    pub fn without(disabled: &[String]) -> Self {
        Self {
            rules: default_rules()
                .into_iter()
                .filter(|r| !disabled.iter().any(|d| d == r.name()))
                .collect(),
        }
    }

    /// Names of the active rules, in evaluation order
    pub fn rule_names(&self) -> Vec<&'static str> {
        self.rules.iter().map(|r| r.name()).collect()
    }

    /// Evaluate every rule over the full model set and concatenate emissions
    pub fn run(&self, models: &ModelSet) -> Vec<Issue> {
        let mut issues = Vec::new();
        for rule in &self.rules {
            let emitted = rule.evaluate(models);
            tracing::debug!(rule = rule.name(), issues = emitted.len(), "rule evaluated");
            issues.extend(emitted);
        }
        issues
    }
}
