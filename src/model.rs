//! Schema model types
//!
//! Normalized, immutable descriptors produced by the parser and consumed by
//! the rule engine. Models are built once per parse pass and never mutated
//! afterwards.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Severity of a validation issue
///
/// Ordered so that `Error` ranks highest; the reporter groups issues by
/// severity in descending order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Severity {
    Info,
    Warning,
    Error,
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Info => write!(f, "info"),
            Self::Warning => write!(f, "warning"),
            Self::Error => write!(f, "error"),
        }
    }
}

/// A single field line within a model block
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Field {
    /// Field name as written in the schema
    pub name: String,
    /// Declared type name, either a primitive tag or another model's name
    pub field_type: String,
    /// Whether the type carries the `?` optional marker
    pub optional: bool,
    /// Whether the type carries the `[]` list marker
    pub array: bool,
    /// Raw trailing attribute text (`@id`, `@relation(...)`, ...), kept
    /// unparsed; rules pattern-match into it as needed
    pub attributes: String,
}

/// One `model` block extracted from the schema text
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Model {
    /// Model name (PascalCase by convention, not enforced here)
    pub name: String,
    /// Fields in source order
    pub fields: Vec<Field>,
    /// Raw `@@index(...)` / `@@...` block-attribute lines, verbatim
    pub indexes: Vec<String>,
    /// Any field carries `@id` or is literally named `id`
    pub has_id: bool,
    /// Any field is named with one of the timestamp conventions
    /// (`createdAt`/`updatedAt` or `created_at`/`updated_at`)
    pub has_timestamps: bool,
}

/// Insertion-ordered collection of models with by-name lookup
///
/// Duplicate model names follow last-occurrence-wins semantics: the later
/// block replaces the earlier one in place, keeping the original position.
/// Iteration order is therefore the order of first appearance in the source
/// text, which makes the issue sequence deterministic.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ModelSet {
    models: Vec<Model>,
}

impl ModelSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a model; replaces any existing model with the same name
    pub fn insert(&mut self, model: Model) {
        match self.models.iter_mut().find(|m| m.name == model.name) {
            Some(existing) => *existing = model,
            None => self.models.push(model),
        }
    }

    /// Look up a model by name
    pub fn get(&self, name: &str) -> Option<&Model> {
        self.models.iter().find(|m| m.name == name)
    }

    /// Whether a model with this name exists
    pub fn contains(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    /// Iterate models in first-appearance order
    pub fn iter(&self) -> impl Iterator<Item = &Model> {
        self.models.iter()
    }

    pub fn len(&self) -> usize {
        self.models.len()
    }

    pub fn is_empty(&self) -> bool {
        self.models.is_empty()
    }
}

impl<'a> IntoIterator for &'a ModelSet {
    type Item = &'a Model;
    type IntoIter = std::slice::Iter<'a, Model>;

    fn into_iter(self) -> Self::IntoIter {
        self.models.iter()
    }
}

/// One validation finding
///
/// Pure output value; issues reference models by name only, never by
/// pointer, so the sequence can outlive the model set.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Issue {
    /// Severity level
    pub severity: Severity,
    /// Name of the model the issue belongs to
    pub model: String,
    /// Field name, or empty string for model-level issues
    pub field: String,
    /// Human-readable description
    pub message: String,
}

impl Issue {
    /// Model-level issue (empty field name)
    pub fn model_level(severity: Severity, model: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            severity,
            model: model.into(),
            field: String::new(),
            message: message.into(),
        }
    }

    /// Field-level issue
    pub fn field_level(
        severity: Severity,
        model: impl Into<String>,
        field: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        Self {
            severity,
            model: model.into(),
            field: field.into(),
            message: message.into(),
        }
    }

    /// `Model.field` location string used by the text reporter
    pub fn location(&self) -> String {
        if self.field.is_empty() {
            self.model.clone()
        } else {
            format!("{}.{}", self.model, self.field)
        }
    }
}
