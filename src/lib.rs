//! Schema Lint
//!
//! Static analysis for Prisma-style schema definitions. Scans a schema text
//! for `model` blocks and reports structural and stylistic issues without
//! executing or connecting to any database.
//!
//! ## Pipeline
//!
//! ```text
//! schema text
//!     │  SchemaParser (regex heuristics, lenient: skip, never fail)
//!     ▼
//! ModelSet (ordered models: fields, raw indexes, derived booleans)
//!     │  RuleEngine (fixed battery of independent, pure rules)
//!     ▼
//! Vec<Issue> (deterministic order: rule, then model, then emission)
//! ```
//!
//! ## Example
//!
//! ```
//! use schema_lint::{lint_source, Severity};
//!
//! let issues = lint_source("model user { bio String }");
//! assert!(issues.iter().any(|i| i.severity == Severity::Error));
//! ```

pub mod config;
pub mod error;
pub mod model;
pub mod parse;
pub mod report;
pub mod rules;

pub use config::{LintConfig, ReportFormat};
pub use error::{LintError, Result};
pub use model::{Field, Issue, Model, ModelSet, Severity};
pub use parse::{parse_schema, SchemaParser};
pub use report::{has_errors, render_json, render_text};
pub use rules::{default_rules, Rule, RuleEngine};

use std::path::Path;

/// Lint schema text with the default parser and rule battery
///
/// Deterministic: identical input always yields the identical issue
/// sequence. Text with zero model blocks yields an empty sequence.
pub fn lint_source(schema: &str) -> Vec<Issue> {
    let models = SchemaParser::new().parse(schema);
    RuleEngine::new().run(&models)
}

/// Lint a schema file
///
/// A missing path surfaces as [`LintError::SchemaNotFound`], distinct from
/// other I/O failures so the CLI can report it cleanly.
pub fn lint_file(path: &Path) -> Result<Vec<Issue>> {
    Ok(lint_source(&read_schema_file(path)?))
}

/// Read schema text from disk, mapping a missing path to
/// [`LintError::SchemaNotFound`]
pub fn read_schema_file(path: &Path) -> Result<String> {
    if !path.exists() {
        return Err(LintError::SchemaNotFound {
            path: path.to_path_buf(),
        });
    }
    Ok(std::fs::read_to_string(path)?)
}
