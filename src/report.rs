//! Issue reporting
//!
//! Renders an issue sequence for humans (grouped by severity) or machines
//! (JSON). The exit-signal decision lives here too: only error-severity
//! issues count as failure, warnings and suggestions alone still pass.

use crate::error::Result;
use crate::model::{Issue, Severity};

/// Whether the issue list contains at least one error-severity issue
pub fn has_errors(issues: &[Issue]) -> bool {
    issues.iter().any(|i| i.severity == Severity::Error)
}

/// Render a human-readable report, grouped error / warning / info
pub fn render_text(issues: &[Issue]) -> String {
    if issues.is_empty() {
        return "✓ Schema validation passed with no issues".to_string();
    }

    let mut report = Vec::new();
    report.push(format!("Schema Validation Report: {} issue(s) found\n", issues.len()));

    let errors: Vec<_> = issues.iter().filter(|i| i.severity == Severity::Error).collect();
    let warnings: Vec<_> = issues.iter().filter(|i| i.severity == Severity::Warning).collect();
    let info: Vec<_> = issues.iter().filter(|i| i.severity == Severity::Info).collect();

    if !errors.is_empty() {
        report.push("ERRORS:".to_string());
        for issue in &errors {
            report.push(format!("  ✗ {}: {}", issue.location(), issue.message));
        }
        report.push(String::new());
    }

    if !warnings.is_empty() {
        report.push("WARNINGS:".to_string());
        for issue in &warnings {
            report.push(format!("  ⚠ {}: {}", issue.location(), issue.message));
        }
        report.push(String::new());
    }

    if !info.is_empty() {
        report.push("SUGGESTIONS:".to_string());
        for issue in &info {
            report.push(format!("  ℹ {}: {}", issue.location(), issue.message));
        }
    }

    // Drop a trailing blank group separator
    while report.last().is_some_and(String::is_empty) {
        report.pop();
    }

    report.join("\n")
}

/// Render the issue list as pretty-printed JSON
pub fn render_json(issues: &[Issue]) -> Result<String> {
    Ok(serde_json::to_string_pretty(issues)?)
}
