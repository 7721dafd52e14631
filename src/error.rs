//! Error types for the schema linter
//!
//! Only the I/O shell can fail. Parsing is lenient by design (unmatched
//! input is skipped, never an error) and rule evaluation is total, so
//! neither stage produces a `LintError`.

use std::path::PathBuf;
use thiserror::Error;

/// Result type for linter operations
pub type Result<T> = std::result::Result<T, LintError>;

/// Schema linter errors
#[derive(Error, Debug)]
pub enum LintError {
    #[error("Schema file not found: {}", path.display())]
    SchemaNotFound { path: PathBuf },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Config error: {0}")]
    Config(#[from] config_crate::ConfigError),
}
