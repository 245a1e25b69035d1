//! Error types for the content transform engine.

use thiserror::Error;

/// Main error type for transform operations.
///
/// Only fatal conditions surface here. A handle tuple that does not resolve
/// in the target store is *not* an error: store lookups return
/// `Result<Option<T>>` and `Ok(None)` means not-found, which the transforms
/// absorb by dropping the single reference and continuing.
#[derive(Error, Debug)]
pub enum MigrateError {
    /// Configuration error (invalid YAML, bad slug settings, etc.)
    #[error("Configuration error: {0}")]
    Config(String),

    /// Store collaborator failure (lookup backend unreachable, query error).
    /// Aborts the whole transform for the entity being processed.
    #[error("Store error: {message}\n  Context: {context}")]
    Store { message: String, context: String },

    /// Field layout / block type lookup failed in the schema collaborator.
    #[error("Schema lookup failed: {0}")]
    Schema(String),

    /// An extension hook vetoed a field value with a fatal error.
    #[error("Hook rejected value for field {field}: {message}")]
    Hook { field: String, message: String },

    /// IO error (config file operations)
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// YAML serialization/deserialization error
    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    /// JSON serialization/deserialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl MigrateError {
    /// Create a Store error with context about where it occurred
    pub fn store(message: impl Into<String>, context: impl Into<String>) -> Self {
        MigrateError::Store {
            message: message.into(),
            context: context.into(),
        }
    }

    /// Create a Hook error for a field
    pub fn hook(field: impl Into<String>, message: impl Into<String>) -> Self {
        MigrateError::Hook {
            field: field.into(),
            message: message.into(),
        }
    }

    /// Format error with full details including error chain
    pub fn format_detailed(&self) -> String {
        let mut output = format!("Error: {}\n", self);

        let mut source = std::error::Error::source(self);
        let mut depth = 1;
        while let Some(err) = source {
            output.push_str(&format!("\nCaused by:\n  {}: {}", depth, err));
            source = err.source();
            depth += 1;
        }

        output
    }
}

/// Result type alias for transform operations.
pub type Result<T> = std::result::Result<T, MigrateError>;
