//! Error types for the Comedy Tools core.

use thiserror::Error;

/// Result type for core operations.
pub type CoreResult<T> = Result<T, CoreError>;

/// Errors that can occur in the core.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CoreError {
    /// A word list had no entries to pick from.
    #[error("word list '{list}' is empty")]
    EmptyWordList {
        /// Name of the offending list.
        list: String,
    },

    /// A tool name did not match any known tool.
    #[error("unknown tool: {0} (expected scene, name, prompt, or word)")]
    UnknownTool(String),

    /// A table name did not match any built-in word list.
    #[error("unknown table: {0}")]
    UnknownTable(String),
}
