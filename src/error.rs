//! Error taxonomy for playbook operations
//!
//! Lookup and precondition failures get typed variants so callers (and tests)
//! can match on them; underlying filesystem errors are propagated through
//! `anyhow` with context instead.

use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum PlaybookError {
    /// Rule absent from every lookup source (built-in store and user registry)
    #[error("Rule '{name}' not found. Available rules: {}", .available.join(", "))]
    RuleNotFound {
        name: String,
        available: Vec<String>,
    },

    /// Rule absent from the project's .cursor/rules/ directory
    #[error("Rule '{name}' not found in current project.")]
    RuleNotInProject { name: String },

    /// Rule absent from the user registry's rules/ directory
    #[error("Rule '{name}' not found in user registry.")]
    RuleNotInRegistry { name: String },

    #[error("Group '{name}' not found. Available groups: {}", .available.join(", "))]
    GroupNotFound {
        name: String,
        available: Vec<String>,
    },

    /// `create` refuses to overwrite an existing rule file
    #[error("Rule '{name}' already exists at {}", .path.display())]
    RuleAlreadyExists { name: String, path: PathBuf },

    /// `save-profile` with no project rules directory present
    #[error("No rules found in current project.")]
    NoActiveRules,

    #[error("Profile '{name}' not found.")]
    ProfileNotFound { name: String },

    /// Names become file/directory names, so path separators are rejected
    #[error("Invalid name '{name}': names must be non-empty and contain no path separators")]
    InvalidName { name: String },
}
