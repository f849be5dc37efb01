//! Default filesystem locations
//!
//! The directory layout is fixed: built-in rules ship next to the binary,
//! the project target lives under the current working directory, and the
//! user registry lives under the home directory. Core operations receive
//! these roots explicitly (see [`crate::rules::Playbook`]) so they stay
//! testable against temporary directories.

use anyhow::{Context, Result};
use std::env;
use std::path::PathBuf;

/// Get the built-in rule store directory
///
/// Prefers a `rules/` directory next to the installed executable; falls back
/// to the source checkout's `rules/` when running via cargo.
pub fn builtin_rules_dir() -> Result<PathBuf> {
    if let Ok(exe) = env::current_exe() {
        if let Some(dir) = exe.parent() {
            let candidate = dir.join("rules");
            if candidate.is_dir() {
                return Ok(candidate);
            }
        }
    }

    Ok(PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("rules"))
}

/// Get the project's active rule directory (<cwd>/.cursor/rules/)
pub fn project_rules_dir() -> Result<PathBuf> {
    let cwd = env::current_dir().context("Could not determine current directory")?;
    Ok(cwd.join(".cursor").join("rules"))
}

/// Get the user registry root (~/.cursor-playbook/)
///
/// Created lazily on first write; never torn down by the tool.
pub fn user_registry_dir() -> Result<PathBuf> {
    let home = dirs::home_dir().context("Could not determine home directory")?;
    Ok(home.join(".cursor-playbook"))
}
