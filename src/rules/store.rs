//! Rule file primitives
//!
//! A rule is a `<name>.mdc` file: a `---`-delimited front-matter block
//! (description, globs, alwaysApply) followed by a Markdown body. Everything
//! here treats rule files as opaque blobs except [`rule_template`], which
//! synthesizes a fresh one.

use anyhow::{Context, Result};
use fs_extra::file::CopyOptions;
use std::fs;
use std::path::{Path, PathBuf};

use crate::error::PlaybookError;

/// File extension for rule files (without the dot)
pub const RULE_EXT: &str = "mdc";

/// Path of the rule file for `name` inside `dir`
pub fn rule_path(dir: &Path, name: &str) -> PathBuf {
    dir.join(format!("{name}.{RULE_EXT}"))
}

/// Whether a path names a rule file
pub fn is_rule_file(path: &Path) -> bool {
    path.extension().is_some_and(|ext| ext == RULE_EXT)
}

/// Reject names that would escape the store directory or produce odd files
pub fn validate_name(name: &str) -> Result<(), PlaybookError> {
    if name.is_empty() || name.contains(['/', '\\']) || name == "." || name == ".." {
        return Err(PlaybookError::InvalidName {
            name: name.to_string(),
        });
    }
    Ok(())
}

/// List rule names (file stems) in a directory, sorted
///
/// A missing directory is an empty store, not an error.
pub fn list_rule_names(dir: &Path) -> Result<Vec<String>> {
    let mut names = Vec::new();

    if !dir.is_dir() {
        return Ok(names);
    }

    let entries =
        fs::read_dir(dir).with_context(|| format!("Failed to read: {}", dir.display()))?;

    for entry in entries.flatten() {
        let path = entry.path();
        if path.is_file() && is_rule_file(&path) {
            if let Some(stem) = path.file_stem().and_then(|s| s.to_str()) {
                names.push(stem.to_string());
            }
        }
    }

    names.sort();
    Ok(names)
}

/// Copy a rule file into a target directory, overwriting any existing copy
///
/// Creates the target directory if needed. Copying the same source twice is
/// idempotent. Returns the target path.
pub fn copy_rule(source: &Path, target_dir: &Path) -> Result<PathBuf> {
    fs::create_dir_all(target_dir)
        .with_context(|| format!("Failed to create: {}", target_dir.display()))?;

    let file_name = source
        .file_name()
        .with_context(|| format!("Invalid rule path: {}", source.display()))?;
    let target = target_dir.join(file_name);

    let options = CopyOptions::new().overwrite(true);
    fs_extra::file::copy(source, &target, &options).with_context(|| {
        format!(
            "Failed to copy {} to {}",
            source.display(),
            target.display()
        )
    })?;

    Ok(target)
}

/// Generate the content for a freshly created rule
pub fn rule_template(name: &str) -> String {
    format!(
        "---\n\
         description:\n\
         globs:\n\
         alwaysApply: false\n\
         ---\n\
         # {} Guidelines\n\
         - Add your guidelines here\n",
        title_case(name)
    )
}

/// Uppercase the first character, leave the rest untouched
fn title_case(name: &str) -> String {
    let mut chars = name.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
        None => String::new(),
    }
}
