//! Profile storage and bulk rule copies
//!
//! A profile is a subdirectory of the registry's `profiles/` tree holding
//! copies of the `.mdc` files that were active when it was saved. Bulk copy
//! loops are best-effort: a rule whose source file vanished is skipped and
//! counted rather than failing the whole operation.

use anyhow::{Context, Result};
use std::fs;
use std::path::Path;

use crate::rules::store;

/// Result of one rule copy within a bulk operation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CopyOutcome {
    Copied,
    SkippedMissing,
}

/// Aggregate of a bulk copy loop
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct CopySummary {
    pub copied: usize,
    pub skipped: usize,
}

impl CopySummary {
    pub fn record(&mut self, outcome: CopyOutcome) {
        match outcome {
            CopyOutcome::Copied => self.copied += 1,
            CopyOutcome::SkippedMissing => self.skipped += 1,
        }
    }
}

/// A saved profile and how many rules it holds
#[derive(Debug, Clone)]
pub struct ProfileInfo {
    pub name: String,
    pub rule_count: usize,
}

/// Copy every rule file from one directory into another, overwriting
///
/// Creates the target directory if needed. Never removes files already in
/// the target, so applying on top of an existing rule set is additive.
pub fn copy_rules(source_dir: &Path, target_dir: &Path) -> Result<CopySummary> {
    let mut summary = CopySummary::default();

    for name in store::list_rule_names(source_dir)? {
        let source = store::rule_path(source_dir, &name);
        if source.is_file() {
            store::copy_rule(&source, target_dir)?;
            summary.record(CopyOutcome::Copied);
        } else {
            summary.record(CopyOutcome::SkippedMissing);
        }
    }

    // An empty source still guarantees the target exists afterwards
    fs::create_dir_all(target_dir)
        .with_context(|| format!("Failed to create: {}", target_dir.display()))?;

    Ok(summary)
}

/// Remove every entry inside a directory, keeping the directory itself
///
/// Saving over an existing profile empties it in place so the directory
/// identity is preserved.
pub fn clear_dir(dir: &Path) -> Result<()> {
    let entries =
        fs::read_dir(dir).with_context(|| format!("Failed to read: {}", dir.display()))?;

    for entry in entries.flatten() {
        let path = entry.path();
        if path.is_dir() {
            fs::remove_dir_all(&path)
        } else {
            fs::remove_file(&path)
        }
        .with_context(|| format!("Failed to remove: {}", path.display()))?;
    }

    Ok(())
}

/// List saved profiles under the profiles root, sorted by name
///
/// A missing root means no profiles, not an error.
pub fn list_profiles(profiles_root: &Path) -> Result<Vec<ProfileInfo>> {
    let mut profiles = Vec::new();

    if !profiles_root.is_dir() {
        return Ok(profiles);
    }

    let entries = fs::read_dir(profiles_root)
        .with_context(|| format!("Failed to read: {}", profiles_root.display()))?;

    for entry in entries.flatten() {
        if !entry.file_type()?.is_dir() {
            continue;
        }

        let name = entry.file_name().to_string_lossy().to_string();
        let rule_count = store::list_rule_names(&entry.path())?.len();
        profiles.push(ProfileInfo { name, rule_count });
    }

    profiles.sort_by(|a, b| a.name.cmp(&b.name));
    Ok(profiles)
}
