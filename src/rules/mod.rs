//! Core rule, group, and profile operations

pub mod group;
pub mod profile;
pub mod resolver;
pub mod store;

pub use profile::{CopySummary, ProfileInfo};
pub use resolver::{ResolvedRule, RuleOrigin, RuleSource};

use anyhow::{Context, Result};
use std::fs;
use std::path::{Path, PathBuf};

use crate::config;
use crate::error::PlaybookError;
use group::RuleGroup;
use resolver::Resolver;

/// All playbook operations over an explicit set of directory roots
///
/// The roots are passed in rather than rediscovered per call so the whole
/// model can run against temporary directories in tests. `discover` wires up
/// the fixed production layout from [`crate::config`].
pub struct Playbook {
    builtin_dir: PathBuf,
    registry_root: PathBuf,
    project_dir: PathBuf,
}

impl Playbook {
    pub fn new(builtin_dir: PathBuf, registry_root: PathBuf, project_dir: PathBuf) -> Self {
        Self {
            builtin_dir,
            registry_root,
            project_dir,
        }
    }

    /// Build a playbook over the standard locations
    pub fn discover() -> Result<Self> {
        Ok(Self::new(
            config::builtin_rules_dir()?,
            config::user_registry_dir()?,
            config::project_rules_dir()?,
        ))
    }

    pub fn builtin_dir(&self) -> &Path {
        &self.builtin_dir
    }

    pub fn project_dir(&self) -> &Path {
        &self.project_dir
    }

    /// The user registry's rules/ subtree
    pub fn user_rules_dir(&self) -> PathBuf {
        self.registry_root.join("rules")
    }

    /// The user registry's profiles/ subtree
    pub fn profiles_dir(&self) -> PathBuf {
        self.registry_root.join("profiles")
    }

    /// Lookup sources in precedence order: built-in store, then user registry
    pub fn resolver(&self) -> Resolver {
        Resolver::new(vec![
            RuleSource {
                origin: RuleOrigin::Builtin,
                dir: self.builtin_dir.clone(),
            },
            RuleSource {
                origin: RuleOrigin::User,
                dir: self.user_rules_dir(),
            },
        ])
    }

    pub fn builtin_rule_names(&self) -> Result<Vec<String>> {
        store::list_rule_names(&self.builtin_dir)
    }

    pub fn user_rule_names(&self) -> Result<Vec<String>> {
        store::list_rule_names(&self.user_rules_dir())
    }

    /// Group table computed from the current built-in listing
    pub fn groups(&self) -> Result<Vec<RuleGroup>> {
        Ok(group::builtin_groups(&self.builtin_rule_names()?))
    }

    /// Resolve a rule and copy it into the project target
    pub fn add_rule(&self, name: &str) -> Result<ResolvedRule> {
        let resolved = self.resolver().resolve(name)?;
        store::copy_rule(&resolved.path, &self.project_dir)?;
        Ok(resolved)
    }

    /// Copy every rule of a group from the built-in store into the project
    ///
    /// Group members whose source file is missing are skipped; the group
    /// list may outlive individual rule files.
    pub fn add_group(&self, group_name: &str) -> Result<CopySummary> {
        let groups = self.groups()?;
        let group = group::find_group(&groups, group_name).ok_or_else(|| {
            PlaybookError::GroupNotFound {
                name: group_name.to_string(),
                available: group::group_names(&groups),
            }
        })?;

        fs::create_dir_all(&self.project_dir)
            .with_context(|| format!("Failed to create: {}", self.project_dir.display()))?;

        let mut summary = CopySummary::default();
        for rule in &group.rules {
            let source = store::rule_path(&self.builtin_dir, rule);
            if source.is_file() {
                store::copy_rule(&source, &self.project_dir)?;
                summary.record(profile::CopyOutcome::Copied);
            } else {
                summary.record(profile::CopyOutcome::SkippedMissing);
            }
        }

        Ok(summary)
    }

    /// Write a fresh rule template into the built-in store or the user registry
    ///
    /// Never overwrites: an occupied path is an error.
    pub fn create_rule(&self, name: &str, global: bool) -> Result<PathBuf> {
        store::validate_name(name)?;

        let dir = if global {
            self.user_rules_dir()
        } else {
            self.builtin_dir.clone()
        };
        let path = store::rule_path(&dir, name);

        if path.exists() {
            return Err(PlaybookError::RuleAlreadyExists {
                name: name.to_string(),
                path,
            }
            .into());
        }

        fs::create_dir_all(&dir).with_context(|| format!("Failed to create: {}", dir.display()))?;
        fs::write(&path, store::rule_template(name))
            .with_context(|| format!("Failed to write: {}", path.display()))?;

        Ok(path)
    }

    /// Copy a rule from the project target into the user registry
    pub fn export_rule(&self, name: &str) -> Result<PathBuf> {
        let source = store::rule_path(&self.project_dir, name);
        if !source.is_file() {
            return Err(PlaybookError::RuleNotInProject {
                name: name.to_string(),
            }
            .into());
        }

        store::copy_rule(&source, &self.user_rules_dir())
    }

    /// Copy a rule from the user registry into the project target
    pub fn import_rule(&self, name: &str) -> Result<PathBuf> {
        let source = store::rule_path(&self.user_rules_dir(), name);
        if !source.is_file() {
            return Err(PlaybookError::RuleNotInRegistry {
                name: name.to_string(),
            }
            .into());
        }

        store::copy_rule(&source, &self.project_dir)
    }

    /// Snapshot the project's active rules as a named profile
    ///
    /// Replaces the entire prior content of a same-named profile; the
    /// profile directory itself is emptied in place, not recreated.
    pub fn save_profile(&self, name: &str) -> Result<CopySummary> {
        store::validate_name(name)?;

        if !self.project_dir.is_dir() {
            return Err(PlaybookError::NoActiveRules.into());
        }

        let profile_dir = self.profiles_dir().join(name);
        if profile_dir.exists() {
            profile::clear_dir(&profile_dir)?;
        } else {
            fs::create_dir_all(&profile_dir)
                .with_context(|| format!("Failed to create: {}", profile_dir.display()))?;
        }

        profile::copy_rules(&self.project_dir, &profile_dir)
    }

    /// Copy a saved profile's rules into the project target
    ///
    /// Additive only: same-named rules are overwritten, everything else in
    /// the project is left alone.
    pub fn apply_profile(&self, name: &str) -> Result<CopySummary> {
        let profile_dir = self.profiles_dir().join(name);
        if !profile_dir.is_dir() {
            return Err(PlaybookError::ProfileNotFound {
                name: name.to_string(),
            }
            .into());
        }

        profile::copy_rules(&profile_dir, &self.project_dir)
    }

    /// All saved profiles with their rule counts
    pub fn profiles(&self) -> Result<Vec<ProfileInfo>> {
        profile::list_profiles(&self.profiles_dir())
    }

    /// Names of all saved profiles
    pub fn profile_names(&self) -> Result<Vec<String>> {
        Ok(self.profiles()?.into_iter().map(|p| p.name).collect())
    }
}
