//! Rule lookup across an ordered list of sources
//!
//! Precedence is positional: the first source containing `<name>.mdc` wins.
//! The standard order is built-in store first, then user registry.

use std::fmt;
use std::path::PathBuf;

use crate::error::PlaybookError;
use crate::rules::store;

/// Where a resolved rule came from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RuleOrigin {
    Builtin,
    User,
}

impl fmt::Display for RuleOrigin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Builtin => write!(f, "built-in"),
            Self::User => write!(f, "user"),
        }
    }
}

/// A directory of rule files participating in lookup
#[derive(Debug, Clone)]
pub struct RuleSource {
    pub origin: RuleOrigin,
    pub dir: PathBuf,
}

/// A successfully located rule
#[derive(Debug, Clone)]
pub struct ResolvedRule {
    pub name: String,
    pub origin: RuleOrigin,
    pub path: PathBuf,
}

/// Pure lookup over ordered sources; no side effects
pub struct Resolver {
    sources: Vec<RuleSource>,
}

impl Resolver {
    pub fn new(sources: Vec<RuleSource>) -> Self {
        Self { sources }
    }

    /// Locate the source file for a rule name
    ///
    /// On failure the error carries every currently available rule name
    /// (union across sources) to aid correction.
    pub fn resolve(&self, name: &str) -> Result<ResolvedRule, PlaybookError> {
        for source in &self.sources {
            let path = store::rule_path(&source.dir, name);
            if path.is_file() {
                return Ok(ResolvedRule {
                    name: name.to_string(),
                    origin: source.origin,
                    path,
                });
            }
        }

        Err(PlaybookError::RuleNotFound {
            name: name.to_string(),
            available: self.available_names(),
        })
    }

    /// Union of rule names across all sources, in source order, deduplicated
    pub fn available_names(&self) -> Vec<String> {
        let mut names: Vec<String> = Vec::new();
        for source in &self.sources {
            for name in store::list_rule_names(&source.dir).unwrap_or_default() {
                if !names.contains(&name) {
                    names.push(name);
                }
            }
        }
        names
    }
}
