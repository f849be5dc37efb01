//! Completion-data query - feed rule/group/profile names to shell completion
//!
//! Hidden from help output; only the generated completion scripts call it.

use anyhow::Result;
use clap::ValueEnum;

use crate::rules::{group, Playbook};

/// What kind of names to emit
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum CompletionKind {
    Rules,
    Groups,
    Profiles,
}

/// Execute the list-for-completion command and return the names, space-joined
pub fn execute(playbook: &Playbook, kind: CompletionKind) -> Result<String> {
    let names = match kind {
        CompletionKind::Rules => playbook.resolver().available_names(),
        CompletionKind::Groups => group::group_names(&playbook.groups()?),
        CompletionKind::Profiles => playbook.profile_names()?,
    };

    Ok(names.join(" "))
}
