//! List command - Show available rules and groups

use anyhow::Result;
use std::fmt::Write;

use crate::rules::Playbook;

/// Execute the list command and return formatted output
///
/// Presentation only: an absent user registry just means an empty user
/// section, never a failure.
pub fn execute(playbook: &Playbook) -> Result<String> {
    let mut output = String::new();

    writeln!(output, "Available rules:")?;
    for rule in playbook.builtin_rule_names()? {
        writeln!(output, "- {rule}")?;
    }

    let user_rules = playbook.user_rule_names()?;
    if !user_rules.is_empty() {
        writeln!(output)?;
        writeln!(output, "User rules:")?;
        for rule in user_rules {
            writeln!(output, "- {rule}")?;
        }
    }

    writeln!(output)?;
    writeln!(output, "Available rule groups:")?;
    for group in playbook.groups()? {
        writeln!(output, "- {} ({} rules)", group.name, group.rules.len())?;
    }

    Ok(output)
}
