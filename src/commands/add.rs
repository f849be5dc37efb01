//! Add command - Copy a rule into the project's .cursor/rules/

use anyhow::Result;
use owo_colors::OwoColorize;

use crate::rules::{Playbook, RuleOrigin};

/// Execute the add command
pub fn execute(playbook: &Playbook, rule: &str) -> Result<()> {
    let resolved = playbook.add_rule(rule)?;

    match resolved.origin {
        RuleOrigin::Builtin => {
            println!("{} '{}' rule to .cursor/rules/", "Added".green(), rule);
        }
        RuleOrigin::User => {
            println!("{} user rule '{}' to .cursor/rules/", "Added".green(), rule);
        }
    }

    Ok(())
}
