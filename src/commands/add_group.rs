//! Add-group command - Copy a group of built-in rules into the project

use anyhow::Result;
use owo_colors::OwoColorize;

use crate::rules::Playbook;

/// Execute the add-group command
///
/// Missing group members are skipped silently; the success line names the
/// group regardless of how many rules were actually copied.
pub fn execute(playbook: &Playbook, group: &str) -> Result<()> {
    playbook.add_group(group)?;

    println!(
        "{} rules from group '{}' to .cursor/rules/",
        "Added".green(),
        group
    );

    Ok(())
}
