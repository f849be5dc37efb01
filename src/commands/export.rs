//! Export command - Copy a project rule into the user registry

use anyhow::Result;
use owo_colors::OwoColorize;

use crate::rules::Playbook;

/// Execute the export command
pub fn execute(playbook: &Playbook, rule: &str) -> Result<()> {
    playbook.export_rule(rule)?;
    println!("{} rule '{}' to user registry", "Exported".green(), rule);
    Ok(())
}
