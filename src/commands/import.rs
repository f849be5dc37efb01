//! Import command - Copy a user registry rule into the project

use anyhow::Result;
use owo_colors::OwoColorize;

use crate::rules::Playbook;

/// Execute the import command
pub fn execute(playbook: &Playbook, rule: &str) -> Result<()> {
    playbook.import_rule(rule)?;
    println!("{} rule '{}' to current project", "Imported".green(), rule);
    Ok(())
}
