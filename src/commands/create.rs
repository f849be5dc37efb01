//! Create command - Generate a new rule template

use anyhow::Result;
use owo_colors::OwoColorize;

use crate::rules::Playbook;

/// Execute the create command
///
/// `global` selects the user registry over the built-in store. Existing
/// files are never overwritten.
pub fn execute(playbook: &Playbook, name: &str, global: bool) -> Result<()> {
    let path = playbook.create_rule(name, global)?;

    let scope = if global { " (in user registry)" } else { "" };
    println!(
        "{} new rule template: {}{}",
        "Created".green(),
        path.display(),
        scope
    );

    Ok(())
}
