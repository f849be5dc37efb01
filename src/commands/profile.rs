//! Profile commands - save, apply, and list named rule-set snapshots

use anyhow::Result;
use owo_colors::OwoColorize;
use std::fmt::Write;

use crate::rules::Playbook;

/// Execute the save-profile command
pub fn save(playbook: &Playbook, name: &str) -> Result<()> {
    let summary = playbook.save_profile(name)?;
    println!(
        "{} {} rules as profile '{}'",
        "Saved".green(),
        summary.copied,
        name
    );
    Ok(())
}

/// Execute the apply-profile command
pub fn apply(playbook: &Playbook, name: &str) -> Result<()> {
    let summary = playbook.apply_profile(name)?;
    println!(
        "{} profile '{}' with {} rules to current project",
        "Applied".green(),
        name,
        summary.copied
    );
    Ok(())
}

/// Execute the list-profiles command and return formatted output
pub fn list(playbook: &Playbook) -> Result<String> {
    let profiles = playbook.profiles()?;

    if profiles.is_empty() {
        return Ok("No saved profiles found.\n".to_string());
    }

    let mut output = String::new();
    writeln!(output, "Available profiles:")?;
    for profile in profiles {
        writeln!(output, "- {} ({} rules)", profile.name, profile.rule_count)?;
    }

    Ok(output)
}
