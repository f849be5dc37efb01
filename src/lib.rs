//! cursor-playbook library
//!
//! Copies Markdown rule templates between the built-in store shipped with
//! the tool, a per-user registry under `~/.cursor-playbook/`, and a
//! project's `.cursor/rules/` directory, with named profiles for saving and
//! restoring rule sets.

pub mod commands;
pub mod config;
pub mod error;
pub mod rules;
