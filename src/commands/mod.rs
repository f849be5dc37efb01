//! CLI commands

pub mod add;
pub mod add_group;
pub mod completion;
pub mod create;
pub mod export;
pub mod import;
pub mod list;
pub mod profile;
