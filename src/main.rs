//! cursor-playbook: manage reusable Cursor rule templates across projects

use anyhow::Result;
use clap::{Parser, Subcommand};

use cursor_playbook::commands::{self, completion::CompletionKind};
use cursor_playbook::rules::Playbook;

#[derive(Parser)]
#[command(name = "cursor-playbook")]
#[command(about = "Manage reusable Cursor rule templates", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Add a specific Cursor rule to your project
    Add {
        /// Rule name (see `list` for what's available)
        rule: String,
    },

    /// Add a group of related rules to your project
    AddGroup {
        /// Group name
        group: String,
    },

    /// List all available rules and groups
    List,

    /// Create a new rule template
    Create {
        /// Name for the new rule
        name: String,

        /// Create the rule in the user registry instead of the project store
        #[arg(short, long)]
        global: bool,
    },

    /// Export a rule from the current project to the user registry
    Export {
        /// Rule name
        rule: String,
    },

    /// Import a rule from the user registry to the current project
    Import {
        /// Rule name
        rule: String,
    },

    /// Save current project rules as a named profile
    SaveProfile {
        /// Profile name
        name: String,
    },

    /// Apply a saved profile to the current project
    ApplyProfile {
        /// Profile name
        name: String,
    },

    /// List all saved rule profiles
    ListProfiles,

    /// List items for shell completion (internal use)
    #[command(hide = true)]
    ListForCompletion {
        /// Which names to emit
        #[arg(value_enum)]
        kind: CompletionKind,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let playbook = Playbook::discover()?;

    match cli.command {
        Commands::Add { rule } => {
            commands::add::execute(&playbook, &rule)?;
        }

        Commands::AddGroup { group } => {
            commands::add_group::execute(&playbook, &group)?;
        }

        Commands::List => {
            print!("{}", commands::list::execute(&playbook)?);
        }

        Commands::Create { name, global } => {
            commands::create::execute(&playbook, &name, global)?;
        }

        Commands::Export { rule } => {
            commands::export::execute(&playbook, &rule)?;
        }

        Commands::Import { rule } => {
            commands::import::execute(&playbook, &rule)?;
        }

        Commands::SaveProfile { name } => {
            commands::profile::save(&playbook, &name)?;
        }

        Commands::ApplyProfile { name } => {
            commands::profile::apply(&playbook, &name)?;
        }

        Commands::ListProfiles => {
            print!("{}", commands::profile::list(&playbook)?);
        }

        Commands::ListForCompletion { kind } => {
            println!("{}", commands::completion::execute(&playbook, kind)?);
        }
    }

    Ok(())
}
