use std::path::PathBuf;

use clap::{ArgAction, Parser, Subcommand};

use crate::logging::Verbosity;
use crate::storage::DEFAULT_STORAGE_PATH;

#[derive(Parser, Debug)]
#[command(name = "rusty-directory", version, about = "Personal contact directory")]
pub struct Cli {
    /// JSON file the directory is kept in
    #[arg(long, global = true, env = "DIRECTORY_FILE", default_value = DEFAULT_STORAGE_PATH)]
    pub file: PathBuf,

    /// More log output (-v debug, -vv trace)
    #[arg(short, long, global = true, action = ArgAction::Count)]
    pub verbose: u8,

    /// Only log errors
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Run a single operation instead of the interactive menu
    #[command(subcommand)]
    pub command: Option<Commands>,
}

impl Cli {
    pub fn verbosity(&self) -> Verbosity {
        Verbosity::from_flags(self.verbose, self.quiet)
    }
}

/// Subcommand and their flags
#[derive(Subcommand, Debug, PartialEq, Eq)]
pub enum Commands {
    /// Add a contact, or replace one with the same name
    Add {
        /// Contact name
        #[arg(long)]
        name: String,

        /// Phone number: digits, spaces, '+' and '-'
        #[arg(long)]
        phone: String,

        /// Email address, must contain '@'
        #[arg(long)]
        email: String,

        /// Postal address
        #[arg(long, default_value = "")]
        address: String,

        /// Replace an existing contact without asking
        #[arg(short, long)]
        yes: bool,
    },
    /// List all contacts
    List,
    /// Show one contact by exact name
    Find {
        /// Name of contact to show
        #[arg(long)]
        name: String,
    },
    /// Delete a contact by exact name
    Delete {
        /// Name of contact to delete
        #[arg(long)]
        name: String,

        /// Delete without asking
        #[arg(short, long)]
        yes: bool,
    },
}
