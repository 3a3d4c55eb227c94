use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::store::DEFAULT_DB_PATH;

#[derive(Parser, Debug)]
#[command(name = "contact-book", version, about = "Simple JSON-backed contact book")]
pub struct Cli {
    /// Path to the contacts database file
    #[arg(long, env = "CONTACTS_DB_PATH", default_value = DEFAULT_DB_PATH)]
    pub db: PathBuf,

    #[command(subcommand)]
    pub command: Commands,
}

/// Subcommands and their flags
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Add a new contact
    Add {
        /// Contact name
        #[arg(long)]
        name: String,

        /// Contact email address
        #[arg(long)]
        email: String,

        /// Contact phone number
        #[arg(long)]
        phone: String,
    },
    /// List contacts
    List,
    /// Look up a single contact by id
    Get {
        /// Contact id
        #[arg(long)]
        id: String,
    },
    /// Remove a contact by id
    Remove {
        /// Contact id
        #[arg(long)]
        id: String,
    },
}
