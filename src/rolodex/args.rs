use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "rolodex", version)]
#[command(about = "Keep names and phone numbers in a plain text file", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Contacts file (overrides the configured one)
    #[arg(short, long, global = true, env = "ROLODEX_FILE")]
    pub file: Option<PathBuf>,

    /// Verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Show all contacts
    #[command(alias = "ls")]
    List,

    /// Show the phone numbers of one contact
    #[command(alias = "phone")]
    Show { name: String },

    /// Add a new contact
    #[command(alias = "n")]
    Add {
        name: String,

        /// Initial phone numbers
        phones: Vec<String>,
    },

    /// Add phone numbers to an existing contact
    AddPhone {
        name: String,

        #[arg(required = true, num_args = 1..)]
        phones: Vec<String>,
    },

    /// Replace one phone number of a contact
    EditPhone {
        name: String,
        old: String,
        new: String,
    },

    /// Remove a phone number from a contact
    DeletePhone { name: String, phone: String },

    /// Delete a contact
    #[command(alias = "rm")]
    Delete { name: String },

    /// Rename a contact
    #[command(alias = "mv")]
    Rename { name: String, new_name: String },

    /// Get or set configuration
    Config {
        /// Configuration key (contacts-file, clear-screen)
        key: Option<String>,

        /// Value to set (if omitted, prints current value)
        value: Option<String>,
    },

    /// Start the interactive menu (the default)
    Shell,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_arguments_means_shell() {
        let cli = Cli::try_parse_from(["rolodex"]).unwrap();
        assert!(cli.command.is_none());
    }

    #[test]
    fn add_takes_optional_phones() {
        let cli = Cli::try_parse_from(["rolodex", "add", "Alice", "555-1111", "555-2222"]).unwrap();
        match cli.command {
            Some(Commands::Add { name, phones }) => {
                assert_eq!(name, "Alice");
                assert_eq!(phones, vec!["555-1111", "555-2222"]);
            }
            other => panic!("unexpected {:?}", other),
        }
    }

    #[test]
    fn add_phone_requires_a_phone() {
        assert!(Cli::try_parse_from(["rolodex", "add-phone", "Alice"]).is_err());
    }

    #[test]
    fn file_flag_is_global() {
        let cli = Cli::try_parse_from(["rolodex", "ls", "--file", "/tmp/c.csv"]).unwrap();
        assert_eq!(cli.file, Some(PathBuf::from("/tmp/c.csv")));
        assert!(matches!(cli.command, Some(Commands::List)));
    }
}
