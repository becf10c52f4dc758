use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "clubdb")]
#[command(version, about = "Multi-sport club management database on SQLite")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Create a database with the full club schema
    Init {
        /// Database path (defaults to the platform data directory)
        database: Option<PathBuf>,

        /// Replace an existing database file
        #[arg(short, long)]
        force: bool,
    },

    /// Create a database and load the sample dataset
    Seed {
        /// Database path (defaults to the platform data directory)
        database: Option<PathBuf>,

        /// Replace an existing database file
        #[arg(short, long)]
        force: bool,
    },

    /// List all table names
    Tables,

    /// Print the generated SQL schema
    Ddl,

    /// Dump every table as JSON
    Export {
        /// Database path (defaults to the platform data directory)
        database: Option<PathBuf>,
    },
}

impl Cli {
    pub fn parse_args() -> Self {
        Cli::parse()
    }
}

/// Default database location under the platform data directory.
pub fn default_db_path() -> Option<PathBuf> {
    directories::ProjectDirs::from("", "", "clubdb")
        .map(|dirs| dirs.data_dir().join("club.db"))
}
