use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "shelf")]
#[command(about = "Keep track of the books in a home library", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Directory holding library.json and counter.txt (overrides SHELF_HOME)
    #[arg(short, long, global = true, value_name = "DIR")]
    pub data_dir: Option<PathBuf>,

    /// Use the per-user data directory instead of the current one
    #[arg(short, long, global = true, conflicts_with = "data_dir")]
    pub global: bool,

    /// Verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Add a book
    #[command(alias = "a")]
    Add {
        title: String,
        author: String,
        /// Publication year, four digits
        year: String,
    },

    /// Remove every book with the given id
    #[command(alias = "rm")]
    Remove { id: String },

    /// Find books whose title, author or year is exactly the query
    #[command(alias = "s")]
    Search { query: String },

    /// Change the status of a book ("in stock" or "checked out")
    #[command(alias = "st")]
    Status { id: String, status: String },

    /// List all books
    #[command(alias = "ls")]
    List {
        /// One line per book
        #[arg(long)]
        short: bool,
    },

    /// Get or set configuration
    Config {
        /// Configuration key (catalog-file, counter-file, default-status)
        key: Option<String>,

        /// Value to set (if omitted, prints current value)
        value: Option<String>,
    },
}
