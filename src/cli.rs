use clap::{Parser, Subcommand};
use clap_complete::Shell;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(author, version, about = "padel-pass backend")]
pub struct Cli {
    /// Command
    #[clap(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug, Clone, PartialEq)]
#[clap(rename_all = "lower_case")]
pub enum Command {
    /// Start the backend server
    Serve {
        /// Port number (optional, defaults to 3000)
        #[arg(short, long, default_value_t = 3000)]
        port: u16,
        /// Directory containing the five JSON documents
        #[arg(short, long, default_value = "data")]
        data: PathBuf,
    },
    /// Build a page view-model and print it as JSON
    Show {
        /// Page to build: home, pass, events, players or player
        page: String,
        /// Directory containing the five JSON documents
        #[arg(short, long, default_value = "data")]
        data: PathBuf,
        /// Player id (pass and player pages)
        #[arg(short = 'i', long)]
        player: Option<String>,
        /// Search query (events and players pages)
        #[arg(short, long)]
        query: Option<String>,
        /// Sort key for the players page
        #[arg(short, long)]
        sort: Option<String>,
        /// Theme passed through to the view-model
        #[arg(short, long)]
        theme: Option<String>,
    },
    /// Validate the data directory and print a summary
    Check {
        /// Directory containing the five JSON documents
        #[arg(short, long, default_value = "data")]
        data: PathBuf,
    },
    /// Generate shell completions
    Completions {
        /// Target shell
        #[arg(value_enum)]
        shell: Shell,
    },
}
