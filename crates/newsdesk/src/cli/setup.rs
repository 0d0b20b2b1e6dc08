use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = "newsdesk",
    bin_name = "newsdesk",
    version,
    disable_help_subcommand = true
)]
#[command(about = "Publishing backend for a news site", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// TOML config file (environment variables still take precedence)
    #[arg(short, long, global = true, value_name = "FILE", help_heading = "Options")]
    pub config: Option<PathBuf>,

    /// Verbose output
    #[arg(short, long, global = true, help_heading = "Options")]
    pub verbose: bool,

    /// Only log warnings and errors
    #[arg(short, long, global = true, conflicts_with = "verbose", help_heading = "Options")]
    pub quiet: bool,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Run the HTTP API
    #[command(display_order = 1)]
    Serve {
        /// Address to listen on, e.g. 0.0.0.0:8080
        #[arg(long, value_name = "ADDR")]
        bind: Option<String>,

        /// Directory holding article documents
        #[arg(long, value_name = "DIR")]
        data_dir: Option<PathBuf>,
    },

    /// Fetch an article from the API and print it rendered
    #[command(display_order = 2)]
    Read {
        /// Article id
        id: String,

        /// Print the markdown source instead of HTML
        #[arg(long)]
        raw: bool,
    },

    /// Print the category tree
    #[command(display_order = 3)]
    Categories,
}

pub fn parse_cli() -> Cli {
    Cli::parse()
}
