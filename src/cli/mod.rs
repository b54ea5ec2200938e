//! Command line interface
//!
//! - `serve`: run the HTTP server (default)
//! - `search`: score the knowledge base against a query and print the best chunks

pub mod search;
pub mod serve;

use clap::{Parser, Subcommand};

/// PRAXIS - portfolio chat assistant backed by a markdown knowledge base
#[derive(Parser)]
#[command(name = "praxis-assistant")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand, Debug, PartialEq, Eq)]
pub enum Command {
    /// Run the HTTP server (default)
    Serve,

    /// Print the knowledge base chunks that best match a query
    Search(search::SearchArgs),
}

impl Cli {
    /// The requested subcommand, `serve` when none was given
    pub fn command(self) -> Command {
        self.command.unwrap_or(Command::Serve)
    }
}
