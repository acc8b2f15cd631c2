use clap::command;
use clap::{Parser, Subcommand};

use crate::cli::query::args::Query;

use super::engine::args::Args;

#[derive(Parser, Debug)]
#[command(name = "bounty-indexer")]
#[command(about = "Indexes bounty factory events into SQLite", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Start the sync engine
    Engine(Args),
    /// Query the indexed store
    Select(Query),
}
