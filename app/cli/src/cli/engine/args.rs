use std::num::NonZeroU64;

use clap::Parser;
use clap::{arg, command};

use crate::cli::read::FromBlock;

#[derive(Parser, Debug)]
#[command(about = "Start the bounty indexer sync engine", long_about = None)]
pub struct Args {
    /// Node Provider connection string
    #[arg(short, long, env = "RPC_URL")]
    pub rpc_url: String,

    /// SQLite connection string
    #[arg(short, long, env = "DATABASE_URL", default_value = "sqlite://bounty-indexer.db")]
    pub db_url: String,

    /// Bounty factory address (scopes BountyCreated logs)
    #[arg(short, long, env = "FACTORY_ADDRESS")]
    pub factory_address: String,

    /// Block number to start from when no cursor exists, or `latest`
    #[arg(long, env = "START_BLOCK", default_value = "latest")]
    pub start_block: FromBlock,

    /// Poll interval in milliseconds
    #[arg(
        long,
        env = "POLL_INTERVAL_MS",
        default_value_t = 5_000,
        value_parser = clap::value_parser!(u64).range(1..)
    )]
    pub poll_interval: u64,

    /// Maximum block range of a single eth_getLogs request
    #[arg(long, env = "MAX_BLOCK_RANGE", default_value = "500")]
    pub max_block_range: NonZeroU64,
}
