use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(about = "Select indexed results", long_about = None)]
pub struct Query {
    /// SQLite connection string
    #[arg(short, long, env = "DATABASE_URL", default_value = "sqlite://bounty-indexer.db")]
    pub db_url: String,

    #[command(subcommand)]
    pub entity: Entity,
}

#[derive(Debug, Subcommand)]
pub enum Entity {
    /// All bounties with their winners count, newest first
    Bounties,
    /// One bounty by id
    Bounty { id: i64 },
    /// Claims of a bounty, by bounty id
    BountyClaims { id: i64 },
    /// Claims made by a wallet
    WalletClaims { wallet: String },
    /// Last fully ingested block
    Cursor,
}
