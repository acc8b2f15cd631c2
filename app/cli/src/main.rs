mod cli {
    pub mod engine {
        pub mod args;
        pub mod run;
    }
    pub mod query {
        pub mod args;
        pub mod response;
        pub mod run;
    }
    pub mod cmd;
    pub mod read;
}

use alloy::primitives::Address;
use clap::Parser;
use engine::args::Args;
use eyre::{Result, WrapErr};
use std::time::Duration;
use tracing_subscriber::EnvFilter;

use crate::cli::cmd::{Cli, Command};

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    init_tracing(&cli);

    match &cli.command {
        Command::Engine(args) => {
            tracing::info!("Engine Command: {:?}", args);
            // map CLI args to Engine Args
            let factory_address: Address =
                args.factory_address.trim().parse().wrap_err("Invalid factory address")?;
            let start_args = Args {
                factory_address,
                start_block: args.start_block.into(),
                poll_interval: Duration::from_millis(args.poll_interval),
                max_block_range: args.max_block_range,
            };
            cli::engine::run::start(&args.rpc_url, &args.db_url, start_args).await
        }
        Command::Select(query) => {
            tracing::info!("Engine Query: {:?}", query);
            cli::query::run::select(query).await
        }
    }
}

fn init_tracing(cli: &Cli) {
    match &cli.command {
        Command::Engine(_) => {
            // RUST_LOG wins; otherwise report every cycle at info.
            let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
            tracing_subscriber::fmt().with_env_filter(filter).init();
        }
        Command::Select(_) => {
            // stdout is reserved for the JSON result
            tracing_subscriber::fmt()
                .with_env_filter(EnvFilter::from_default_env())
                .with_writer(std::io::stderr)
                .init();
        }
    }
}
