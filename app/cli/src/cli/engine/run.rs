use alloy::transports::http::reqwest::Url;
use chain::rpc::NodeClient;
use engine::{
    args::Args,
    engine::Engine,
    source::{handle::Source, log::LogSource},
};
use eyre::{Result, WrapErr};
use std::sync::Arc;
use store::client::Client;

pub async fn start(rpc_url: &str, db_url: &str, engine_args: Args) -> Result<()> {
    let rpc_url = Url::parse(rpc_url).wrap_err("Invalid RPC url")?;
    let node_client = NodeClient::new(rpc_url);
    let source: Arc<dyn Source> = Arc::new(LogSource { node_client });

    let client = Client::init(db_url).await?;

    tracing::info!("Starting the engine {engine_args:?}");

    let engine = Engine::start(&engine_args, source, &client);

    // Wait for user to request shutdown (SIGINT)
    tokio::signal::ctrl_c().await?;
    tracing::info!("Shutting down engine...");

    // Stop scheduling new cycles
    engine.shutdown().await;

    Ok(())
}
