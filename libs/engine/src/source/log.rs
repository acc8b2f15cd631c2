use crate::source::filter::ChunkFilter;
use crate::source::handle::Source;
use alloy::{primitives::BlockNumber, rpc::types::Log};
use chain::rpc::NodeClient;
use eyre::Result;

pub struct LogSource {
    pub node_client: NodeClient,
}

#[async_trait::async_trait]
impl Source for LogSource {
    async fn latest_block_number(&self) -> Result<BlockNumber> {
        Ok(self.node_client.get_latest_block_number().await?)
    }

    async fn chunk(&self, filter: ChunkFilter) -> Result<Vec<Log>> {
        let logs_chunk = self
            .node_client
            .get_logs(
                filter.address,
                filter.event.signature(),
                filter.from_block_number.into(),
                filter.to_block_number.into(),
            )
            .await?;

        Ok(confirmed(logs_chunk))
    }
}

/// Drops logs of pending transactions. They are returned again with a block
/// number once mined.
pub fn confirmed(logs: Vec<Log>) -> Vec<Log> {
    logs.into_iter().filter(|log| log.block_number.is_some()).collect()
}
