use alloy::{primitives::BlockNumber, rpc::types::Log};
use eyre::Result;

use crate::source::filter::ChunkFilter;

/// Where the engine reads the chain from.
#[async_trait::async_trait]
pub trait Source: Send + Sync {
    async fn latest_block_number(&self) -> Result<BlockNumber>;

    /// Confirmed logs matching the filter, ordered by block then log index.
    async fn chunk(&self, filter: ChunkFilter) -> Result<Vec<Log>>;
}
