use alloy::primitives::BlockNumber;
use eyre::{Result, eyre};
use store::cursor::store::Store as CursorStore;

#[derive(Clone)]
pub struct Checkpointer {
    store: CursorStore,
}

impl Checkpointer {
    pub fn new(store: CursorStore) -> Self {
        Self { store }
    }

    pub async fn last_checkpoint(&self) -> Result<Option<BlockNumber>> {
        match self.store.get_last_block().await {
            Ok(last_block) => Ok(last_block),
            Err(e) => {
                tracing::error!("Checkpointer failed on [get_last_block]: {e:?}");
                Err(eyre!(e))
            }
        }
    }

    /// Marks every block up to `block_number` as fully ingested.
    pub async fn checkpoint(&self, block_number: BlockNumber) -> Result<()> {
        match self.store.set_last_block(block_number).await {
            Ok(true) => {
                tracing::info!("Checkpoint saved at block number {block_number:?}");
                Ok(())
            }
            Ok(false) => {
                tracing::warn!(
                    "Checkpoint at block number {block_number:?} ignored: cursor is already there or beyond"
                );
                Ok(())
            }
            Err(e) => {
                tracing::error!("Checkpointer failed on [set_last_block]: {e:?}");
                Err(eyre!(e))
            }
        }
    }
}
