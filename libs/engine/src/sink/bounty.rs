use eyre::{Result, eyre};
use store::bounty::{model::NewBounty, store::Store};

use crate::sink::handle::Sink;

pub struct BountySink {
    pub store: Store,
}

#[async_trait::async_trait]
impl Sink for BountySink {
    type Item = NewBounty;

    async fn process_batch(&self, bounties: &[NewBounty]) -> Result<u64> {
        match self.store.insert_bounties_batch(bounties).await {
            Ok(inserted) => {
                let nbr_of_rows = bounties.len();
                tracing::info!("Processed bounties batch: {inserted} new of {nbr_of_rows:?}");
                Ok(inserted)
            }
            Err(e) => {
                tracing::error!("Sink failed on [insert_bounties_batch]: {e:?}");
                Err(eyre!(e))
            }
        }
    }
}
