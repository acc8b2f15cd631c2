use eyre::{Result, eyre};
use store::claim::{model::NewClaim, store::Store};

use crate::sink::handle::Sink;

pub struct ClaimSink {
    pub store: Store,
}

#[async_trait::async_trait]
impl Sink for ClaimSink {
    type Item = NewClaim;

    async fn process_batch(&self, claims: &[NewClaim]) -> Result<u64> {
        match self.store.insert_claims_batch(claims).await {
            Ok(inserted) => {
                let nbr_of_rows = claims.len();
                tracing::info!("Processed claims batch: {inserted} new of {nbr_of_rows:?}");
                Ok(inserted)
            }
            Err(e) => {
                tracing::error!("Sink failed on [insert_claims_batch]: {e:?}");
                Err(eyre!(e))
            }
        }
    }
}
