use eyre::{Result, eyre};
use store::withdrawal::{model::NewWithdrawal, store::Store};

use crate::sink::handle::Sink;

pub struct WithdrawalSink {
    pub store: Store,
}

#[async_trait::async_trait]
impl Sink for WithdrawalSink {
    type Item = NewWithdrawal;

    async fn process_batch(&self, withdrawals: &[NewWithdrawal]) -> Result<u64> {
        match self.store.insert_withdrawals_batch(withdrawals).await {
            Ok(inserted) => {
                let nbr_of_rows = withdrawals.len();
                tracing::info!("Processed withdrawals batch: {inserted} new of {nbr_of_rows:?}");
                Ok(inserted)
            }
            Err(e) => {
                tracing::error!("Sink failed on [insert_withdrawals_batch]: {e:?}");
                Err(eyre!(e))
            }
        }
    }
}
