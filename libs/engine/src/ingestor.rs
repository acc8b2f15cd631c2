use crate::sink::{
    bounty::BountySink, claim::ClaimSink, handle::Sink, withdrawal::WithdrawalSink,
};
use crate::source::filter::EventKind;
use alloy::rpc::types::Log;
use eyre::Result;
use std::fmt::Debug;
use std::sync::Arc;
use store::{
    bounty::model::NewBounty, claim::model::NewClaim, client::Client,
    withdrawal::model::NewWithdrawal,
};

/// Maps fetched logs to rows, one sink per event kind.
#[derive(Clone)]
pub struct Ingestor {
    bounties: Arc<dyn Sink<Item = NewBounty>>,
    claims: Arc<dyn Sink<Item = NewClaim>>,
    withdrawals: Arc<dyn Sink<Item = NewWithdrawal>>,
}

impl Ingestor {
    pub fn new(
        bounties: Arc<dyn Sink<Item = NewBounty>>,
        claims: Arc<dyn Sink<Item = NewClaim>>,
        withdrawals: Arc<dyn Sink<Item = NewWithdrawal>>,
    ) -> Self {
        Self { bounties, claims, withdrawals }
    }

    pub fn from_client(client: &Client) -> Self {
        Self::new(
            Arc::new(BountySink { store: store::bounty::store::Store::new(client.clone()) }),
            Arc::new(ClaimSink { store: store::claim::store::Store::new(client.clone()) }),
            Arc::new(WithdrawalSink {
                store: store::withdrawal::store::Store::new(client.clone()),
            }),
        )
    }

    /// Applies the logs of one kind. Returns the number of new rows.
    pub async fn ingest(&self, kind: EventKind, logs: &[Log]) -> Result<u64> {
        match kind {
            EventKind::Created => apply(kind, logs, self.bounties.as_ref()).await,
            EventKind::Claimed => apply(kind, logs, self.claims.as_ref()).await,
            EventKind::Withdrawn => apply(kind, logs, self.withdrawals.as_ref()).await,
        }
    }
}

async fn apply<T>(kind: EventKind, logs: &[Log], sink: &dyn Sink<Item = T>) -> Result<u64>
where
    T: for<'a> TryFrom<&'a Log, Error = eyre::Report> + Debug + Send + Sync,
{
    let mut elements: Vec<T> = Vec::with_capacity(logs.len());
    for log in logs {
        match T::try_from(log) {
            Ok(element) => elements.push(element),
            // Same topic0 but a different layout: not one of ours.
            Err(e) if e.downcast_ref::<alloy::sol_types::Error>().is_some() => {
                tracing::error!(
                    "Skip: Failed to decode {kind} log tx={:?} index={:?} - reason {e:?}",
                    log.transaction_hash,
                    log.log_index
                );
            }
            Err(e) => {
                return Err(e.wrap_err(format!(
                    "Failed to map {kind} log tx={:?} index={:?}",
                    log.transaction_hash, log.log_index
                )));
            }
        }
    }

    if elements.is_empty() {
        return Ok(0);
    }

    sink.process_batch(&elements).await
}
