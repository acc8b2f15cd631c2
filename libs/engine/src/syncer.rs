use crate::args::Args;
use crate::checkpointer::Checkpointer;
use crate::fetcher;
use crate::ingestor::Ingestor;
use crate::source::filter::EventKind;
use crate::source::handle::Source;
use crate::state::logic::State;
use alloy::primitives::{Address, BlockNumber};
use eyre::{Result, WrapErr};
use std::num::NonZeroU64;
use std::sync::Arc;
use tokio::sync::Mutex;

/// What a single call to [`Syncer::run_cycle`] did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Cycle {
    /// Another cycle was in flight; nothing was read or written.
    Busy,
    /// The chain has not advanced past the cursor.
    UpToDate { height: BlockNumber },
    /// `[from_block_number, to_block_number]` was ingested and checkpointed.
    Synced {
        from_block_number: BlockNumber,
        to_block_number: BlockNumber,
        fetched: [usize; 3],
        inserted: [u64; 3],
    },
}

pub struct Syncer {
    factory_address: Address,
    max_block_range: NonZeroU64,
    source: Arc<dyn Source>,
    ingestor: Ingestor,
    checkpointer: Checkpointer,
    // Held for the whole cycle: it is both the start-block state and the
    // guard that keeps cycles from overlapping.
    state: Mutex<State>,
}

impl Syncer {
    pub fn new(
        args: &Args,
        source: Arc<dyn Source>,
        ingestor: Ingestor,
        checkpointer: Checkpointer,
    ) -> Self {
        Self {
            factory_address: args.factory_address,
            max_block_range: args.max_block_range,
            source,
            ingestor,
            checkpointer,
            state: Mutex::new(State::new(args.start_block)),
        }
    }

    fn address_filter(&self, kind: EventKind) -> Option<Address> {
        match kind {
            EventKind::Created => Some(self.factory_address),
            EventKind::Claimed | EventKind::Withdrawn => None,
        }
    }

    /// Fetches and applies everything between the cursor and the chain head,
    /// then advances the cursor. On error the cursor is left untouched so the
    /// same range is retried by the next cycle.
    pub async fn run_cycle(&self) -> Result<Cycle> {
        let Ok(mut state) = self.state.try_lock() else {
            tracing::warn!("Previous sync cycle still in flight, skipping tick");
            return Ok(Cycle::Busy);
        };

        let height =
            self.source.latest_block_number().await.wrap_err("Failed to read chain height")?;
        let cursor = self.checkpointer.last_checkpoint().await?;

        let Some((from_block_number, to_block_number)) = state.next_range(cursor, height) else {
            tracing::debug!("Chain height {height:?} not past cursor {cursor:?}");
            return Ok(Cycle::UpToDate { height });
        };

        let mut fetched = [0usize; 3];
        let mut inserted = [0u64; 3];
        for (i, kind) in EventKind::ALL.into_iter().enumerate() {
            let logs = fetcher::fetch_range(
                Arc::clone(&self.source),
                self.address_filter(kind),
                kind,
                from_block_number,
                to_block_number,
                self.max_block_range,
            )
            .await?;

            fetched[i] = logs.len();
            inserted[i] = self
                .ingestor
                .ingest(kind, &logs)
                .await
                .wrap_err_with(|| format!("Failed to ingest {kind} logs"))?;
        }

        self.checkpointer.checkpoint(to_block_number).await?;

        if fetched.iter().any(|n| *n > 0) {
            tracing::info!(
                "Synced blocks [{from_block_number}, {to_block_number}]: {} created, {} claimed, {} withdrawn",
                fetched[0],
                fetched[1],
                fetched[2]
            );
        }

        Ok(Cycle::Synced { from_block_number, to_block_number, fetched, inserted })
    }
}
