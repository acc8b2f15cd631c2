use crate::source::filter::{ChunkFilter, EventKind};
use crate::source::handle::Source;
use alloy::primitives::{Address, BlockNumber};
use alloy::rpc::types::Log;
use eyre::{Result, WrapErr};
use futures_util::{StreamExt, TryStreamExt, stream};
use std::num::NonZeroU64;
use std::sync::Arc;

/// Splits `[from_block_number, to_block_number]` into consecutive inclusive
/// windows of at most `width` blocks. Empty when `from > to`.
pub fn windows(
    from_block_number: BlockNumber,
    to_block_number: BlockNumber,
    width: NonZeroU64,
) -> Vec<(BlockNumber, BlockNumber)> {
    let mut windows = Vec::new();
    let mut window_start = from_block_number;

    while window_start <= to_block_number {
        let window_end = window_start.saturating_add(width.get() - 1).min(to_block_number);
        windows.push((window_start, window_end));

        match window_end.checked_add(1) {
            Some(next) => window_start = next,
            None => break,
        }
    }

    windows
}

/// Fetches every `event` log in the inclusive range, one window at a time in
/// ascending order. Fails as a whole if any window fails.
pub async fn fetch_range(
    source: Arc<dyn Source>,
    address: Option<Address>,
    event: EventKind,
    from_block_number: BlockNumber,
    to_block_number: BlockNumber,
    max_block_range: NonZeroU64,
) -> Result<Vec<Log>> {
    let windows = windows(from_block_number, to_block_number, max_block_range);
    let number_of_windows = windows.len();

    let logs: Vec<Log> = stream::iter(windows)
        .then(move |(window_start, window_end)| {
            // each window future owns its handle to the source
            let source = Arc::clone(&source);
            async move {
                tracing::debug!("Fetching {event} logs in [{window_start}, {window_end}]");
                let filter = ChunkFilter {
                    address,
                    event,
                    from_block_number: window_start,
                    to_block_number: window_end,
                };
                source.chunk(filter).await
            }
        })
        .boxed()
        .try_concat()
        .await
        .wrap_err_with(|| {
            format!("Failed to fetch {event} logs in [{from_block_number}, {to_block_number}]")
        })?;

    tracing::debug!(
        "Fetched {} {event} logs in {number_of_windows} windows over [{from_block_number}, {to_block_number}]",
        logs.len()
    );

    Ok(logs)
}
