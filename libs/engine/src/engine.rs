use crate::args::Args;
use crate::checkpointer::Checkpointer;
use crate::ingestor::Ingestor;
use crate::source::handle::Source;
use crate::syncer::Syncer;
use futures_util::FutureExt;
use std::panic::AssertUnwindSafe;
use std::sync::Arc;
use std::time::Duration;
use store::client::Client;
use store::cursor::store::Store as CursorStore;
use sync::poller::Poller;
use tokio::sync::broadcast;
use tokio::task::JoinHandle;

pub struct Engine {
    shutdown_tx: broadcast::Sender<()>,
    poller_handle: JoinHandle<()>,
}

impl Engine {
    pub fn start(args: &Args, source: Arc<dyn Source>, client: &Client) -> Engine {
        let ingestor = Ingestor::from_client(client);
        let checkpointer = Checkpointer::new(CursorStore::new(client.clone()));
        let syncer = Arc::new(Syncer::new(args, source, ingestor, checkpointer));

        tracing::info!(
            "Sync starting from {:?}, polling every {:?}",
            args.start_block,
            args.poll_interval
        );

        Self::spawn(syncer, args.poll_interval)
    }

    pub fn spawn(syncer: Arc<Syncer>, poll_interval: Duration) -> Engine {
        let (shutdown_tx, _) = broadcast::channel::<()>(1);

        let poller_handle = Poller::spawn(poll_interval, shutdown_tx.clone(), move || {
            let syncer_for_poller = Arc::clone(&syncer);
            async move {
                // No failure, not even a panic, may stop the loop.
                match AssertUnwindSafe(syncer_for_poller.run_cycle()).catch_unwind().await {
                    Ok(Ok(cycle)) => tracing::debug!("Sync cycle done: {cycle:?}"),
                    Ok(Err(e)) => {
                        tracing::error!("Sync cycle failed, cursor left untouched: {e:?}")
                    }
                    Err(_) => tracing::error!("Sync cycle panicked, cursor left untouched"),
                }
            }
        });

        Self { shutdown_tx, poller_handle }
    }

    // Stop scheduling cycles and wait for the one in flight to finish
    pub async fn shutdown(self) {
        let _ = self.shutdown_tx.send(());
        let _ = self.poller_handle.await;
    }
}
