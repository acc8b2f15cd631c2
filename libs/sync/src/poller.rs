use std::{future::Future, pin::Pin, sync::Arc, time::Duration};
use tokio::sync::broadcast;
use tokio::time::MissedTickBehavior;

pub type PollerCallback =
    dyn Fn() -> Pin<Box<dyn Future<Output = ()> + Send>> + Send + Sync + 'static;

/// Runs a callback on a fixed interval, one invocation at a time.
///
/// The callback is awaited inside the loop, so a slow invocation delays the
/// next one instead of overlapping it; ticks missed in the meantime are
/// dropped. A shutdown signal stops new invocations but never interrupts the
/// one in flight.
pub struct Poller {
    poller_callback: Arc<PollerCallback>,
    interval: Duration,
    shutdown_rx: broadcast::Receiver<()>,
}

impl Poller {
    pub fn new(
        poller_callback: Arc<PollerCallback>,
        interval: Duration,
        shutdown_tx: broadcast::Sender<()>,
    ) -> Self {
        // Subscribe before the task is spawned so an early shutdown is not missed
        let shutdown_rx = shutdown_tx.subscribe();
        Self { poller_callback, interval, shutdown_rx }
    }

    pub fn spawn<F, Fut>(
        interval: Duration,
        shutdown_tx: broadcast::Sender<()>,
        poller_callback_factory: F,
    ) -> tokio::task::JoinHandle<()>
    where
        F: Fn() -> Fut + Send + Sync + 'static,
        Fut: Future<Output = ()> + Send + 'static,
    {
        let poller_callback: Arc<PollerCallback> =
            Arc::new(move || Box::pin(poller_callback_factory()));

        let mut poller = Poller::new(poller_callback, interval, shutdown_tx);

        tokio::spawn(async move { poller.run().await })
    }

    pub async fn run(&mut self) {
        let mut ticker = tokio::time::interval(self.interval);
        ticker.set_missed_tick_behavior(MissedTickBehavior::Skip);

        loop {
            tokio::select! {
                biased;
                _ = self.shutdown_rx.recv() => {
                    tracing::info!("Poller received shutdown signal");
                    break
                }
                _ = ticker.tick() => {
                    // The first tick completes immediately
                    let callback = Arc::clone(&self.poller_callback);
                    callback().await;
                }
            }
        }
    }
}
