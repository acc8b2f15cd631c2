use eyre::Result;

#[async_trait::async_trait]
pub trait Sink: Send + Sync {
    type Item;

    /// Idempotently applies `elements` in order. Returns how many were new.
    async fn process_batch(&self, elements: &[Self::Item]) -> Result<u64>;
}
