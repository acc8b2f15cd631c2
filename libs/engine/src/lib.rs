pub mod args;
pub mod checkpointer;
pub mod engine;
pub mod fetcher;
pub mod ingestor;
pub mod syncer;
pub mod sink {
    pub mod bounty;
    pub mod claim;
    pub mod handle;
    pub mod withdrawal;
}
pub mod source {
    pub mod filter;
    pub mod handle;
    pub mod log;
}
pub mod state {
    pub mod logic;
}
