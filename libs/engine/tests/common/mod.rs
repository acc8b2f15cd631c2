#![allow(dead_code)]

use std::num::NonZeroU64;
use std::sync::Mutex;
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Duration;

use alloy::{
    primitives::{Address, B256, BlockNumber, LogData, U256, keccak256},
    rpc::types::Log,
    sol_types::SolEvent,
};
use chain::events::{BountyClaimed, BountyCreated, BountyWithdrawn};
use engine::{
    args::Args,
    source::{
        filter::{ChunkFilter, EventKind},
        handle::Source,
    },
    state::logic::StartBlock,
};
use eyre::{Result, bail};

pub fn factory() -> Address {
    Address::repeat_byte(0xFA)
}

/// In-memory chain: a fixed set of logs and a movable head.
#[derive(Default)]
pub struct FakeSource {
    height: AtomicU64,
    logs: Mutex<Vec<Log>>,
    fail_once_on: Mutex<Option<EventKind>>,
    panic_once_on: Mutex<Option<EventKind>>,
    height_delay: Mutex<Option<Duration>>,
    calls: Mutex<Vec<ChunkFilter>>,
}

impl FakeSource {
    pub fn new(height: BlockNumber, logs: Vec<Log>) -> Self {
        let source = Self::default();
        source.set_height(height);
        *source.logs.lock().unwrap() = logs;
        source
    }

    pub fn set_height(&self, height: BlockNumber) {
        self.height.store(height, Ordering::SeqCst);
    }

    pub fn push_log(&self, log: Log) {
        self.logs.lock().unwrap().push(log);
    }

    /// The next `chunk` call for `kind` fails like a provider outage.
    pub fn fail_once_on(&self, kind: EventKind) {
        *self.fail_once_on.lock().unwrap() = Some(kind);
    }

    /// The next `chunk` call for `kind` panics.
    pub fn panic_once_on(&self, kind: EventKind) {
        *self.panic_once_on.lock().unwrap() = Some(kind);
    }

    pub fn delay_height(&self, delay: Duration) {
        *self.height_delay.lock().unwrap() = Some(delay);
    }

    pub fn calls(&self) -> Vec<ChunkFilter> {
        self.calls.lock().unwrap().clone()
    }

    pub fn clear_calls(&self) {
        self.calls.lock().unwrap().clear();
    }
}

#[async_trait::async_trait]
impl Source for FakeSource {
    async fn latest_block_number(&self) -> Result<BlockNumber> {
        let delay = *self.height_delay.lock().unwrap();
        if let Some(delay) = delay {
            tokio::time::sleep(delay).await;
        }
        Ok(self.height.load(Ordering::SeqCst))
    }

    async fn chunk(&self, filter: ChunkFilter) -> Result<Vec<Log>> {
        self.calls.lock().unwrap().push(filter.clone());

        let failing = self.fail_once_on.lock().unwrap().take_if(|kind| *kind == filter.event);
        if failing.is_some() {
            bail!("provider unavailable while fetching {}", filter.event);
        }

        let panicking = self.panic_once_on.lock().unwrap().take_if(|kind| *kind == filter.event);
        if panicking.is_some() {
            panic!("malformed provider response while fetching {}", filter.event);
        }

        let signature_hash = filter.event.signature_hash();
        let mut logs: Vec<Log> = self
            .logs
            .lock()
            .unwrap()
            .iter()
            .filter(|log| log.topics().first() == Some(&signature_hash))
            .filter(|log| filter.address.is_none_or(|address| log.address() == address))
            .filter(|log| {
                let block_number = log.block_number.unwrap_or_default();
                filter.from_block_number <= block_number && block_number <= filter.to_block_number
            })
            .cloned()
            .collect();
        logs.sort_by_key(|log| (log.block_number, log.log_index));

        Ok(logs)
    }
}

pub fn args(start_block: StartBlock, max_block_range: u64) -> Args {
    Args {
        factory_address: factory(),
        start_block,
        poll_interval: Duration::from_millis(20),
        max_block_range: NonZeroU64::new(max_block_range).unwrap(),
    }
}

pub fn rpc_log(address: Address, data: LogData, block_number: u64, log_index: u64) -> Log {
    Log {
        inner: alloy::primitives::Log { address, data },
        block_number: Some(block_number),
        transaction_hash: Some(keccak256(format!("{block_number}-{log_index}"))),
        log_index: Some(log_index),
        ..Default::default()
    }
}

pub fn created_log(bounty: Address, block_number: u64, log_index: u64) -> Log {
    created_log_with_deadline(bounty, 1_900_000_000, block_number, log_index)
}

pub fn created_log_with_deadline(
    bounty: Address,
    deadline: u64,
    block_number: u64,
    log_index: u64,
) -> Log {
    let event = BountyCreated {
        bountyAddress: bounty,
        creator: Address::repeat_byte(0xC1),
        titleHash: B256::repeat_byte(0x7E),
        proofType: 0,
        rewardAmount: U256::from(10).pow(U256::from(18)),
        deadline,
    };
    rpc_log(factory(), event.encode_log_data(), block_number, log_index)
}

pub fn claimed_log(bounty: Address, executor: Address, block_number: u64, log_index: u64) -> Log {
    let event = BountyClaimed { bountyAddress: bounty, executor, payout: U256::from(500) };
    rpc_log(bounty, event.encode_log_data(), block_number, log_index)
}

pub fn withdrawn_log(bounty: Address, block_number: u64, log_index: u64) -> Log {
    let event = BountyWithdrawn {
        bountyAddress: bounty,
        creator: Address::repeat_byte(0xC1),
        amount: U256::from(250),
    };
    rpc_log(bounty, event.encode_log_data(), block_number, log_index)
}
