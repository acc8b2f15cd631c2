use std::num::NonZeroU64;
use std::time::Duration;

use alloy::primitives::Address;

use crate::state::logic::StartBlock;

#[derive(Debug, Clone)]
pub struct Args {
    /// Only `BountyCreated` logs are scoped to the factory; claims and
    /// withdrawals come from its clones.
    pub factory_address: Address,
    pub start_block: StartBlock,
    pub poll_interval: Duration,
    pub max_block_range: NonZeroU64,
}
