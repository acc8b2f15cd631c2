use std::fmt;

use alloy::{
    primitives::{Address, B256, BlockNumber},
    sol_types::SolEvent,
};
use chain::events::{BountyClaimed, BountyCreated, BountyWithdrawn};

/// The event kinds the engine ingests, in the order every cycle applies them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EventKind {
    Created,
    Claimed,
    Withdrawn,
}

impl EventKind {
    pub const ALL: [EventKind; 3] = [EventKind::Created, EventKind::Claimed, EventKind::Withdrawn];

    pub fn signature(&self) -> &'static str {
        match self {
            EventKind::Created => BountyCreated::SIGNATURE,
            EventKind::Claimed => BountyClaimed::SIGNATURE,
            EventKind::Withdrawn => BountyWithdrawn::SIGNATURE,
        }
    }

    /// topic0 of the matching logs
    pub fn signature_hash(&self) -> B256 {
        match self {
            EventKind::Created => BountyCreated::SIGNATURE_HASH,
            EventKind::Claimed => BountyClaimed::SIGNATURE_HASH,
            EventKind::Withdrawn => BountyWithdrawn::SIGNATURE_HASH,
        }
    }
}

impl fmt::Display for EventKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            EventKind::Created => "BountyCreated",
            EventKind::Claimed => "BountyClaimed",
            EventKind::Withdrawn => "BountyWithdrawn",
        };
        f.write_str(name)
    }
}

/// One provider query: a single event kind over an inclusive block window.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChunkFilter {
    pub address: Option<Address>,
    pub event: EventKind,
    pub from_block_number: BlockNumber,
    pub to_block_number: BlockNumber,
}
