use sqlx::FromRow;
use std::fmt;

/// A `BountyCreated` event ready to be inserted; the `id` is assigned by the store.
#[derive(Debug, Clone, PartialEq)]
pub struct NewBounty {
    pub address: String,
    pub creator: String,
    pub title_hash: String,
    pub proof_type: i64,
    pub reward_amount: String,
    pub deadline: i64,
    pub block_number: i64,
    pub tx_hash: String,
}

#[derive(Debug, Clone, FromRow, PartialEq)]
pub struct Bounty {
    pub id: i64,
    pub address: String,
    pub creator: String,
    pub title_hash: String,
    pub proof_type: i64,
    pub reward_amount: String,
    pub deadline: i64,
    pub block_number: i64,
    pub tx_hash: String,
    pub created_at: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProofType {
    TxEvent,
    StatePredicate,
    EasAttestation,
}

impl TryFrom<i64> for ProofType {
    type Error = i64;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(ProofType::TxEvent),
            1 => Ok(ProofType::StatePredicate),
            2 => Ok(ProofType::EasAttestation),
            other => Err(other),
        }
    }
}

impl fmt::Display for ProofType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ProofType::TxEvent => "TX_EVENT",
            ProofType::StatePredicate => "STATE_PREDICATE",
            ProofType::EasAttestation => "EAS_ATTESTATION",
        };
        f.write_str(name)
    }
}
