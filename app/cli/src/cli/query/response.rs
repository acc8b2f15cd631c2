use serde::Serialize;
use store::{
    bounty::model::ProofType, claim::model::Claim, query::model::BountySummary,
};

#[derive(Serialize)]
pub struct BountyResponse {
    pub id: i64,
    pub address: String,
    pub creator: String,
    pub title_hash: String,
    pub proof_type: i64,
    pub proof_type_name: Option<String>,
    pub reward_amount: String,
    pub deadline: i64,
    pub block_number: i64,
    pub tx_hash: String,
    pub created_at: String,
    pub winners_count: i64,
}

impl From<BountySummary> for BountyResponse {
    fn from(summary: BountySummary) -> Self {
        let b = summary.bounty;
        Self {
            id: b.id,
            proof_type_name: ProofType::try_from(b.proof_type).ok().map(|p| p.to_string()),
            address: b.address,
            creator: b.creator,
            title_hash: b.title_hash,
            proof_type: b.proof_type,
            reward_amount: b.reward_amount,
            deadline: b.deadline,
            block_number: b.block_number,
            tx_hash: b.tx_hash,
            created_at: b.created_at,
            winners_count: summary.winners_count,
        }
    }
}

#[derive(Serialize)]
pub struct ClaimResponse {
    pub id: i64,
    pub bounty_address: String,
    pub executor: String,
    pub payout: String,
    pub block_number: i64,
    pub tx_hash: String,
    pub log_index: i64,
    pub created_at: String,
}

impl From<Claim> for ClaimResponse {
    fn from(c: Claim) -> Self {
        Self {
            id: c.id,
            bounty_address: c.bounty_address,
            executor: c.executor,
            payout: c.payout,
            block_number: c.block_number,
            tx_hash: c.tx_hash,
            log_index: c.log_index,
            created_at: c.created_at,
        }
    }
}

#[derive(Serialize)]
pub struct CursorResponse {
    pub last_block: Option<u64>,
}
