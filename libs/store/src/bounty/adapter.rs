use crate::{bounty::model::NewBounty, utils};
use alloy::rpc::types::Log;
use chain::events::BountyCreated;
use eyre::Result;
use std::convert::TryFrom;

impl TryFrom<&Log> for NewBounty {
    type Error = eyre::Report;

    fn try_from(log: &Log) -> Result<Self> {
        let event = log.log_decode::<BountyCreated>()?.inner.data;

        Ok(Self {
            address: utils::address_to_string(&event.bountyAddress),
            creator: utils::address_to_string(&event.creator),
            title_hash: utils::bytes_to_hex(event.titleHash.as_slice()),
            proof_type: i64::from(event.proofType),
            reward_amount: event.rewardAmount.to_string(),
            // INTEGER is signed: a deadline past i64::MAX is stored as i64::MAX
            deadline: i64::try_from(event.deadline).unwrap_or(i64::MAX),
            block_number: utils::to_sql_integer(utils::log_block_number(log)?)?,
            tx_hash: utils::log_transaction_hash(log)?,
        })
    }
}
