use crate::{utils, withdrawal::model::NewWithdrawal};
use alloy::rpc::types::Log;
use chain::events::BountyWithdrawn;
use eyre::Result;
use std::convert::TryFrom;

impl TryFrom<&Log> for NewWithdrawal {
    type Error = eyre::Report;

    fn try_from(log: &Log) -> Result<Self> {
        let event = log.log_decode::<BountyWithdrawn>()?.inner.data;

        Ok(Self {
            bounty_address: utils::address_to_string(&event.bountyAddress),
            creator: utils::address_to_string(&event.creator),
            amount: event.amount.to_string(),
            block_number: utils::to_sql_integer(utils::log_block_number(log)?)?,
            tx_hash: utils::log_transaction_hash(log)?,
            log_index: utils::log_index(log)?,
        })
    }
}
