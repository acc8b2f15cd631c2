use crate::{claim::model::NewClaim, utils};
use alloy::rpc::types::Log;
use chain::events::BountyClaimed;
use eyre::Result;
use std::convert::TryFrom;

impl TryFrom<&Log> for NewClaim {
    type Error = eyre::Report;

    fn try_from(log: &Log) -> Result<Self> {
        let event = log.log_decode::<BountyClaimed>()?.inner.data;

        Ok(Self {
            bounty_address: utils::address_to_string(&event.bountyAddress),
            executor: utils::address_to_string(&event.executor),
            payout: event.payout.to_string(),
            block_number: utils::to_sql_integer(utils::log_block_number(log)?)?,
            tx_hash: utils::log_transaction_hash(log)?,
            log_index: utils::log_index(log)?,
        })
    }
}
