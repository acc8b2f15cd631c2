use alloy::{
    hex,
    primitives::{Address, BlockNumber},
    rpc::types::Log,
};
use eyre::{Result, eyre};

pub fn bytes_to_hex(bytes: &[u8]) -> String {
    format!("0x{}", hex::encode(bytes))
}

/// Lower-case, `0x`-prefixed form used for every stored address and lookup key.
pub fn address_to_string(address: &Address) -> String {
    bytes_to_hex(address.as_slice())
}

/// Parses a user or config supplied address (any checksum casing) into its stored form.
pub fn normalize_address(input: &str) -> Result<String> {
    let address: Address =
        input.trim().parse().map_err(|e| eyre!("Invalid address `{input}`: {e}"))?;
    Ok(address_to_string(&address))
}

pub fn to_sql_integer(value: u64) -> Result<i64> {
    i64::try_from(value).map_err(|_| eyre!("value {value} does not fit into an INTEGER column"))
}

pub fn log_block_number(log: &Log) -> Result<BlockNumber> {
    log.block_number.ok_or_else(|| eyre!("missing block_number"))
}

pub fn log_transaction_hash(log: &Log) -> Result<String> {
    let tx_hash = log.transaction_hash.ok_or_else(|| eyre!("missing transaction_hash"))?;
    Ok(bytes_to_hex(tx_hash.as_slice()))
}

pub fn log_index(log: &Log) -> Result<i64> {
    to_sql_integer(log.log_index.ok_or_else(|| eyre!("missing log_index"))?)
}
