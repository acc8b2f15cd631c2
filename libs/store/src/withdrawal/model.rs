use sqlx::FromRow;

#[derive(Debug, Clone, PartialEq)]
pub struct NewWithdrawal {
    pub bounty_address: String,
    pub creator: String,
    pub amount: String,
    pub block_number: i64,
    pub tx_hash: String,
    pub log_index: i64,
}

#[derive(Debug, Clone, FromRow, PartialEq)]
pub struct Withdrawal {
    pub id: i64,
    pub bounty_address: String,
    pub creator: String,
    pub amount: String,
    pub block_number: i64,
    pub tx_hash: String,
    pub log_index: i64,
    pub created_at: String,
}
