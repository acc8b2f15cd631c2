use crate::client::Client;
use alloy::primitives::BlockNumber;
use eyre::Result;
use sqlx::Error;

pub const LAST_BLOCK_KEY: &str = "last_block";

/// The sync cursor: the highest block whose whole range has been ingested.
#[derive(Clone)]
pub struct Store {
    client: Client,
}

impl Store {
    pub fn new(client: Client) -> Self {
        Self { client }
    }

    // ---------------------------
    // CURSOR
    // ---------------------------

    pub async fn get_last_block(&self) -> Result<Option<BlockNumber>, Error> {
        let query = r#"
            SELECT value
            FROM sync_state
            WHERE key = ?
            "#;
        let row: Option<(String,)> =
            sqlx::query_as(query).bind(LAST_BLOCK_KEY).fetch_optional(self.client.pool()).await?;

        row.map(|(value,)| value.parse::<BlockNumber>().map_err(|e| Error::Decode(Box::new(e))))
            .transpose()
    }

    /// Stores `block_number` unless the cursor is already at or past it.
    /// Returns whether the cursor moved.
    pub async fn set_last_block(&self, block_number: BlockNumber) -> Result<bool, Error> {
        let query = r#"
            INSERT INTO sync_state (key, value)
            VALUES (?, ?)
            ON CONFLICT(key) DO UPDATE SET value = excluded.value
            WHERE CAST(excluded.value AS INTEGER) > CAST(sync_state.value AS INTEGER)
            "#;
        let result = sqlx::query(query)
            .bind(LAST_BLOCK_KEY)
            .bind(block_number.to_string())
            .execute(self.client.pool())
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
