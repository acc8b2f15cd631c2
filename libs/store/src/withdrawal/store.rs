use crate::client::Client;
use crate::withdrawal::model::{NewWithdrawal, Withdrawal};
use eyre::Result;
use sqlx::{Error, Executor, Sqlite};

#[derive(Clone)]
pub struct Store {
    client: Client,
}

// A bounty may emit several withdrawals; only a replay of the very same log
// (same tx hash and log index) is ignored.
async fn insert<'e, E>(executor: E, withdrawal: &NewWithdrawal) -> Result<u64, Error>
where
    E: Executor<'e, Database = Sqlite>,
{
    let query = r#"
        INSERT OR IGNORE INTO withdrawals (
            bounty_address, creator, amount, block_number, tx_hash, log_index
        )
        VALUES (?, ?, ?, ?, ?, ?)
        "#;
    let result = sqlx::query(query)
        .bind(&withdrawal.bounty_address)
        .bind(&withdrawal.creator)
        .bind(&withdrawal.amount)
        .bind(withdrawal.block_number)
        .bind(&withdrawal.tx_hash)
        .bind(withdrawal.log_index)
        .execute(executor)
        .await?;
    Ok(result.rows_affected())
}

impl Store {
    pub fn new(client: Client) -> Self {
        Self { client }
    }

    // ---------------------------
    // WITHDRAWALS
    // ---------------------------

    pub async fn insert_withdrawal(&self, withdrawal: &NewWithdrawal) -> Result<bool, Error> {
        Ok(insert(self.client.pool(), withdrawal).await? > 0)
    }

    pub async fn insert_withdrawals_batch(
        &self,
        withdrawals: &[NewWithdrawal],
    ) -> Result<u64, Error> {
        let mut tx = self.client.pool().begin().await?;
        let mut inserted = 0;
        for withdrawal in withdrawals {
            inserted += insert(&mut *tx, withdrawal).await?;
        }
        tx.commit().await?;
        Ok(inserted)
    }

    pub async fn get_withdrawals_by_bounty_address(
        &self,
        bounty_address: &str,
    ) -> Result<Vec<Withdrawal>, Error> {
        let query = r#"
            SELECT
                id, bounty_address, creator, amount,
                block_number, tx_hash, log_index, created_at
            FROM withdrawals
            WHERE bounty_address = ?
            ORDER BY block_number ASC, log_index ASC
            "#;
        let withdrawals =
            sqlx::query_as(query).bind(bounty_address).fetch_all(self.client.pool()).await?;

        Ok(withdrawals)
    }

    pub async fn count_withdrawals(&self) -> Result<i64, Error> {
        let (count,): (i64,) = sqlx::query_as("SELECT COUNT(*) FROM withdrawals")
            .fetch_one(self.client.pool())
            .await?;
        Ok(count)
    }
}
