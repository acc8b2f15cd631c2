use crate::claim::model::{Claim, NewClaim};
use crate::client::Client;
use eyre::Result;
use sqlx::{Error, Executor, Sqlite};

#[derive(Clone)]
pub struct Store {
    client: Client,
}

async fn insert<'e, E>(executor: E, claim: &NewClaim) -> Result<u64, Error>
where
    E: Executor<'e, Database = Sqlite>,
{
    let query = r#"
        INSERT OR IGNORE INTO claims (
            bounty_address, executor, payout, block_number, tx_hash, log_index
        )
        VALUES (?, ?, ?, ?, ?, ?)
        "#;
    let result = sqlx::query(query)
        .bind(&claim.bounty_address)
        .bind(&claim.executor)
        .bind(&claim.payout)
        .bind(claim.block_number)
        .bind(&claim.tx_hash)
        .bind(claim.log_index)
        .execute(executor)
        .await?;
    Ok(result.rows_affected())
}

impl Store {
    pub fn new(client: Client) -> Self {
        Self { client }
    }

    // ---------------------------
    // CLAIMS
    // ---------------------------

    /// Returns `false` when the executor already claimed this bounty.
    pub async fn insert_claim(&self, claim: &NewClaim) -> Result<bool, Error> {
        Ok(insert(self.client.pool(), claim).await? > 0)
    }

    pub async fn insert_claims_batch(&self, claims: &[NewClaim]) -> Result<u64, Error> {
        let mut tx = self.client.pool().begin().await?;
        let mut inserted = 0;
        for claim in claims {
            inserted += insert(&mut *tx, claim).await?;
        }
        tx.commit().await?;
        Ok(inserted)
    }

    pub async fn get_claims_by_bounty_address(
        &self,
        bounty_address: &str,
    ) -> Result<Vec<Claim>, Error> {
        let query = r#"
            SELECT
                id, bounty_address, executor, payout,
                block_number, tx_hash, log_index, created_at
            FROM claims
            WHERE bounty_address = ?
            ORDER BY block_number ASC, log_index ASC
            "#;
        let claims =
            sqlx::query_as(query).bind(bounty_address).fetch_all(self.client.pool()).await?;

        Ok(claims)
    }

    pub async fn count_claims(&self) -> Result<i64, Error> {
        let (count,): (i64,) =
            sqlx::query_as("SELECT COUNT(*) FROM claims").fetch_one(self.client.pool()).await?;
        Ok(count)
    }
}
