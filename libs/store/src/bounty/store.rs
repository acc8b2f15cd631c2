use crate::bounty::model::{Bounty, NewBounty};
use crate::client::Client;
use eyre::Result;
use sqlx::{Error, Executor, Sqlite};

#[derive(Clone)]
pub struct Store {
    client: Client,
}

// The id is the next value of the table's own sequence, read inside the same
// statement that inserts, so it is re-evaluated for every created event.
const INSERT_BOUNTY: &str = r#"
    INSERT OR IGNORE INTO bounties (
        id, address, creator, title_hash, proof_type,
        reward_amount, deadline, block_number, tx_hash
    )
    SELECT COALESCE(MAX(id) + 1, 0), ?, ?, ?, ?, ?, ?, ?, ?
    FROM bounties
    "#;

async fn insert<'e, E>(executor: E, bounty: &NewBounty) -> Result<u64, Error>
where
    E: Executor<'e, Database = Sqlite>,
{
    let result = sqlx::query(INSERT_BOUNTY)
        .bind(&bounty.address)
        .bind(&bounty.creator)
        .bind(&bounty.title_hash)
        .bind(bounty.proof_type)
        .bind(&bounty.reward_amount)
        .bind(bounty.deadline)
        .bind(bounty.block_number)
        .bind(&bounty.tx_hash)
        .execute(executor)
        .await?;
    Ok(result.rows_affected())
}

impl Store {
    pub fn new(client: Client) -> Self {
        Self { client }
    }

    // ---------------------------
    // BOUNTIES
    // ---------------------------

    /// Returns `false` when a bounty with the same address already exists.
    pub async fn insert_bounty(&self, bounty: &NewBounty) -> Result<bool, Error> {
        Ok(insert(self.client.pool(), bounty).await? > 0)
    }

    /// Inserts all bounties in one transaction, in order. Returns the number of new rows.
    pub async fn insert_bounties_batch(&self, bounties: &[NewBounty]) -> Result<u64, Error> {
        let mut tx = self.client.pool().begin().await?;
        let mut inserted = 0;
        for bounty in bounties {
            inserted += insert(&mut *tx, bounty).await?;
        }
        tx.commit().await?;
        Ok(inserted)
    }

    pub async fn get_bounty_by_address(&self, address: &str) -> Result<Option<Bounty>, Error> {
        let query = r#"
            SELECT
                id, address, creator, title_hash, proof_type,
                reward_amount, deadline, block_number, tx_hash, created_at
            FROM bounties
            WHERE address = ?
            "#;
        let bounty =
            sqlx::query_as(query).bind(address).fetch_optional(self.client.pool()).await?;

        Ok(bounty)
    }

    pub async fn get_bounties(&self) -> Result<Vec<Bounty>, Error> {
        let query = r#"
            SELECT
                id, address, creator, title_hash, proof_type,
                reward_amount, deadline, block_number, tx_hash, created_at
            FROM bounties
            ORDER BY id ASC
            "#;
        let bounties = sqlx::query_as(query).fetch_all(self.client.pool()).await?;

        Ok(bounties)
    }

    pub async fn count_bounties(&self) -> Result<i64, Error> {
        let (count,): (i64,) =
            sqlx::query_as("SELECT COUNT(*) FROM bounties").fetch_one(self.client.pool()).await?;
        Ok(count)
    }
}
