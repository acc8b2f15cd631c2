use crate::claim::model::Claim;
use crate::client::Client;
use crate::query::model::BountySummary;
use eyre::Result;
use sqlx::Error;

/// Read-only projections served to API and CLI consumers.
#[derive(Clone)]
pub struct Store {
    client: Client,
}

impl Store {
    pub fn new(client: Client) -> Self {
        Self { client }
    }

    pub async fn list_bounties(&self) -> Result<Vec<BountySummary>, Error> {
        let query = r#"
            SELECT b.*,
                (SELECT COUNT(*) FROM claims c WHERE c.bounty_address = b.address) AS winners_count
            FROM bounties b
            ORDER BY b.id DESC
            "#;
        let bounties = sqlx::query_as(query).fetch_all(self.client.pool()).await?;

        Ok(bounties)
    }

    pub async fn get_bounty(&self, id: i64) -> Result<Option<BountySummary>, Error> {
        let query = r#"
            SELECT b.*,
                (SELECT COUNT(*) FROM claims c WHERE c.bounty_address = b.address) AS winners_count
            FROM bounties b
            WHERE b.id = ?
            "#;
        let bounty = sqlx::query_as(query).bind(id).fetch_optional(self.client.pool()).await?;

        Ok(bounty)
    }

    /// `None` when no bounty has the given id.
    pub async fn get_claims_for_bounty(&self, id: i64) -> Result<Option<Vec<Claim>>, Error> {
        let address: Option<(String,)> = sqlx::query_as("SELECT address FROM bounties WHERE id = ?")
            .bind(id)
            .fetch_optional(self.client.pool())
            .await?;
        let Some((address,)) = address else {
            return Ok(None);
        };

        let query = r#"
            SELECT
                id, bounty_address, executor, payout,
                block_number, tx_hash, log_index, created_at
            FROM claims
            WHERE bounty_address = ?
            ORDER BY created_at DESC, id DESC
            "#;
        let claims = sqlx::query_as(query).bind(address).fetch_all(self.client.pool()).await?;

        Ok(Some(claims))
    }

    /// `wallet` must already be normalized (see `utils::normalize_address`).
    pub async fn get_claims_for_wallet(&self, wallet: &str) -> Result<Vec<Claim>, Error> {
        let query = r#"
            SELECT
                id, bounty_address, executor, payout,
                block_number, tx_hash, log_index, created_at
            FROM claims
            WHERE executor = ?
            ORDER BY created_at DESC, id DESC
            "#;
        let claims = sqlx::query_as(query).bind(wallet).fetch_all(self.client.pool()).await?;

        Ok(claims)
    }
}
