use crate::cli::query::args::{Entity, Query};
use crate::cli::query::response::{BountyResponse, ClaimResponse, CursorResponse};
use eyre::{Result, eyre};
use serde::Serialize;
use store::client::Client;
use store::utils;

fn print_json<T: Serialize>(response: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(response)?);
    Ok(())
}

pub async fn select(query: &Query) -> Result<()> {
    let client = Client::init(&query.db_url).await?;

    let query_store = store::query::store::Store::new(client.clone());

    match &query.entity {
        Entity::Bounties => {
            let bounties = query_store.list_bounties().await?;
            let response: Vec<BountyResponse> = bounties.into_iter().map(Into::into).collect();
            print_json(&response)
        }
        Entity::Bounty { id } => {
            let bounty =
                query_store.get_bounty(*id).await?.ok_or_else(|| eyre!("Bounty {id} Not Found"))?;
            print_json(&BountyResponse::from(bounty))
        }
        Entity::BountyClaims { id } => {
            let claims = query_store
                .get_claims_for_bounty(*id)
                .await?
                .ok_or_else(|| eyre!("Bounty {id} Not Found"))?;
            let response: Vec<ClaimResponse> = claims.into_iter().map(Into::into).collect();
            print_json(&response)
        }
        Entity::WalletClaims { wallet } => {
            let wallet = utils::normalize_address(wallet)?;
            let claims = query_store.get_claims_for_wallet(&wallet).await?;
            let response: Vec<ClaimResponse> = claims.into_iter().map(Into::into).collect();
            print_json(&response)
        }
        Entity::Cursor => {
            let cursor_store = store::cursor::store::Store::new(client.clone());
            let last_block = cursor_store.get_last_block().await?;
            print_json(&CursorResponse { last_block })
        }
    }
}
