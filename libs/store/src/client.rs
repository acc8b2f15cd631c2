use eyre::{Result, bail};
use sqlx::{
    SqlitePool,
    sqlite::{SqliteConnectOptions, SqliteJournalMode, SqlitePoolOptions},
};
use std::str::FromStr;

#[derive(Clone)]
pub struct Client {
    pool: SqlitePool,
}

impl Client {
    pub async fn new(database_url: &str) -> Result<Self> {
        let options = SqliteConnectOptions::from_str(database_url)?
            .create_if_missing(true)
            // readers never block on the single writer
            .journal_mode(SqliteJournalMode::Wal);

        // Every connection to `sqlite::memory:` opens its own database,
        // so an in-memory store must live on exactly one connection.
        let in_memory = database_url.contains(":memory:");
        let pool = SqlitePoolOptions::new()
            .max_connections(if in_memory { 1 } else { 5 })
            .idle_timeout(None)
            .max_lifetime(None)
            .connect_with(options)
            .await?;

        Ok(Self { pool })
    }

    pub async fn init(database_url: &str) -> Result<Self> {
        let client = Client::new(database_url).await?;
        client.create_tables().await?;

        Ok(client)
    }

    /// Creates missing tables, then rejects tables left by an older layout.
    pub async fn create_tables(&self) -> Result<()> {
        sqlx::raw_sql(include_str!("../resources/create_tables.sql")).execute(self.pool()).await?;

        // `IF NOT EXISTS` keeps an existing table as it is
        for table in ["claims", "withdrawals"] {
            let (columns,): (i64,) = sqlx::query_as(
                "SELECT COUNT(*) FROM pragma_table_info(?) WHERE name = 'log_index'",
            )
            .bind(table)
            .fetch_one(self.pool())
            .await?;
            if columns == 0 {
                bail!(
                    "table `{table}` has no `log_index` column; it was created by an \
                     incompatible indexer, use a fresh database file"
                );
            }
        }

        Ok(())
    }

    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }
}
