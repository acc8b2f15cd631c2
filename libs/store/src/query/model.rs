use crate::bounty::model::Bounty;
use sqlx::FromRow;

/// A bounty together with the number of executors that claimed it.
#[derive(Debug, Clone, FromRow, PartialEq)]
pub struct BountySummary {
    #[sqlx(flatten)]
    pub bounty: Bounty,
    pub winners_count: i64,
}
