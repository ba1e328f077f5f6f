//! Transaction Repository
//!
//! Read side of the billing ledger. Rows are only ever written inside the
//! member repository's register/renew transactions — there is no update or
//! delete here on purpose.

use super::{BaseRepository, RepoResult};
use crate::db::models::Transaction;
use surrealdb::Surreal;
use surrealdb::engine::local::Db;

#[derive(Clone)]
pub struct TransactionRepository {
    base: BaseRepository,
}

impl TransactionRepository {
    pub fn new(db: Surreal<Db>) -> Self {
        Self {
            base: BaseRepository::new(db),
        }
    }

    /// Full ledger, most recent first
    pub async fn find_all(&self) -> RepoResult<Vec<Transaction>> {
        let transactions: Vec<Transaction> = self
            .base
            .db()
            .query("SELECT * FROM transaction ORDER BY transaction_date DESC")
            .await?
            .take(0)?;
        Ok(transactions)
    }

    /// Rows with `transaction_date >= start`, unordered (aggregation input)
    pub async fn find_since(&self, start: i64) -> RepoResult<Vec<Transaction>> {
        let transactions: Vec<Transaction> = self
            .base
            .db()
            .query("SELECT * FROM transaction WHERE transaction_date >= $start")
            .bind(("start", start))
            .await?
            .take(0)?;
        Ok(transactions)
    }
}
