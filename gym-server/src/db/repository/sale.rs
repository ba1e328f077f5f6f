//! Sale Repository
//!
//! A sale and its stock decrements commit as one database transaction.
//! The handler pre-checks stock for friendly error messages; the query
//! re-checks inside the transaction and THROWs if any decrement would go
//! negative, so two concurrent sales can never both take the last unit.

use super::{BaseRepository, RepoError, RepoResult};
use crate::db::models::{Sale, SaleItem};
use serde::Serialize;
use surrealdb::Surreal;
use surrealdb::engine::local::Db;
use surrealdb::RecordId;

/// Bind-side line item: `food` must reach the database as a record link,
/// not the `"food:id"` string the API models serialize to.
#[derive(Debug, Serialize)]
struct SaleItemRow {
    food: RecordId,
    name: String,
    quantity: i64,
    price: i64,
}

const INSUFFICIENT_STOCK_MARKER: &str = "insufficient stock";

fn map_sale_error(err: surrealdb::Error) -> RepoError {
    let msg = err.to_string();
    match msg.find(INSUFFICIENT_STOCK_MARKER) {
        Some(pos) => RepoError::InsufficientStock(msg[pos..].to_string()),
        None => RepoError::Database(msg),
    }
}

#[derive(Clone)]
pub struct SaleRepository {
    base: BaseRepository,
}

impl SaleRepository {
    pub fn new(db: Surreal<Db>) -> Self {
        Self {
            base: BaseRepository::new(db),
        }
    }

    /// Find all sales, newest first
    pub async fn find_all(&self) -> RepoResult<Vec<Sale>> {
        let sales: Vec<Sale> = self
            .base
            .db()
            .query("SELECT * FROM sale ORDER BY created_at DESC")
            .await?
            .take(0)?;
        Ok(sales)
    }

    /// Persist a sale and decrement stock for every line, all-or-nothing
    pub async fn create(&self, items: Vec<SaleItem>, total: i64, now: i64) -> RepoResult<Sale> {
        let rows: Vec<SaleItemRow> = items
            .into_iter()
            .map(|item| SaleItemRow {
                food: item.food,
                name: item.name,
                quantity: item.quantity,
                price: item.price,
            })
            .collect();

        let result = self
            .base
            .db()
            .query(
                r#"
                BEGIN TRANSACTION;
                FOR $line IN $items {
                    LET $updated = (UPDATE ONLY $line.food SET stock -= $line.quantity RETURN AFTER);
                    IF $updated.stock < 0 {
                        THROW "insufficient stock for " + $updated.name;
                    };
                };
                LET $s = (CREATE ONLY sale CONTENT {
                    items: $items,
                    total: $total,
                    created_at: $now
                });
                RETURN $s;
                COMMIT TRANSACTION;
                "#,
            )
            .bind(("items", rows))
            .bind(("total", total))
            .bind(("now", now))
            .await
            .map_err(map_sale_error)?;

        let mut result = result.check().map_err(map_sale_error)?;
        let last = result.num_statements() - 1;
        let sale: Option<Sale> = result.take(last)?;
        sale.ok_or_else(|| RepoError::Database("Failed to create sale".to_string()))
    }
}
