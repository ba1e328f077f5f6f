//! Sale Model
//!
//! POS transaction. Line items snapshot the food's name and unit price at
//! sale time — the same denormalization as the billing ledger — so a sale
//! stays intact when the food item is later repriced or deleted.

use super::serde_helpers;
use serde::{Deserialize, Serialize};
use surrealdb::RecordId;

/// One line of a sale
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SaleItem {
    #[serde(with = "serde_helpers::record_id")]
    pub food: RecordId,
    pub name: String,
    pub quantity: i64,
    pub price: i64,
}

/// Completed sale, append-only
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Sale {
    #[serde(
        default,
        with = "serde_helpers::option_record_id",
        skip_serializing_if = "Option::is_none"
    )]
    pub id: Option<RecordId>,
    pub items: Vec<SaleItem>,
    pub total: i64,
    pub created_at: i64,
}

/// One requested line of a new sale
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SaleLineCreate {
    pub food_id: String,
    pub quantity: i64,
}

/// Create sale payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SaleCreate {
    pub items: Vec<SaleLineCreate>,
}
