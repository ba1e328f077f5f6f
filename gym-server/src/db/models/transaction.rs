//! Transaction Model
//!
//! Append-only billing ledger row. `member_name` and `plan_name` are
//! snapshots taken at write time so the ledger stays readable after the
//! member or plan changes. Rows are never updated or deleted.

use super::serde_helpers;
use serde::{Deserialize, Serialize};
use surrealdb::RecordId;

/// Billing event: one row per registration or renewal
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Transaction {
    #[serde(
        default,
        with = "serde_helpers::option_record_id",
        skip_serializing_if = "Option::is_none"
    )]
    pub id: Option<RecordId>,
    #[serde(with = "serde_helpers::record_id")]
    pub member: RecordId,
    pub member_name: String,
    pub plan_name: String,
    pub amount: i64,
    pub transaction_date: i64,
}
