//! Membership Plan Model

use super::serde_helpers;
use serde::{Deserialize, Serialize};
use surrealdb::RecordId;

/// Membership plan entity
///
/// `duration_months == 0` marks a single-visit pass whose window is the
/// remainder of the purchase day. Prices are whole currency units.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Plan {
    #[serde(
        default,
        with = "serde_helpers::option_record_id",
        skip_serializing_if = "Option::is_none"
    )]
    pub id: Option<RecordId>,
    pub name: String,
    pub duration_months: i64,
    pub price: i64,
}

/// Create plan payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlanCreate {
    pub name: String,
    pub duration_months: i64,
    pub price: i64,
}

/// Update plan payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlanUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub duration_months: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub price: Option<i64>,
}
