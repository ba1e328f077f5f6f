//! Check-in Model

use super::serde_helpers;
use serde::{Deserialize, Serialize};
use surrealdb::RecordId;

/// Attendance event, append-only
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Checkin {
    #[serde(
        default,
        with = "serde_helpers::option_record_id",
        skip_serializing_if = "Option::is_none"
    )]
    pub id: Option<RecordId>,
    #[serde(with = "serde_helpers::record_id")]
    pub member: RecordId,
    pub member_name: String,
    pub check_in_time: i64,
}

/// Check-in payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CheckinCreate {
    pub member_id: String,
}
