//! Member Model
//!
//! A member carries exactly one embedded membership value — the *current*
//! window. Past windows survive only as denormalized snapshots on the
//! transaction ledger. Membership status is derived from the clock, never
//! stored.

use super::serde_helpers;
use serde::{Deserialize, Serialize};
use surrealdb::RecordId;

/// Embedded membership value
///
/// `plan_name` and `price` are copies taken when the plan was assigned;
/// editing or deleting the plan later must not rewrite them.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Membership {
    /// Plan reference (may dangle after the plan is deleted)
    #[serde(with = "serde_helpers::record_id")]
    pub plan: RecordId,
    pub plan_name: String,
    pub price: i64,
    pub start_date: i64,
    pub end_date: i64,
}

/// Derived membership status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MembershipStatus {
    Active,
    Expired,
}

impl Membership {
    /// Active iff `now < end_date` — the window is half-open at the end,
    /// so a membership is already expired at the exact end instant.
    pub fn status(&self, now: i64) -> MembershipStatus {
        if now < self.end_date {
            MembershipStatus::Active
        } else {
            MembershipStatus::Expired
        }
    }
}

/// Member entity
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Member {
    #[serde(
        default,
        with = "serde_helpers::option_record_id",
        skip_serializing_if = "Option::is_none"
    )]
    pub id: Option<RecordId>,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    pub phone: String,
    pub join_date: i64,
    pub membership: Membership,
}

impl Member {
    /// Projection with the derived status evaluated at `now`
    pub fn into_view(self, now: i64) -> MemberView {
        let status = self.membership.status(now);
        MemberView {
            id: self.id,
            name: self.name,
            email: self.email,
            phone: self.phone,
            join_date: self.join_date,
            membership: MembershipView {
                membership: self.membership,
                status,
            },
        }
    }
}

/// Membership as serialized to clients: the stored window plus the
/// computed status
#[derive(Debug, Clone, Serialize)]
pub struct MembershipView {
    #[serde(flatten)]
    pub membership: Membership,
    pub status: MembershipStatus,
}

/// Member as serialized to clients
#[derive(Debug, Clone, Serialize)]
pub struct MemberView {
    #[serde(
        with = "serde_helpers::option_record_id",
        skip_serializing_if = "Option::is_none"
    )]
    pub id: Option<RecordId>,
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    pub phone: String,
    pub join_date: i64,
    pub membership: MembershipView,
}

/// Registration payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MemberCreate {
    pub name: String,
    pub phone: String,
    #[serde(default)]
    pub email: Option<String>,
    pub plan_id: String,
}

/// Profile update payload (membership window untouched)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MemberUpdate {
    pub name: String,
    pub phone: String,
    #[serde(default)]
    pub email: Option<String>,
}

/// Renewal payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MemberRenew {
    pub plan_id: String,
}
