//! Check-in Repository

use super::{BaseRepository, RepoError, RepoResult};
use crate::db::models::{Checkin, Member};
use surrealdb::Surreal;
use surrealdb::engine::local::Db;

#[derive(Clone)]
pub struct CheckinRepository {
    base: BaseRepository,
}

impl CheckinRepository {
    pub fn new(db: Surreal<Db>) -> Self {
        Self {
            base: BaseRepository::new(db),
        }
    }

    /// Append a check-in for the member at the given instant
    pub async fn create(&self, member: &Member, now: i64) -> RepoResult<Checkin> {
        let member_id = member
            .id
            .clone()
            .ok_or_else(|| RepoError::Validation("Member has no id".to_string()))?;

        let mut result = self
            .base
            .db()
            .query(
                "CREATE ONLY checkin CONTENT { member: $member, member_name: $member_name, check_in_time: $now }",
            )
            .bind(("member", member_id))
            .bind(("member_name", member.name.clone()))
            .bind(("now", now))
            .await?;

        let checkin: Option<Checkin> = result.take(0)?;
        checkin.ok_or_else(|| RepoError::Database("Failed to create check-in".to_string()))
    }

    /// Check-ins with `check_in_time` in `[start, end)`, most recent first
    pub async fn find_between_desc(&self, start: i64, end: i64) -> RepoResult<Vec<Checkin>> {
        let checkins: Vec<Checkin> = self
            .base
            .db()
            .query(
                "SELECT * FROM checkin WHERE check_in_time >= $start AND check_in_time < $end ORDER BY check_in_time DESC",
            )
            .bind(("start", start))
            .bind(("end", end))
            .await?
            .take(0)?;
        Ok(checkins)
    }

    /// Check-ins with `check_in_time >= start`, unordered (aggregation input)
    pub async fn find_since(&self, start: i64) -> RepoResult<Vec<Checkin>> {
        let checkins: Vec<Checkin> = self
            .base
            .db()
            .query("SELECT * FROM checkin WHERE check_in_time >= $start")
            .bind(("start", start))
            .await?
            .take(0)?;
        Ok(checkins)
    }
}
