//! Member Repository
//!
//! Registration and renewal pair a member write with a billing-ledger
//! append. Both run inside a single database transaction so a failure on
//! either side leaves no half-written state.

use super::{BaseRepository, RepoError, RepoResult, parse_record_id};
use crate::db::models::{Member, MemberUpdate, Plan};
use crate::membership::MembershipWindow;
use surrealdb::engine::local::Db;
use surrealdb::{RecordId, Surreal};

#[derive(Clone)]
pub struct MemberRepository {
    base: BaseRepository,
}

impl MemberRepository {
    pub fn new(db: Surreal<Db>) -> Self {
        Self {
            base: BaseRepository::new(db),
        }
    }

    /// Find all members, newest joiners first
    pub async fn find_all(&self) -> RepoResult<Vec<Member>> {
        let members: Vec<Member> = self
            .base
            .db()
            .query("SELECT * FROM member ORDER BY join_date DESC")
            .await?
            .take(0)?;
        Ok(members)
    }

    /// Find member by id
    pub async fn find_by_id(&self, id: &str) -> RepoResult<Option<Member>> {
        let thing = parse_record_id(id)?;
        let member: Option<Member> = self.base.db().select(thing).await?;
        Ok(member)
    }

    /// Find the member using this email, optionally ignoring one record
    /// (the member being edited)
    pub async fn find_by_email(
        &self,
        email: &str,
        exclude: Option<&RecordId>,
    ) -> RepoResult<Option<Member>> {
        let mut result = match exclude {
            Some(ex) => {
                self.base
                    .db()
                    .query("SELECT * FROM member WHERE email = $email AND id != $exclude LIMIT 1")
                    .bind(("email", email.to_string()))
                    .bind(("exclude", ex.clone()))
                    .await?
            }
            None => {
                self.base
                    .db()
                    .query("SELECT * FROM member WHERE email = $email LIMIT 1")
                    .bind(("email", email.to_string()))
                    .await?
            }
        };
        let members: Vec<Member> = result.take(0)?;
        Ok(members.into_iter().next())
    }

    /// Find the member using this phone number, optionally ignoring one record
    pub async fn find_by_phone(
        &self,
        phone: &str,
        exclude: Option<&RecordId>,
    ) -> RepoResult<Option<Member>> {
        let mut result = match exclude {
            Some(ex) => {
                self.base
                    .db()
                    .query("SELECT * FROM member WHERE phone = $phone AND id != $exclude LIMIT 1")
                    .bind(("phone", phone.to_string()))
                    .bind(("exclude", ex.clone()))
                    .await?
            }
            None => {
                self.base
                    .db()
                    .query("SELECT * FROM member WHERE phone = $phone LIMIT 1")
                    .bind(("phone", phone.to_string()))
                    .await?
            }
        };
        let members: Vec<Member> = result.take(0)?;
        Ok(members.into_iter().next())
    }

    /// Register a new member: create the member row with its embedded
    /// membership and append the registration transaction, atomically.
    pub async fn register(
        &self,
        name: String,
        email: Option<String>,
        phone: String,
        plan: &Plan,
        window: MembershipWindow,
        now: i64,
    ) -> RepoResult<Member> {
        let plan_id = plan
            .id
            .clone()
            .ok_or_else(|| RepoError::Validation("Plan has no id".to_string()))?;

        let mut result = self
            .base
            .db()
            .query(
                r#"
                BEGIN TRANSACTION;
                LET $m = (CREATE ONLY member CONTENT {
                    name: $name,
                    email: $email,
                    phone: $phone,
                    join_date: $now,
                    membership: {
                        plan: $plan,
                        plan_name: $plan_name,
                        price: $price,
                        start_date: $start,
                        end_date: $end
                    }
                });
                CREATE transaction CONTENT {
                    member: $m.id,
                    member_name: $m.name,
                    plan_name: $plan_name,
                    amount: $price,
                    transaction_date: $now
                };
                RETURN $m;
                COMMIT TRANSACTION;
                "#,
            )
            .bind(("name", name))
            .bind(("email", email))
            .bind(("phone", phone))
            .bind(("plan", plan_id))
            .bind(("plan_name", plan.name.clone()))
            .bind(("price", plan.price))
            .bind(("start", window.start))
            .bind(("end", window.end))
            .bind(("now", now))
            .await?
            .check()?;

        let last = result.num_statements() - 1;
        let member: Option<Member> = result.take(last)?;
        member.ok_or_else(|| RepoError::Database("Failed to create member".to_string()))
    }

    /// Renew a membership: overwrite the embedded membership with the new
    /// window and append the renewal transaction, atomically.
    pub async fn renew(
        &self,
        member_id: &RecordId,
        plan: &Plan,
        window: MembershipWindow,
        now: i64,
    ) -> RepoResult<Member> {
        let plan_id = plan
            .id
            .clone()
            .ok_or_else(|| RepoError::Validation("Plan has no id".to_string()))?;

        let mut result = self
            .base
            .db()
            .query(
                r#"
                BEGIN TRANSACTION;
                LET $m = (UPDATE ONLY $member SET membership = {
                    plan: $plan,
                    plan_name: $plan_name,
                    price: $price,
                    start_date: $start,
                    end_date: $end
                });
                CREATE transaction CONTENT {
                    member: $m.id,
                    member_name: $m.name,
                    plan_name: $plan_name,
                    amount: $price,
                    transaction_date: $now
                };
                RETURN $m;
                COMMIT TRANSACTION;
                "#,
            )
            .bind(("member", member_id.clone()))
            .bind(("plan", plan_id))
            .bind(("plan_name", plan.name.clone()))
            .bind(("price", plan.price))
            .bind(("start", window.start))
            .bind(("end", window.end))
            .bind(("now", now))
            .await?
            .check()?;

        let last = result.num_statements() - 1;
        let member: Option<Member> = result.take(last)?;
        member.ok_or_else(|| RepoError::NotFound(format!("Member {} not found", member_id)))
    }

    /// Update profile fields only; the membership window is untouched
    pub async fn update_profile(&self, id: &str, data: MemberUpdate) -> RepoResult<Member> {
        let thing = parse_record_id(id)?;

        let mut result = self
            .base
            .db()
            .query("UPDATE $thing SET name = $name, email = $email, phone = $phone")
            .bind(("thing", thing))
            .bind(("name", data.name))
            .bind(("email", data.email))
            .bind(("phone", data.phone))
            .await?;

        let updated: Vec<Member> = result.take(0)?;
        updated
            .into_iter()
            .next()
            .ok_or_else(|| RepoError::NotFound(format!("Member {} not found", id)))
    }

    /// Members whose window ends in `[start, end)`, soonest first
    pub async fn expiring_between(&self, start: i64, end: i64) -> RepoResult<Vec<Member>> {
        let members: Vec<Member> = self
            .base
            .db()
            .query(
                "SELECT * FROM member WHERE membership.end_date >= $start AND membership.end_date < $end ORDER BY membership.end_date ASC",
            )
            .bind(("start", start))
            .bind(("end", end))
            .await?
            .take(0)?;
        Ok(members)
    }

    /// Number of members whose window has not ended yet
    pub async fn count_active(&self, now: i64) -> RepoResult<i64> {
        let mut result = self
            .base
            .db()
            .query(
                r#"
                LET $m = (SELECT id FROM member WHERE membership.end_date >= $now);
                RETURN count($m);
                "#,
            )
            .bind(("now", now))
            .await?;
        let last = result.num_statements() - 1;
        let count: Option<i64> = result.take(last)?;
        Ok(count.unwrap_or(0))
    }

    /// Number of members who joined in `[start, end)`
    pub async fn count_joined_between(&self, start: i64, end: i64) -> RepoResult<i64> {
        let mut result = self
            .base
            .db()
            .query(
                r#"
                LET $m = (SELECT id FROM member WHERE join_date >= $start AND join_date < $end);
                RETURN count($m);
                "#,
            )
            .bind(("start", start))
            .bind(("end", end))
            .await?;
        let last = result.num_statements() - 1;
        let count: Option<i64> = result.take(last)?;
        Ok(count.unwrap_or(0))
    }
}
