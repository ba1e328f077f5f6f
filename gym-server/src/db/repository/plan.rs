//! Plan Repository

use super::{BaseRepository, RepoError, RepoResult, parse_record_id};
use crate::db::models::{Plan, PlanCreate, PlanUpdate};
use surrealdb::Surreal;
use surrealdb::engine::local::Db;

const TABLE: &str = "plan";

#[derive(Clone)]
pub struct PlanRepository {
    base: BaseRepository,
}

impl PlanRepository {
    pub fn new(db: Surreal<Db>) -> Self {
        Self {
            base: BaseRepository::new(db),
        }
    }

    /// Find all plans, cheapest first
    pub async fn find_all(&self) -> RepoResult<Vec<Plan>> {
        let plans: Vec<Plan> = self
            .base
            .db()
            .query("SELECT * FROM plan ORDER BY price ASC")
            .await?
            .take(0)?;
        Ok(plans)
    }

    /// Find plan by id
    pub async fn find_by_id(&self, id: &str) -> RepoResult<Option<Plan>> {
        let thing = parse_record_id(id)?;
        let plan: Option<Plan> = self.base.db().select(thing).await?;
        Ok(plan)
    }

    /// Find plan by name
    pub async fn find_by_name(&self, name: &str) -> RepoResult<Option<Plan>> {
        let mut result = self
            .base
            .db()
            .query("SELECT * FROM plan WHERE name = $name LIMIT 1")
            .bind(("name", name.to_string()))
            .await?;
        let plans: Vec<Plan> = result.take(0)?;
        Ok(plans.into_iter().next())
    }

    /// Create a new plan
    pub async fn create(&self, data: PlanCreate) -> RepoResult<Plan> {
        // Check duplicate name
        if self.find_by_name(&data.name).await?.is_some() {
            return Err(RepoError::Duplicate(format!(
                "Plan '{}' already exists",
                data.name
            )));
        }

        let plan = Plan {
            id: None,
            name: data.name,
            duration_months: data.duration_months,
            price: data.price,
        };

        let created: Option<Plan> = self.base.db().create(TABLE).content(plan).await?;
        created.ok_or_else(|| RepoError::Database("Failed to create plan".to_string()))
    }

    /// Update a plan
    ///
    /// Members and transactions keep their denormalized copies of the old
    /// name/price — only the catalog entry changes.
    pub async fn update(&self, id: &str, data: PlanUpdate) -> RepoResult<Plan> {
        let thing = parse_record_id(id)?;
        let existing = self
            .find_by_id(id)
            .await?
            .ok_or_else(|| RepoError::NotFound(format!("Plan {} not found", id)))?;

        // Check duplicate name if renaming
        if let Some(ref new_name) = data.name
            && new_name != &existing.name
            && self.find_by_name(new_name).await?.is_some()
        {
            return Err(RepoError::Duplicate(format!(
                "Plan '{}' already exists",
                new_name
            )));
        }

        let name = data.name.unwrap_or(existing.name);
        let duration_months = data.duration_months.unwrap_or(existing.duration_months);
        let price = data.price.unwrap_or(existing.price);

        let mut result = self
            .base
            .db()
            .query("UPDATE $thing SET name = $name, duration_months = $duration_months, price = $price")
            .bind(("thing", thing))
            .bind(("name", name))
            .bind(("duration_months", duration_months))
            .bind(("price", price))
            .await?;

        let updated: Vec<Plan> = result.take(0)?;
        updated
            .into_iter()
            .next()
            .ok_or_else(|| RepoError::NotFound(format!("Plan {} not found", id)))
    }

    /// Hard delete a plan
    ///
    /// No cascade: members and transactions referencing the plan keep
    /// their denormalized name/price.
    pub async fn delete(&self, id: &str) -> RepoResult<bool> {
        let thing = parse_record_id(id)?;
        if self.find_by_id(id).await?.is_none() {
            return Err(RepoError::NotFound(format!("Plan {} not found", id)));
        }
        self.base
            .db()
            .query("DELETE $thing")
            .bind(("thing", thing))
            .await?;
        Ok(true)
    }
}
