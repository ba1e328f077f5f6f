//! Food Repository

use super::{BaseRepository, RepoError, RepoResult, parse_record_id};
use crate::db::models::{FoodCreate, FoodItem, FoodUpdate};
use surrealdb::Surreal;
use surrealdb::engine::local::Db;

const TABLE: &str = "food";

#[derive(Clone)]
pub struct FoodRepository {
    base: BaseRepository,
}

impl FoodRepository {
    pub fn new(db: Surreal<Db>) -> Self {
        Self {
            base: BaseRepository::new(db),
        }
    }

    /// Find all food items, newest first
    pub async fn find_all(&self) -> RepoResult<Vec<FoodItem>> {
        let foods: Vec<FoodItem> = self
            .base
            .db()
            .query("SELECT * FROM food ORDER BY created_at DESC")
            .await?
            .take(0)?;
        Ok(foods)
    }

    /// Find food item by id
    pub async fn find_by_id(&self, id: &str) -> RepoResult<Option<FoodItem>> {
        let thing = parse_record_id(id)?;
        let food: Option<FoodItem> = self.base.db().select(thing).await?;
        Ok(food)
    }

    /// Create a new food item
    pub async fn create(&self, data: FoodCreate, now: i64) -> RepoResult<FoodItem> {
        let food = FoodItem {
            id: None,
            name: data.name,
            price: data.price,
            stock: data.stock,
            created_at: now,
        };

        let created: Option<FoodItem> = self.base.db().create(TABLE).content(food).await?;
        created.ok_or_else(|| RepoError::Database("Failed to create food item".to_string()))
    }

    /// Update a food item
    pub async fn update(&self, id: &str, data: FoodUpdate) -> RepoResult<FoodItem> {
        let thing = parse_record_id(id)?;
        let existing = self
            .find_by_id(id)
            .await?
            .ok_or_else(|| RepoError::NotFound(format!("Food {} not found", id)))?;

        let name = data.name.unwrap_or(existing.name);
        let price = data.price.unwrap_or(existing.price);
        let stock = data.stock.unwrap_or(existing.stock);

        let mut result = self
            .base
            .db()
            .query("UPDATE $thing SET name = $name, price = $price, stock = $stock")
            .bind(("thing", thing))
            .bind(("name", name))
            .bind(("price", price))
            .bind(("stock", stock))
            .await?;

        let updated: Vec<FoodItem> = result.take(0)?;
        updated
            .into_iter()
            .next()
            .ok_or_else(|| RepoError::NotFound(format!("Food {} not found", id)))
    }

    /// Hard delete a food item
    ///
    /// Past sales keep their snapshotted line names and prices.
    pub async fn delete(&self, id: &str) -> RepoResult<bool> {
        let thing = parse_record_id(id)?;
        if self.find_by_id(id).await?.is_none() {
            return Err(RepoError::NotFound(format!("Food {} not found", id)));
        }
        self.base
            .db()
            .query("DELETE $thing")
            .bind(("thing", thing))
            .await?;
        Ok(true)
    }
}
