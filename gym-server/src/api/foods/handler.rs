//! Food API Handlers

use axum::{
    Json,
    extract::{Path, State},
};

use crate::core::ServerState;
use crate::db::models::{FoodCreate, FoodItem, FoodUpdate};
use crate::db::repository::FoodRepository;
use crate::utils::validation::{self, MAX_NAME_LEN};
use crate::utils::{AppResult, time};

/// GET /api/foods - all food items, newest first
pub async fn list(State(state): State<ServerState>) -> AppResult<Json<Vec<FoodItem>>> {
    let repo = FoodRepository::new(state.db.clone());
    let foods = repo.find_all().await?;
    Ok(Json(foods))
}

/// POST /api/foods - create a food item
pub async fn create(
    State(state): State<ServerState>,
    Json(payload): Json<FoodCreate>,
) -> AppResult<Json<FoodItem>> {
    validation::validate_required_text(&payload.name, "name", MAX_NAME_LEN)?;
    validation::validate_non_negative(payload.price, "price")?;
    validation::validate_non_negative(payload.stock, "stock")?;

    let now = time::now_millis();
    let repo = FoodRepository::new(state.db.clone());
    let food = repo.create(payload, now).await?;
    Ok(Json(food))
}

/// PUT /api/foods/{id} - update a food item
pub async fn update(
    State(state): State<ServerState>,
    Path(id): Path<String>,
    Json(payload): Json<FoodUpdate>,
) -> AppResult<Json<FoodItem>> {
    if let Some(ref name) = payload.name {
        validation::validate_required_text(name, "name", MAX_NAME_LEN)?;
    }
    if let Some(price) = payload.price {
        validation::validate_non_negative(price, "price")?;
    }
    if let Some(stock) = payload.stock {
        validation::validate_non_negative(stock, "stock")?;
    }

    let repo = FoodRepository::new(state.db.clone());
    let food = repo.update(&id, payload).await?;
    Ok(Json(food))
}

/// DELETE /api/foods/{id} - delete a food item
pub async fn delete(
    State(state): State<ServerState>,
    Path(id): Path<String>,
) -> AppResult<Json<bool>> {
    let repo = FoodRepository::new(state.db.clone());
    let result = repo.delete(&id).await?;
    Ok(Json(result))
}
