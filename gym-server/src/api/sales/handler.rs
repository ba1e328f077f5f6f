//! Sale API Handlers

use axum::{Json, extract::State};

use crate::core::ServerState;
use crate::db::models::{Sale, SaleCreate, SaleItem};
use crate::db::repository::{FoodRepository, SaleRepository};
use crate::utils::{AppError, AppResult, time};

/// POST /api/sales - create a sale
///
/// Every line is resolved and stock-checked up front so the caller gets a
/// precise error; the repository then commits the sale and all decrements
/// as one transaction. Unit prices and names are snapshotted here, not
/// joined at read time.
pub async fn create(
    State(state): State<ServerState>,
    Json(payload): Json<SaleCreate>,
) -> AppResult<Json<Sale>> {
    if payload.items.is_empty() {
        return Err(AppError::validation("items must not be empty"));
    }

    let now = time::now_millis();
    let foods = FoodRepository::new(state.db.clone());

    let mut lines = Vec::with_capacity(payload.items.len());
    let mut total: i64 = 0;
    for line in &payload.items {
        if line.quantity < 1 {
            return Err(AppError::validation("quantity must be at least 1"));
        }
        let food = foods
            .find_by_id(&line.food_id)
            .await?
            .ok_or_else(|| {
                AppError::not_found(format!("Food not found with id {}", line.food_id))
            })?;
        if food.stock < line.quantity {
            return Err(AppError::insufficient_stock(format!(
                "Not enough stock for {}",
                food.name
            )));
        }

        total += food.price * line.quantity;
        lines.push(SaleItem {
            food: food
                .id
                .ok_or_else(|| AppError::internal("Food record has no id"))?,
            name: food.name,
            quantity: line.quantity,
            price: food.price,
        });
    }

    let sales = SaleRepository::new(state.db.clone());
    let sale = sales.create(lines, total, now).await?;
    Ok(Json(sale))
}

/// GET /api/sales - all sales, newest first
pub async fn list(State(state): State<ServerState>) -> AppResult<Json<Vec<Sale>>> {
    let repo = SaleRepository::new(state.db.clone());
    let sales = repo.find_all().await?;
    Ok(Json(sales))
}
