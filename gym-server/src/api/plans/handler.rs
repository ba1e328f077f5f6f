//! Plan API Handlers

use axum::{
    Json,
    extract::{Path, State},
};

use crate::core::ServerState;
use crate::db::models::{Plan, PlanCreate, PlanUpdate};
use crate::db::repository::PlanRepository;
use crate::utils::AppResult;
use crate::utils::validation::{self, MAX_NAME_LEN};

/// GET /api/plans - all plans, cheapest first
pub async fn list(State(state): State<ServerState>) -> AppResult<Json<Vec<Plan>>> {
    let repo = PlanRepository::new(state.db.clone());
    let plans = repo.find_all().await?;
    Ok(Json(plans))
}

/// POST /api/plans - create a plan
pub async fn create(
    State(state): State<ServerState>,
    Json(payload): Json<PlanCreate>,
) -> AppResult<Json<Plan>> {
    validation::validate_required_text(&payload.name, "name", MAX_NAME_LEN)?;
    validation::validate_non_negative(payload.duration_months, "duration_months")?;
    validation::validate_non_negative(payload.price, "price")?;

    let repo = PlanRepository::new(state.db.clone());
    let plan = repo.create(payload).await?;
    Ok(Json(plan))
}

/// PUT /api/plans/{id} - update a plan
pub async fn update(
    State(state): State<ServerState>,
    Path(id): Path<String>,
    Json(payload): Json<PlanUpdate>,
) -> AppResult<Json<Plan>> {
    if let Some(ref name) = payload.name {
        validation::validate_required_text(name, "name", MAX_NAME_LEN)?;
    }
    if let Some(duration_months) = payload.duration_months {
        validation::validate_non_negative(duration_months, "duration_months")?;
    }
    if let Some(price) = payload.price {
        validation::validate_non_negative(price, "price")?;
    }

    let repo = PlanRepository::new(state.db.clone());
    let plan = repo.update(&id, payload).await?;
    Ok(Json(plan))
}

/// DELETE /api/plans/{id} - delete a plan
///
/// Existing members and transactions keep their denormalized plan
/// name/price; nothing cascades.
pub async fn delete(
    State(state): State<ServerState>,
    Path(id): Path<String>,
) -> AppResult<Json<bool>> {
    let repo = PlanRepository::new(state.db.clone());
    let result = repo.delete(&id).await?;
    Ok(Json(result))
}
