//! Transaction API Handlers

use axum::{Json, extract::State};

use crate::core::ServerState;
use crate::db::models::Transaction;
use crate::db::repository::TransactionRepository;
use crate::utils::AppResult;

/// GET /api/transactions - the billing ledger, most recent first
pub async fn list(State(state): State<ServerState>) -> AppResult<Json<Vec<Transaction>>> {
    let repo = TransactionRepository::new(state.db.clone());
    let transactions = repo.find_all().await?;
    Ok(Json(transactions))
}
