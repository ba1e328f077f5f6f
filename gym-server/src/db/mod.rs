//! Database Module
//!
//! Embedded SurrealDB (RocksDB engine) connection and index definitions.

pub mod models;
pub mod repository;
pub mod seed;

use surrealdb::Surreal;
use surrealdb::engine::local::{Db, RocksDb};

use crate::utils::AppError;

/// Database service — owns the embedded SurrealDB handle
#[derive(Clone)]
pub struct DbService {
    pub db: Surreal<Db>,
}

impl DbService {
    /// Open (or create) the database under the given directory and apply
    /// index definitions.
    pub async fn new(db_path: &str) -> Result<Self, AppError> {
        let db = Surreal::new::<RocksDb>(db_path)
            .await
            .map_err(|e| AppError::database(format!("Failed to open database: {e}")))?;

        db.use_ns("gym")
            .use_db("backoffice")
            .await
            .map_err(|e| AppError::database(format!("Failed to select namespace: {e}")))?;

        tracing::info!("Database connection established (SurrealDB, RocksDB engine)");

        define_indexes(&db).await?;

        Ok(Self { db })
    }
}

/// Indexes for the fields the dashboard and day-window queries filter on.
///
/// Uniqueness of plan names and member email/phone is enforced by explicit
/// duplicate lookups in the repositories, not by unique indexes — a unique
/// index would also collide the members that have no email at all.
async fn define_indexes(db: &Surreal<Db>) -> Result<(), AppError> {
    db.query(
        r#"
        DEFINE INDEX IF NOT EXISTS member_end_date ON member FIELDS membership.end_date;
        DEFINE INDEX IF NOT EXISTS member_join_date ON member FIELDS join_date;
        DEFINE INDEX IF NOT EXISTS transaction_date ON transaction FIELDS transaction_date;
        DEFINE INDEX IF NOT EXISTS checkin_time ON checkin FIELDS check_in_time;
        "#,
    )
    .await
    .map_err(|e| AppError::database(format!("Failed to define indexes: {e}")))?
    .check()
    .map_err(|e| AppError::database(format!("Failed to define indexes: {e}")))?;
    Ok(())
}
