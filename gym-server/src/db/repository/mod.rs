//! Repository Module
//!
//! Provides CRUD operations for SurrealDB tables.
//!
//! ID convention: the full `"table:id"` form everywhere — API payloads,
//! paths and stored record links all round-trip through
//! [`surrealdb::RecordId`].

pub mod checkin;
pub mod food;
pub mod member;
pub mod plan;
pub mod sale;
pub mod transaction;

// Re-exports
pub use checkin::CheckinRepository;
pub use food::FoodRepository;
pub use member::MemberRepository;
pub use plan::PlanRepository;
pub use sale::SaleRepository;
pub use transaction::TransactionRepository;

use surrealdb::Surreal;
use surrealdb::engine::local::Db;
use thiserror::Error;

/// Repository error types
#[derive(Debug, Error)]
pub enum RepoError {
    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Duplicate: {0}")]
    Duplicate(String),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Insufficient stock: {0}")]
    InsufficientStock(String),

    #[error("Database error: {0}")]
    Database(String),
}

impl From<surrealdb::Error> for RepoError {
    fn from(err: surrealdb::Error) -> Self {
        RepoError::Database(err.to_string())
    }
}

/// Result type for repository operations
pub type RepoResult<T> = Result<T, RepoError>;

/// Base repository with database reference
#[derive(Clone)]
pub struct BaseRepository {
    db: Surreal<Db>,
}

impl BaseRepository {
    pub fn new(db: Surreal<Db>) -> Self {
        Self { db }
    }

    pub fn db(&self) -> &Surreal<Db> {
        &self.db
    }
}

/// Parse a `"table:id"` string into a [`surrealdb::RecordId`]
pub fn parse_record_id(id: &str) -> RepoResult<surrealdb::RecordId> {
    id.parse()
        .map_err(|_| RepoError::Validation(format!("Invalid ID: {}", id)))
}
