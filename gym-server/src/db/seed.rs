//! Development seed data
//!
//! Seeds the original plan catalog when running outside production so a
//! fresh checkout has something to register members against. Re-seeds
//! whenever the catalog has fewer entries than the defaults, which also
//! picks up newly added default plans.

use surrealdb::Surreal;
use surrealdb::engine::local::Db;

use crate::db::models::PlanCreate;
use crate::db::repository::PlanRepository;
use crate::utils::AppError;

/// Default membership plan catalog (name, duration in months, price)
pub const DEFAULT_PLANS: &[(&str, i64, i64)] = &[
    ("Single Visit - Regular", 0, 25_000),
    ("Single Visit - Student", 0, 15_000),
    ("Basic (1 Month)", 1, 160_000),
    ("Premium (3 Months)", 3, 450_000),
    ("VIP (12 Months)", 12, 1_800_000),
];

pub async fn seed_default_plans(db: &Surreal<Db>) -> Result<(), AppError> {
    let repo = PlanRepository::new(db.clone());
    let existing = repo.find_all().await.map_err(AppError::from)?;
    if existing.len() >= DEFAULT_PLANS.len() {
        return Ok(());
    }

    db.query("DELETE plan")
        .await
        .map_err(|e| AppError::database(format!("Failed to clear plans: {e}")))?;

    for (name, duration_months, price) in DEFAULT_PLANS {
        repo.create(PlanCreate {
            name: (*name).to_string(),
            duration_months: *duration_months,
            price: *price,
        })
        .await
        .map_err(AppError::from)?;
    }

    tracing::info!("Membership plans have been re-seeded");
    Ok(())
}
