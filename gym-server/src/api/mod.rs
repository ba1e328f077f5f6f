//! API routing module
//!
//! # Structure
//!
//! - [`health`] - liveness probe
//! - [`plans`] - membership plan catalog
//! - [`members`] - member registration, profile edits, renewals
//! - [`checkins`] - attendance log
//! - [`transactions`] - billing ledger (read-only)
//! - [`dashboard`] - KPIs and time-bucketed statistics
//! - [`foods`] - POS inventory
//! - [`sales`] - POS sales

pub mod checkins;
pub mod dashboard;
pub mod foods;
pub mod health;
pub mod members;
pub mod plans;
pub mod sales;
pub mod transactions;

use axum::Router;

use crate::core::ServerState;

/// Build the Axum router (without state)
pub fn build_app() -> Router<ServerState> {
    Router::<ServerState>::new()
        .merge(health::router())
        .merge(plans::router())
        .merge(members::router())
        .merge(checkins::router())
        .merge(transactions::router())
        .merge(dashboard::router())
        .merge(foods::router())
        .merge(sales::router())
}
