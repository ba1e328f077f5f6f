//! Database Models

// Serde helpers
pub mod serde_helpers;

// Membership domain
pub mod checkin;
pub mod member;
pub mod plan;
pub mod transaction;

// POS domain
pub mod food;
pub mod sale;

// Re-exports
pub use checkin::{Checkin, CheckinCreate};
pub use member::{
    Member, MemberCreate, MemberRenew, MemberUpdate, MemberView, Membership, MembershipStatus,
    MembershipView,
};
pub use plan::{Plan, PlanCreate, PlanUpdate};
pub use transaction::Transaction;
pub use food::{FoodCreate, FoodItem, FoodUpdate};
pub use sale::{Sale, SaleCreate, SaleItem, SaleLineCreate};
