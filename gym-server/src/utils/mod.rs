//! Utility module — common tools and types
//!
//! # Contents
//!
//! - [`AppError`] / [`AppResult`] - application error type and result alias
//! - [`time`] - business-timezone conversions and `now_millis`
//! - [`validation`] - input validation helpers
//! - [`logger`] - tracing setup

pub mod error;
pub mod logger;
pub mod result;
pub mod time;
pub mod validation;

pub use error::{AppError, AppResponse};
pub use result::AppResult;
