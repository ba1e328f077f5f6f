//! Gym Back-Office Server
//!
//! # Architecture overview
//!
//! A REST API over an embedded document store for running a gym's back
//! office: plan catalog, member lifecycle, attendance log, billing ledger,
//! POS food inventory and a statistics dashboard.
//!
//! # Module structure
//!
//! ```text
//! gym-server/src/
//! ├── core/          # Config, state, server lifecycle
//! ├── api/           # HTTP routes and handlers
//! ├── db/            # Embedded SurrealDB, models, repositories
//! ├── membership/    # Membership window arithmetic, status derivation
//! ├── reporting/     # Dashboard time-bucketed aggregation
//! └── utils/         # Errors, logging, time and validation helpers
//! ```

pub mod api;
pub mod core;
pub mod db;
pub mod membership;
pub mod reporting;
pub mod utils;

// Re-export public types
pub use core::{Config, Server, ServerState};
pub use utils::{AppError, AppResult};

// Re-export logger functions
pub use utils::logger::{init_logger, init_logger_with_file};

pub fn print_banner() {
    println!(
        r#"
   ______
  / ____/_  ______ ___
 / / __/ / / / __ `__ \
/ /_/ / /_/ / / / / / /
\____/\__, /_/ /_/ /_/
     /____/
    Back Office
    "#
    );
}
