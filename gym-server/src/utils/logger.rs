//! Logging Infrastructure
//!
//! Console logging for development, with an optional daily-rotating file
//! appender for long-running deployments. `RUST_LOG` overrides the level.

use std::fs;
use std::path::Path;

use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Initialize console-only logging at the default level
pub fn init_logger() {
    init_logger_with_file(None, None);
}

/// Initialize logging, optionally mirroring to daily-rotated files
///
/// # Arguments
/// * `log_level` - filter directive when `RUST_LOG` is unset (default "info")
/// * `log_dir` - directory for `gym-server.YYYY-MM-DD` log files; console
///   only when `None`
pub fn init_logger_with_file(log_level: Option<&str>, log_dir: Option<&str>) {
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(log_level.unwrap_or("info")));

    let console_layer = fmt::layer()
        .with_target(false)
        .with_file(false)
        .with_line_number(false);

    let registry = tracing_subscriber::registry()
        .with(env_filter)
        .with(console_layer);

    match log_dir {
        Some(dir) if fs::create_dir_all(Path::new(dir)).is_ok() => {
            let file_appender = tracing_appender::rolling::daily(dir, "gym-server");
            registry
                .with(fmt::layer().with_ansi(false).with_writer(file_appender))
                .init();
        }
        _ => registry.init(),
    }
}
