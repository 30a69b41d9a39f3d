//! Logging utilities for the Contactbook application.
//!
//! Every crate logs through `tracing`; this module only installs the
//! subscriber once at process start.

use tracing::level_filters::LevelFilter;
use tracing::{info, Level};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Initialize the tracing subscriber at INFO level.
///
/// # Examples
///
/// ```
/// use contactbook_common::logging;
///
/// logging::init();
/// ```
pub fn init() {
    init_with_level(Level::INFO);
}

/// Initialize the tracing subscriber with a specific log level.
///
/// `RUST_LOG` is honoured for everything else; the level given here applies
/// to all `contactbook*` targets. Calling this twice is harmless.
pub fn init_with_level(level: Level) {
    let filter = EnvFilter::from_default_env().add_directive(
        format!("contactbook={}", level)
            .parse()
            .unwrap_or_else(|_| LevelFilter::from_level(level).into()),
    );

    // try_init: a global subscriber may already be set (tests, embedding)
    let result = tracing_subscriber::registry()
        .with(
            fmt::layer()
                .with_target(true)
                .with_file(true)
                .with_line_number(true)
                .with_thread_ids(true)
                .with_thread_names(true),
        )
        .with(filter)
        .try_init();

    if result.is_ok() {
        info!("Logging initialized at level: {}", level);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_init_is_idempotent() {
        init();
        init_with_level(Level::DEBUG);
    }
}
