//! Tracing subscriber setup for the driver.
//!
//! Logging is off unless `OSHC_LOG` (or `RUST_LOG`) is set, e.g.
//! `OSHC_LOG=osh_lexer_core=debug`. With `OSHC_LOG_TREE=1` spans are shown
//! as an indented tree instead of flat lines. Logs go to stderr; stdout is
//! reserved for command output.

use std::sync::Once;

static TRACING_INIT: Once = Once::new();

/// Install the global subscriber. Safe to call more than once.
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{fmt, prelude::*, EnvFilter};

        let Some(directives) = log_directives() else {
            return;
        };
        let filter = EnvFilter::new(directives);
        let registry = tracing_subscriber::registry().with(filter);

        if tree_output() {
            registry
                .with(tracing_tree::HierarchicalLayer::new(2).with_targets(true))
                .init();
        } else {
            registry
                .with(
                    fmt::layer()
                        .with_target(true)
                        .with_level(true)
                        .with_writer(std::io::stderr),
                )
                .init();
        }
    });
}

fn log_directives() -> Option<String> {
    std::env::var("OSHC_LOG")
        .or_else(|_| std::env::var("RUST_LOG"))
        .ok()
}

fn tree_output() -> bool {
    std::env::var_os("OSHC_LOG_TREE").is_some_and(|v| v == "1")
}
