//! Tracing subscriber setup for the binary.

use std::sync::Once;

static TRACING_INIT: Once = Once::new();

/// Install a subscriber filtered by `RUST_LOG`.
///
/// Nothing is installed when `RUST_LOG` is unset. With `OPFLOW_LOG_TREE=1`
/// spans and events are rendered as an indented tree instead of flat lines.
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{fmt, prelude::*, EnvFilter};

        if std::env::var("RUST_LOG").is_err() {
            return;
        }

        let filter = EnvFilter::from_default_env();
        let tree = std::env::var("OPFLOW_LOG_TREE").is_ok_and(|v| v == "1");

        if tree {
            tracing_subscriber::registry()
                .with(
                    tracing_tree::HierarchicalLayer::new(2)
                        .with_writer(std::io::stderr)
                        .with_targets(true),
                )
                .with(filter)
                .init();
        } else {
            tracing_subscriber::registry()
                .with(
                    fmt::layer()
                        .with_writer(std::io::stderr)
                        .with_target(true)
                        .with_level(true),
                )
                .with(filter)
                .init();
        }
    });
}
