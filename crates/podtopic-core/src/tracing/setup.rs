//! Tracing initialization and configuration.

use std::sync::Once;

use tracing_subscriber::{fmt, prelude::*, EnvFilter};

static INIT: Once = Once::new();

/// Initialize tracing with an explicit filter string, optionally as JSON lines.
///
/// `PODTOPIC_LOG` still wins when set, using per-module directives such as
/// `PODTOPIC_LOG=podtopic_clustering=debug,podtopic_core=info`. An invalid
/// filter falls back to `info`.
///
/// Idempotent: only the first call installs a subscriber.
pub fn init_tracing_with_filter(filter: &str, json: bool) {
    let filter = EnvFilter::try_from_env("PODTOPIC_LOG")
        .or_else(|_| EnvFilter::try_new(filter))
        .unwrap_or_else(|_| EnvFilter::new("info"));
    install(filter, json);
}

fn install(filter: EnvFilter, json: bool) {
    INIT.call_once(|| {
        let registry = tracing_subscriber::registry().with(filter);
        let result = if json {
            registry
                .with(fmt::layer().json().with_target(true).with_writer(std::io::stderr))
                .try_init()
        } else {
            registry
                .with(
                    fmt::layer()
                        .with_target(true)
                        .with_thread_ids(true)
                        .with_writer(std::io::stderr),
                )
                .try_init()
        };
        // Another subscriber (e.g. a test harness) may already be installed.
        let _ = result;
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn repeated_and_invalid_initialization_is_harmless() {
        init_tracing_with_filter("podtopic_core=debug", false);
        init_tracing_with_filter("not a [valid filter", true);
        assert!(INIT.is_completed());
        ::tracing::info!("still logging after a second initialization");
    }
}
