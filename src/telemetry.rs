//! Opt-in tracing setup for hosts embedding `chart-kit`.
//!
//! The engine logs pass summaries, legend toggles, listener replacement, and
//! cancelled animations through `tracing`. Hosts either install their own
//! subscriber or call [`init_default_tracing`].

/// Default filter directive when `RUST_LOG` is unset.
pub const DEFAULT_TRACING_FILTER: &str = "chart_kit=info";

/// Installs a compact `tracing` subscriber when the `telemetry` feature is enabled.
///
/// Returns `false` without side effects when the feature is disabled or a
/// global subscriber is already installed.
#[must_use]
pub fn init_default_tracing() -> bool {
    #[cfg(feature = "telemetry")]
    {
        let filter = tracing_subscriber::EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(DEFAULT_TRACING_FILTER));
        return tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(true)
            .compact()
            .try_init()
            .is_ok();
    }

    #[cfg(not(feature = "telemetry"))]
    {
        false
    }
}
