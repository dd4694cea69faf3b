//! Opt-in `tracing` subscriber for hosts that embed a [`RangeDomain`].
//!
//! Range and size mutations log at `trace`, zoom and axis wiring at
//! `debug`, and corrected log-axis input at `warn`, all under the
//! `chart_domain` target. Hosts with their own subscriber never need this
//! module.
//!
//! [`RangeDomain`]: crate::RangeDomain

/// Filter used when `RUST_LOG` is unset: other crates at `warn`, this crate at `info`.
pub const DEFAULT_FILTER: &str = "warn,chart_domain=info";

/// Installs a compact fmt subscriber filtered by `RUST_LOG` or [`DEFAULT_FILTER`].
///
/// Returns `false` when the `telemetry` feature is off or a global
/// subscriber is already installed.
#[must_use]
pub fn init_default_tracing() -> bool {
    init_tracing_with_filter(DEFAULT_FILTER)
}

/// Like [`init_default_tracing`], with `fallback` used when `RUST_LOG` is unset.
///
/// Use `"chart_domain=trace"` to follow every range notification.
#[must_use]
pub fn init_tracing_with_filter(fallback: &str) -> bool {
    #[cfg(feature = "telemetry")]
    {
        let filter = tracing_subscriber::EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(fallback));

        return tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(true)
            .compact()
            .try_init()
            .is_ok();
    }

    #[cfg(not(feature = "telemetry"))]
    {
        let _ = fallback;
        false
    }
}
