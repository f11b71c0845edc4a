//! Opt-in `tracing` setup for hosts that do not install their own
//! subscriber.

/// Installs a compact fmt subscriber filtered by `RUST_LOG` (default
/// `info`).
///
/// Returns `false` without the `telemetry` feature, or when the host
/// already set a global subscriber.
#[must_use]
pub fn init_default_tracing() -> bool {
    install_subscriber()
}

#[cfg(feature = "telemetry")]
fn install_subscriber() -> bool {
    use tracing_subscriber::EnvFilter;

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .compact()
        .try_init()
        .is_ok()
}

#[cfg(not(feature = "telemetry"))]
fn install_subscriber() -> bool {
    false
}
