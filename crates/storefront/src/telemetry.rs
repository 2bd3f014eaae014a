//! Tracing setup.
//!
//! Native hosts log to stderr, filtered by `RUST_LOG`. In the browser
//! (`web` feature) events go to the developer console, at the console
//! level matching their tracing level.

use tracing_subscriber::EnvFilter;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Filter used when `RUST_LOG` is not set.
pub const DEFAULT_FILTER: &str = "kesley_cakes_storefront=info";

/// Install a stderr subscriber with an `EnvFilter`.
///
/// Defaults to info level for this crate if `RUST_LOG` is not set. Returns
/// `false` if a global subscriber was already installed.
pub fn init() -> bool {
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| DEFAULT_FILTER.into());

    tracing_subscriber::registry()
        .with(env_filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .try_init()
        .is_ok()
}

/// Install a subscriber that writes to the browser console.
///
/// Timestamps are omitted: the console adds its own, and the system clock
/// is not available to `wasm32-unknown-unknown`.
#[cfg(feature = "web")]
pub fn init_console() -> bool {
    let console_layer = tracing_subscriber::fmt::layer()
        .with_ansi(false)
        .without_time()
        .with_writer(tracing_web::MakeWebConsoleWriter::new());

    tracing_subscriber::registry()
        .with(EnvFilter::new(DEFAULT_FILTER))
        .with(console_layer)
        .try_init()
        .is_ok()
}
