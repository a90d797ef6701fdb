//! Desktop platform implementation.

use std::time::Duration;

use rand::rngs::OsRng;
use rand::TryRngCore;
use tracing::{debug, warn};
use tracing_error::ErrorLayer;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::EnvFilter;

/// Sleeps for the remainder of a frame. Spins near the deadline while the game is
/// visible; yields to the OS scheduler otherwise.
pub fn sleep(duration: Duration, focused: bool) {
    if focused {
        spin_sleep::sleep(duration);
    } else {
        std::thread::sleep(duration);
    }
}

/// Installs the global tracing subscriber, filtered by `RUST_LOG` (default `info`).
pub fn init_logging() -> Result<(), tracing_subscriber::util::TryInitError> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_target(false))
        .with(ErrorLayer::default())
        .try_init()
}

/// A fresh seed from OS entropy.
///
/// Falls back to the system clock if the OS source is unavailable.
pub fn entropy_seed() -> u64 {
    match OsRng.try_next_u64() {
        Ok(seed) => seed,
        Err(error) => {
            warn!(%error, "OS entropy unavailable, seeding from the clock");
            let nanos = std::time::SystemTime::now()
                .duration_since(std::time::UNIX_EPOCH)
                .map(|elapsed| elapsed.as_nanos() as u64)
                .unwrap_or_default();
            debug!(seed = nanos, "Clock seed");
            nanos
        }
    }
}
