pub mod api;
pub mod config;
pub mod error;
pub mod identity;
pub mod poll;
pub mod storage;

use once_cell::sync::OnceCell;
use tracing_subscriber::{fmt, EnvFilter};

static TRACING_INIT: OnceCell<()> = OnceCell::new();

/// Initialize tracing for embedding hosts that do not configure their own
/// subscriber. Honors `RUST_LOG`, defaults to `info`. Safe to call more than
/// once; only the first call installs a subscriber.
pub fn init_tracing() {
    TRACING_INIT.get_or_init(|| {
        let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
        let _ = fmt().with_env_filter(filter).try_init();
    });
}

// Test-only printing helper: expands to eprintln! during tests and is absent otherwise.
// Usage in tests: tprintln!("debug: {}", value);
#[cfg(any(test, debug_assertions))]
#[macro_export]
macro_rules! tprintln {
    ($($arg:tt)*) => ( eprintln!($($arg)*) );
}

// In non-test builds, provide a no-op tprintln! so calls compile without effect.
#[cfg(not(any(test, debug_assertions)))]
#[macro_export]
macro_rules! tprintln {
    ($($arg:tt)*) => ({
        // Preserve formatting checks in release without producing code
        if false { let _ = format!($($arg)*); }
    });
}
