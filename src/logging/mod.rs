//! Logging setup for the binary
//!
//! Library code only uses the `log` macros; the binary installs
//! `env_logger` once at startup.

use env_logger::{Builder, Env, Target};

/// Filter used when `RUST_LOG` is not set
pub const DEFAULT_FILTER: &str = "warn";

/// Install the global logger
///
/// Logs go to stderr so they never mix with the board on stdout. Calling
/// this more than once is harmless; later calls are ignored.
pub fn init() {
    let _ = Builder::from_env(Env::default().default_filter_or(DEFAULT_FILTER))
        .target(Target::Stderr)
        .format_timestamp(None)
        .try_init();
}
