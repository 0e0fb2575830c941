//! Logging setup and crash reporting.
//!
//! The library emits `tracing` events (widget transitions) and `log`
//! records (config loading). The binary installs one subscriber that
//! handles both and, for the terminal widget, a panic hook that restores
//! the terminal before reporting.

pub mod panic_hook;

pub use panic_hook::install_panic_hook;

use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Default filter for a `-v` count when `RUST_LOG` is not set.
pub fn default_filter(verbosity: u8) -> &'static str {
    match verbosity {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    }
}

/// Install the global subscriber, writing to stderr.
///
/// `RUST_LOG` wins over the verbosity flag. Calling twice is harmless.
pub fn init_logging(verbosity: u8) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_filter(verbosity)));
    let _ = tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr).with_target(false))
        .with(filter)
        .try_init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_filter_levels() {
        assert_eq!(default_filter(0), "warn");
        assert_eq!(default_filter(2), "debug");
        assert_eq!(default_filter(9), "trace");
    }

    #[test]
    fn test_init_logging_twice_is_harmless() {
        init_logging(0);
        init_logging(3);
    }
}
