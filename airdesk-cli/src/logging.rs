//! Logging setup for the `airdesk` binary.
//!
//! The library crates log through the `log` facade; the subscriber installed
//! here also captures those records.

use tracing::Level;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Verbosity level for logging output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Verbosity {
    /// Errors only.
    Quiet,
    /// Warnings and errors.
    #[default]
    Normal,
    /// Debug and above, including every request.
    Verbose,
    Trace,
}

impl Verbosity {
    #[must_use]
    pub fn to_level(self) -> Level {
        match self {
            Self::Quiet => Level::ERROR,
            Self::Normal => Level::WARN,
            Self::Verbose => Level::DEBUG,
            Self::Trace => Level::TRACE,
        }
    }

    /// Filter applied when `RUST_LOG` is not set.
    #[must_use]
    pub fn default_filter(self) -> String {
        let level = self.to_level().as_str().to_lowercase();
        format!("airdesk_cli={level},airdesk_core={level},airdesk_api={level}")
    }
}

/// Install the stderr subscriber. `RUST_LOG` takes precedence over `verbosity`.
///
/// Calling it twice is harmless; the second call is ignored.
pub fn init_logging(verbosity: Verbosity) {
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(verbosity.default_filter()));

    let subscriber = tracing_subscriber::registry().with(env_filter).with(
        fmt::layer()
            .with_writer(std::io::stderr)
            .with_target(true)
            .without_time(),
    );

    let _ = subscriber.try_init();
}
