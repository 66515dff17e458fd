//! Logging initialisation for the engawa CLI.
//!
//! Installs a global `tracing` subscriber writing to stderr and bridges
//! the `log` facade. Verbosity is an explicit [`LogOptions`] value built
//! from the CLI flags, applied exactly once at startup and never mutated
//! afterwards; `RUST_LOG` overrides the flag-derived filter.

use std::{env, sync::OnceLock};

use thiserror::Error;
use tracing_log::LogTracer;
use tracing_subscriber::{
    EnvFilter, fmt::format::FmtSpan, layer::SubscriberExt, util::SubscriberInitExt,
};

static INITIALISED: OnceLock<()> = OnceLock::new();

/// Logging escalation selected from the CLI flags.
///
/// The quiet default shows warnings and errors only. `verbose` raises the
/// level to info, `debug` to debug, and `benchmark` enables span-close
/// events so instrumented stages (such as the pairwise-matrix
/// materializations) report their timings.
#[derive(Clone, Copy, Debug, Default)]
pub struct LogOptions {
    /// Show informational messages.
    pub verbose: bool,
    /// Show debug messages.
    pub debug: bool,
    /// Report timings of instrumented stages.
    pub benchmark: bool,
}

impl LogOptions {
    fn default_directive(self) -> &'static str {
        if self.debug {
            "debug"
        } else if self.verbose {
            "info"
        } else {
            "warn"
        }
    }

    fn span_events(self) -> FmtSpan {
        if self.benchmark {
            FmtSpan::CLOSE
        } else {
            FmtSpan::NONE
        }
    }
}

/// Errors raised while initialising structured logging.
#[derive(Debug, Error)]
pub enum LoggingError {
    /// Failed to install the global tracing subscriber.
    #[error("failed to install tracing subscriber: {source}")]
    InstallFailed {
        /// Error raised by `tracing_subscriber`.
        #[source]
        source: tracing_subscriber::util::TryInitError,
    },
}

/// Install global structured logging if it has not already been configured.
///
/// Diagnostics go to stderr so pipeline output on stdout or in files stays
/// clean. Repeated calls are no-ops; a subscriber installed elsewhere (for
/// example by a test harness) is left in place.
///
/// # Errors
/// Returns [`LoggingError`] if the subscriber cannot be installed for any
/// reason other than one already being present.
pub fn init_logging(options: LogOptions) -> Result<(), LoggingError> {
    if INITIALISED.get().is_some() {
        return Ok(());
    }

    match install_subscriber(options) {
        Ok(()) => {}
        Err(LoggingError::InstallFailed { source }) => {
            eprintln!("structured logging already configured elsewhere: {source}");
        }
    }
    let _ = INITIALISED.set(());
    Ok(())
}

fn install_subscriber(options: LogOptions) -> Result<(), LoggingError> {
    let env_filter = match env::var("RUST_LOG") {
        Ok(_) => EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new(options.default_directive())),
        Err(_) => EnvFilter::new(options.default_directive()),
    };

    let fmt_layer = tracing_subscriber::fmt::layer()
        .with_span_events(options.span_events())
        .with_writer(std::io::stderr);

    // Bridging the log facade is best-effort; another logger owning the
    // global slot keeps its configuration.
    let _ = LogTracer::init();

    tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt_layer)
        .try_init()
        .map_err(|source| LoggingError::InstallFailed { source })
}

#[cfg(test)]
mod tests {
    use super::*;

    use rstest::rstest;

    #[rstest]
    #[case(LogOptions::default(), "warn")]
    #[case(LogOptions { verbose: true, ..LogOptions::default() }, "info")]
    #[case(LogOptions { debug: true, ..LogOptions::default() }, "debug")]
    #[case(LogOptions { verbose: true, debug: true, benchmark: false }, "debug")]
    fn flags_map_to_filter_directives(#[case] options: LogOptions, #[case] expected: &str) {
        assert_eq!(options.default_directive(), expected);
    }

    #[test]
    fn init_logging_is_idempotent() {
        let options = LogOptions::default();
        init_logging(options).expect("logging must initialise");
        init_logging(options).expect("subsequent calls must be no-ops");
    }
}
