//! Logging infrastructure for structured console output.
//!
//! A thin facade over `tracing`: commands talk to [`Logger`] and never to the
//! subscriber directly, so tests can run without a global subscriber and the
//! console format stays in one place.

use tracing_subscriber::EnvFilter;

/// Console logger for command output.
#[derive(Debug, Clone, Copy)]
pub struct Logger {
    verbose: bool,
}

impl Logger {
    /// Create a logger and install the global subscriber.
    ///
    /// Verbose mode lowers the console filter to `debug`; either way
    /// `RUST_LOG` takes precedence when set. Installation failure is ignored
    /// so tests may construct multiple loggers.
    #[must_use]
    pub fn new(verbose: bool) -> Self {
        let default_filter = if verbose { "debug" } else { "info" };
        let filter = EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new(default_filter));
        let _ = tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(false)
            .without_time()
            .try_init();
        Self { verbose }
    }

    /// Whether verbose output was requested.
    #[must_use]
    pub const fn is_verbose(&self) -> bool {
        self.verbose
    }

    /// Log a stage header (major section).
    pub fn stage(&self, msg: &str) {
        tracing::info!(target: "devshell::stage", "==> {msg}");
    }

    /// Log an informational message.
    pub fn info(&self, msg: &str) {
        tracing::info!("{msg}");
    }

    /// Log a debug message (suppressed unless verbose or `RUST_LOG` says
    /// otherwise).
    pub fn debug(&self, msg: &str) {
        tracing::debug!("{msg}");
    }

    /// Log a warning message.
    pub fn warn(&self, msg: &str) {
        tracing::warn!("{msg}");
    }

    /// Log an error message.
    pub fn error(&self, msg: &str) {
        tracing::error!("{msg}");
    }

    /// Log a dry-run action message.
    pub fn dry_run(&self, msg: &str) {
        tracing::info!(target: "devshell::dry_run", "[dry run] {msg}");
    }
}
