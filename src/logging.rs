//! Logger handle for the diff engine.
//!
//! Nothing is installed globally. The CLI builds a [`Logger`] from the
//! verbosity flags and hands it to the engine, which scopes its work with
//! the logger's dispatcher.

use tracing::Dispatch;
use tracing::level_filters::LevelFilter;

/// Logging verbosity.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Verbosity {
    /// Errors only.
    #[default]
    Quiet,
    /// Per-file progress (`--verbose`).
    Verbose,
    /// Commands and resolution details (`--debug`).
    Debug,
}

impl Verbosity {
    /// `debug` wins over `verbose`.
    pub fn from_flags(verbose: bool, debug: bool) -> Self {
        match (verbose, debug) {
            (_, true) => Verbosity::Debug,
            (true, false) => Verbosity::Verbose,
            (false, false) => Verbosity::Quiet,
        }
    }

    pub fn level_filter(self) -> LevelFilter {
        match self {
            Verbosity::Quiet => LevelFilter::ERROR,
            Verbosity::Verbose => LevelFilter::INFO,
            Verbosity::Debug => LevelFilter::DEBUG,
        }
    }
}

/// Explicit logging handle.
#[derive(Clone)]
pub struct Logger {
    dispatch: Dispatch,
}

impl Logger {
    /// Log to stderr at the given verbosity.
    pub fn stderr(verbosity: Verbosity) -> Self {
        let subscriber = tracing_subscriber::fmt()
            .with_writer(std::io::stderr)
            .with_max_level(verbosity.level_filter())
            .with_target(true)
            .with_ansi(false)
            .finish();

        Self {
            dispatch: Dispatch::new(subscriber),
        }
    }

    /// Drop every event.
    pub fn disabled() -> Self {
        Self {
            dispatch: Dispatch::none(),
        }
    }

    /// Wrap an existing dispatcher (e.g. a capturing subscriber in tests).
    pub fn from_dispatch(dispatch: Dispatch) -> Self {
        Self { dispatch }
    }

    /// Run `f` with this logger as the current default.
    pub fn scope<T>(&self, f: impl FnOnce() -> T) -> T {
        tracing::dispatcher::with_default(&self.dispatch, f)
    }
}

impl std::fmt::Debug for Logger {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Logger").finish_non_exhaustive()
    }
}
