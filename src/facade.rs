//! The logging facade.

use std::fmt::{self, Display};
use std::sync::Arc;

use crate::backend::{self, Backend, BackendHandle};
use crate::level::Level;
use crate::message::LogMessage;

/// A named logging facade wrapping one backend handle.
///
/// A `Logger` holds nothing but a shared reference to its backend handle:
/// it is cheap to clone, safe to share across threads without locking, and
/// every call is independent. Callers conventionally create one per module,
/// named after the module path, and reuse it.
///
/// The facade's whole job is the guard-then-delegate protocol: check with
/// the backend whether a message's level is enabled, and only then hand the
/// template and arguments over. Disabled messages cost one query and no
/// formatting. Backend panics are not caught; the facade adds no failure
/// handling of its own.
///
/// # Example
///
/// ```
/// use typelog::{messages, Logger, NoopBackend};
///
/// messages! {
///     enum FetchMessage {
///         Completed = (Info, "Fetched {} records in {} ms"),
///     }
/// }
///
/// let logger = Logger::with_backend(&NoopBackend, "app::fetch");
/// typelog::log!(logger, FetchMessage::Completed, 42, 17);
/// ```
#[derive(Clone)]
pub struct Logger {
    handle: Arc<dyn BackendHandle>,
}

impl Logger {
    /// Returns a logger named `name`, backed by the installed backend.
    ///
    /// `name` conventionally identifies the owning module
    /// (`module_path!()` is a good choice). Handle acquisition never
    /// fails; when no backend was installed via [`crate::install`], the
    /// default [`TracingBackend`](crate::TracingBackend) is used.
    pub fn get(name: &str) -> Logger {
        Logger {
            handle: backend::installed().handle(name),
        }
    }

    /// Returns a logger named `name`, backed by the given backend.
    ///
    /// Bypasses the process-wide registry. This is the seam for tests and
    /// for embedding the facade where the backend is injected rather than
    /// global.
    pub fn with_backend(backend: &dyn Backend, name: &str) -> Logger {
        Logger {
            handle: backend.handle(name),
        }
    }

    /// Whether a message at `level` would currently be emitted.
    ///
    /// A pure query against the backend's live configuration; the answer
    /// may change at runtime if the backend supports dynamic thresholds.
    pub fn enabled(&self, level: Level) -> bool {
        match level {
            Level::Error => self.handle.error_enabled(),
            Level::Warn => self.handle.warn_enabled(),
            Level::Info => self.handle.info_enabled(),
            Level::Debug => self.handle.debug_enabled(),
            Level::Trace => self.handle.trace_enabled(),
        }
    }

    /// Whether `message` would currently be emitted.
    ///
    /// Equivalent to `self.enabled(message.level())`. Callers can use this
    /// to guard expensive argument construction, which the facade itself
    /// cannot protect.
    pub fn message_enabled(&self, message: &dyn LogMessage) -> bool {
        self.enabled(message.level())
    }

    /// Logs `message` with no placeholder arguments, if enabled.
    pub fn log(&self, message: &dyn LogMessage) {
        self.log_args(message, &[]);
    }

    /// Logs `message` with the given placeholder arguments, if enabled.
    ///
    /// When the message's level is disabled this returns without reading
    /// the template or touching the backend. When enabled, exactly one
    /// emission is made, on the backend method matching the level, with
    /// the template and arguments passed through unchanged. The argument
    /// count is not checked against the template's placeholders; the
    /// backend decides how mismatches render.
    pub fn log_args(&self, message: &dyn LogMessage, args: &[&dyn Display]) {
        if !self.message_enabled(message) {
            return;
        }
        let template = message.template();
        match message.level() {
            Level::Error => self.handle.emit_error(template, args),
            Level::Warn => self.handle.emit_warn(template, args),
            Level::Info => self.handle.emit_info(template, args),
            Level::Debug => self.handle.emit_debug(template, args),
            Level::Trace => self.handle.emit_trace(template, args),
        }
    }
}

impl fmt::Debug for Logger {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Logger").finish_non_exhaustive()
    }
}

/// Logs a typed message through a [`Logger`] with any number of
/// placeholder arguments.
///
/// Expands to [`Logger::log`] for the zero-argument form and to
/// [`Logger::log_args`] otherwise. Arguments only need to implement
/// [`std::fmt::Display`].
///
/// ```
/// use typelog::{messages, Logger, NoopBackend};
///
/// messages! {
///     enum TickMessage {
///         Tick = (Trace, "tick"),
///         Skewed = (Warn, "clock skew of {} ms"),
///     }
/// }
///
/// let logger = Logger::with_backend(&NoopBackend, "app::clock");
/// typelog::log!(logger, TickMessage::Tick);
/// typelog::log!(logger, TickMessage::Skewed, 250);
/// ```
#[macro_export]
macro_rules! log {
    ($logger:expr, $message:expr $(,)?) => {
        $logger.log(&$message)
    };
    ($logger:expr, $message:expr, $($arg:expr),+ $(,)?) => {
        $logger.log_args(&$message, &[$(&$arg as &dyn ::std::fmt::Display),+])
    };
}
