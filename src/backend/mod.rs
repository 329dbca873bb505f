//! Backend collaborator contract and process-wide registry.
//!
//! The facade owns none of the logging machinery. Formatting, filtering,
//! sinks and rotation all live behind the [`Backend`] and [`BackendHandle`]
//! traits, so any engine can be plugged in and tests can substitute a
//! recording double.
//!
//! Two implementations ship with the crate:
//!
//! - [`TracingBackend`]: production adapter over the `tracing` ecosystem
//! - [`NoopBackend`]: discards everything, for tests and silent modes

mod noop;
mod tracing_adapter;

pub use noop::NoopBackend;
pub use tracing_adapter::TracingBackend;

use std::fmt::Display;
use std::sync::{Arc, OnceLock};
use thiserror::Error;

/// A logging engine that produces named logger handles.
pub trait Backend: Send + Sync {
    /// Returns the handle identified by `name`, creating it if needed.
    ///
    /// Handle acquisition is infallible; a backend that cannot produce a
    /// handle is misconfigured beyond recovery and should panic rather
    /// than hand back a broken one.
    fn handle(&self, name: &str) -> Arc<dyn BackendHandle>;
}

/// A named logger handle inside a backend.
///
/// Enablement queries are pure and must reflect the backend's live
/// configuration, which may change at runtime. Emission methods receive
/// the raw template and arguments; placeholder substitution and output
/// are entirely the backend's business.
pub trait BackendHandle: Send + Sync {
    /// Whether trace-level messages would be emitted.
    fn trace_enabled(&self) -> bool;

    /// Whether debug-level messages would be emitted.
    fn debug_enabled(&self) -> bool;

    /// Whether info-level messages would be emitted.
    fn info_enabled(&self) -> bool;

    /// Whether warn-level messages would be emitted.
    fn warn_enabled(&self) -> bool;

    /// Whether error-level messages would be emitted.
    fn error_enabled(&self) -> bool;

    /// Emits a trace-level message.
    fn emit_trace(&self, template: &str, args: &[&dyn Display]);

    /// Emits a debug-level message.
    fn emit_debug(&self, template: &str, args: &[&dyn Display]);

    /// Emits an info-level message.
    fn emit_info(&self, template: &str, args: &[&dyn Display]);

    /// Emits a warn-level message.
    fn emit_warn(&self, template: &str, args: &[&dyn Display]);

    /// Emits an error-level message.
    fn emit_error(&self, template: &str, args: &[&dyn Display]);
}

/// Error returned when a backend is installed twice.
#[derive(Debug, Error)]
#[error("A logging backend is already installed")]
pub struct InstallError;

static BACKEND: OnceLock<Arc<dyn Backend>> = OnceLock::new();

/// Installs the process-wide backend used by [`Logger::get`].
///
/// Call this once during startup, before the first `Logger::get`. Once a
/// backend is installed (or the default has been materialized by a `get`)
/// it stays for the life of the process.
///
/// # Errors
///
/// Returns [`InstallError`] if a backend is already installed.
///
/// [`Logger::get`]: crate::Logger::get
pub fn install(backend: Arc<dyn Backend>) -> Result<(), InstallError> {
    BACKEND.set(backend).map_err(|_| InstallError)
}

/// The installed backend, defaulting to [`TracingBackend`].
pub(crate) fn installed() -> &'static Arc<dyn Backend> {
    BACKEND.get_or_init(|| Arc::new(TracingBackend::new()))
}
