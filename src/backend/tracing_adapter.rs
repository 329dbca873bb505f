//! Backend adapter for the `tracing` ecosystem.

use std::fmt::{Display, Write};
use std::sync::Arc;

use super::{Backend, BackendHandle};

/// Backend that delegates emissions to the `tracing` crate.
///
/// Enablement queries go through `tracing::enabled!`, so they follow the
/// active subscriber's filter configuration, including filters reloaded at
/// runtime. Emissions substitute the template's `{}` placeholders and
/// attach the handle name as a `logger` field on the event.
///
/// # Example
///
/// ```ignore
/// use typelog::{install, TracingBackend};
/// use std::sync::Arc;
///
/// // Assumes a tracing subscriber is already initialized
/// install(Arc::new(TracingBackend::new()))?;
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingBackend;

impl TracingBackend {
    /// Creates a new tracing backend.
    pub fn new() -> Self {
        Self
    }
}

impl Backend for TracingBackend {
    fn handle(&self, name: &str) -> Arc<dyn BackendHandle> {
        Arc::new(TracingHandle {
            name: name.to_string(),
        })
    }
}

/// Named handle emitting `tracing` events.
#[derive(Debug)]
struct TracingHandle {
    name: String,
}

impl BackendHandle for TracingHandle {
    fn trace_enabled(&self) -> bool {
        tracing::enabled!(tracing::Level::TRACE)
    }

    fn debug_enabled(&self) -> bool {
        tracing::enabled!(tracing::Level::DEBUG)
    }

    fn info_enabled(&self) -> bool {
        tracing::enabled!(tracing::Level::INFO)
    }

    fn warn_enabled(&self) -> bool {
        tracing::enabled!(tracing::Level::WARN)
    }

    fn error_enabled(&self) -> bool {
        tracing::enabled!(tracing::Level::ERROR)
    }

    fn emit_trace(&self, template: &str, args: &[&dyn Display]) {
        tracing::trace!(logger = %self.name, "{}", render(template, args));
    }

    fn emit_debug(&self, template: &str, args: &[&dyn Display]) {
        tracing::debug!(logger = %self.name, "{}", render(template, args));
    }

    fn emit_info(&self, template: &str, args: &[&dyn Display]) {
        tracing::info!(logger = %self.name, "{}", render(template, args));
    }

    fn emit_warn(&self, template: &str, args: &[&dyn Display]) {
        tracing::warn!(logger = %self.name, "{}", render(template, args));
    }

    fn emit_error(&self, template: &str, args: &[&dyn Display]) {
        tracing::error!(logger = %self.name, "{}", render(template, args));
    }
}

/// Substitutes positional `{}` placeholders left to right.
///
/// Each placeholder consumes the next argument. A placeholder without a
/// matching argument stays literal; surplus arguments are ignored.
fn render(template: &str, args: &[&dyn Display]) -> String {
    let mut out = String::with_capacity(template.len() + args.len() * 8);
    let mut rest = template;
    let mut args = args.iter();

    while let Some(pos) = rest.find("{}") {
        out.push_str(&rest[..pos]);
        match args.next() {
            Some(arg) => {
                // Writing into a String cannot fail.
                let _ = write!(out, "{}", arg);
            }
            None => out.push_str("{}"),
        }
        rest = &rest[pos + 2..];
    }
    out.push_str(rest);
    out
}
