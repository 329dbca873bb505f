//! Silent backend.

use std::fmt::Display;
use std::sync::Arc;

use super::{Backend, BackendHandle};

/// A backend that reports every level disabled and discards all emissions.
///
/// Useful for unit tests where log output would be noise, and for silent
/// operation modes.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopBackend;

impl Backend for NoopBackend {
    fn handle(&self, _name: &str) -> Arc<dyn BackendHandle> {
        Arc::new(NoopHandle)
    }
}

#[derive(Debug)]
struct NoopHandle;

impl BackendHandle for NoopHandle {
    fn trace_enabled(&self) -> bool {
        false
    }

    fn debug_enabled(&self) -> bool {
        false
    }

    fn info_enabled(&self) -> bool {
        false
    }

    fn warn_enabled(&self) -> bool {
        false
    }

    fn error_enabled(&self) -> bool {
        false
    }

    fn emit_trace(&self, _template: &str, _args: &[&dyn Display]) {}

    fn emit_debug(&self, _template: &str, _args: &[&dyn Display]) {}

    fn emit_info(&self, _template: &str, _args: &[&dyn Display]) {}

    fn emit_warn(&self, _template: &str, _args: &[&dyn Display]) {}

    fn emit_error(&self, _template: &str, _args: &[&dyn Display]) {}
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_noop_backend_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<NoopBackend>();
    }

    #[test]
    fn test_every_level_is_disabled() {
        let handle = NoopBackend.handle("test");
        assert!(!handle.trace_enabled());
        assert!(!handle.debug_enabled());
        assert!(!handle.info_enabled());
        assert!(!handle.warn_enabled());
        assert!(!handle.error_enabled());
    }

    #[test]
    fn test_emissions_are_discarded() {
        let handle = NoopBackend.handle("test");
        handle.emit_trace("discarded {}", &[&1]);
        handle.emit_debug("discarded {}", &[&2]);
        handle.emit_info("discarded {}", &[&3]);
        handle.emit_warn("discarded {}", &[&4]);
        handle.emit_error("discarded {}", &[&5]);
    }
}
