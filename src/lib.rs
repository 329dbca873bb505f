//! Typed logging facade over a pluggable backend.
//!
//! This crate separates *what* gets logged from *how* it is logged. Call
//! sites declare typed message catalogs — enums pairing a fixed severity
//! with a fixed `{}` template — and log them through a thin [`Logger`]
//! facade. The facade asks the backend whether the message's level is
//! enabled and only then hands over the template and arguments, so a
//! disabled message costs one query and no formatting.
//!
//! Formatting, filtering, sinks and rotation all belong to the backend.
//! The default backend adapts the `tracing` ecosystem; [`NoopBackend`]
//! silences everything for tests.
//!
//! # Example
//!
//! ```
//! use typelog::{messages, Logger, NoopBackend};
//!
//! messages! {
//!     /// Messages emitted by the downloader.
//!     enum DownloadMessage {
//!         Started = (Info, "Downloading {}"),
//!         Retrying = (Warn, "Retrying {} (attempt {})"),
//!     }
//! }
//!
//! let logger = Logger::with_backend(&NoopBackend, "app::download");
//! typelog::log!(logger, DownloadMessage::Started, "tile-12");
//! typelog::log!(logger, DownloadMessage::Retrying, "tile-12", 2);
//! ```
//!
//! In production, install a backend once at startup (or let the first
//! [`Logger::get`] fall back to [`TracingBackend`]) and initialize a
//! `tracing` subscriber via [`subscriber::init_subscriber`].

pub mod backend;
pub mod facade;
pub mod level;
pub mod message;
pub mod subscriber;

pub use backend::{Backend, BackendHandle, InstallError, NoopBackend, TracingBackend, install};
pub use facade::Logger;
pub use level::{Level, ParseLevelError};
pub use message::LogMessage;
pub use subscriber::{SubscriberGuard, init_subscriber};

/// Version of the typelog library.
///
/// The version is defined in `Cargo.toml` and injected at compile time.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
