//! Diagnostics for manip.
//!
//! The planning crates only emit [`tracing`] events. Applications and tests
//! that want to see them install a subscriber with [`TracingConfig`].
//!
//! ```
//! use manip_diagnostics::{TracingConfig, TracingFormat};
//! use tracing::Level;
//!
//! TracingConfig::default()
//!     .with_level(Level::DEBUG)
//!     .with_format(TracingFormat::Compact)
//!     .with_env_filter("manip_planning=trace,manip_graph=debug")
//!     .init();
//! ```

/// Tracing subscriber configuration.
pub mod tracing;

pub use crate::tracing::{TracingConfig, TracingFormat};
