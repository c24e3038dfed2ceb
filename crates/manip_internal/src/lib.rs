//! # manip Internal Library
//!
//! Re-exports the core manip crates for convenience.

/// Layer 1: Configuration-space primitives.
pub use manip_core;

/// Layer 2: Constraint graph and state selection.
pub use manip_graph;

/// Layer 3: Graph-aware path validation and steering.
pub use manip_planning;

/// Tracing subscriber setup.
#[cfg(feature = "diagnostics")]
pub use manip_diagnostics;

/// Re-export all common types for easy access.
pub mod prelude {
    pub use manip_core::prelude::*;
    pub use manip_graph::prelude::*;
    pub use manip_planning::prelude::*;
}
