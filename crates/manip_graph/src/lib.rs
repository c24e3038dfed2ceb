//! Constraint graph primitives for manip (Layer 2).
//!
//! `manip_graph` models the discrete side of manipulation planning: a
//! directed graph whose states are regions of configuration space (grasp
//! and placement modes) and whose edges are the transitions a robot may
//! perform between them.
//!
//! # Core Concepts
//!
//! - [`ConstraintGraph`] - Immutable graph of states and edges
//! - [`GraphBuilder`] - Builder API with structural validation
//! - [`State`] - A named constraint set
//! - [`Edge`] - A transition with its own path constraints and steering
//! - [`StateSelector`] - Priority-ordered classification of configurations
//!
//! # Architecture
//!
//! - **Layer 1** (`manip_core`): configuration-space primitives
//! - **Layer 2** (`manip_graph`): constraint graph and state selection (this crate)
//! - **Layer 3** (`manip_planning`): graph-aware path validation and steering

/// Edges between states.
pub mod edge;

/// Error types for graph queries.
pub mod error;

/// Graph structure and builder API.
pub mod graph;

/// Priority-ordered state selection.
pub mod selector;

/// States of the graph.
pub mod state;

/// Re-export all common types for easy access.
pub mod prelude {
    pub use crate::edge::{Edge, EdgeId};
    pub use crate::error::GraphError;
    pub use crate::graph::{ConstraintGraph, GraphBuilder, ValidationError};
    pub use crate::selector::StateSelector;
    pub use crate::state::{State, StateId};
}

pub use edge::{Edge, EdgeId};
pub use error::GraphError;
pub use graph::{ConstraintGraph, GraphBuilder, ValidationError};
pub use selector::StateSelector;
pub use state::{State, StateId};
