//! Graph-aware path validation and steering for manip (Layer 3).
//!
//! `manip_planning` connects the constraint graph to the continuous side of
//! planning. Paths are built along graph edges and validated so that any
//! truncated part still links the same pair of states as the path it was
//! cut from.
//!
//! # Core Concepts
//!
//! - [`PathValidator`] - Checks a path and returns its longest valid part
//! - [`GraphPathValidation`] - Wraps a validator with state consistency checks
//! - [`GraphSteeringMethod`] - Builds paths along the edges of the graph
//! - [`DiscretizedCollisionValidation`] - Sampling-based collision checking
//! - [`Outcome`] - Why a path was not fully valid
//!
//! # Errors
//!
//! Collisions and missing paths are ordinary results: an [`Outcome`] or a
//! `None` from steering. [`PlanningError`] is reserved for contradictions
//! in the problem setup, such as a path that cannot be evaluated at its own
//! endpoints.
//!
//! # Architecture
//!
//! - **Layer 1** (`manip_core`): configuration-space primitives
//! - **Layer 2** (`manip_graph`): constraint graph and state selection
//! - **Layer 3** (`manip_planning`): graph-aware path validation and steering (this crate)

/// Validation settings.
pub mod config;

/// Sampling-based collision checking.
pub mod discretized;

/// Error types.
pub mod error;

/// Steering along graph edges.
pub mod graph_steering;

/// Graph-aware path validation.
pub mod graph_validation;

/// Configuration-space obstacles.
pub mod obstacle;

/// Validation results and the validator trait.
pub mod validation;

/// Re-export all common types for easy access.
pub mod prelude {
    pub use crate::config::ValidationConfig;
    pub use crate::discretized::DiscretizedCollisionValidation;
    pub use crate::error::{ConfigError, Endpoint, PlanningError};
    pub use crate::graph_steering::GraphSteeringMethod;
    pub use crate::graph_validation::GraphPathValidation;
    pub use crate::obstacle::{BoxObstacle, Obstacle, SharedObstacle};
    pub use crate::validation::{Outcome, PathValidation, PathValidator, ValidationReport};
}

pub use config::ValidationConfig;
pub use discretized::DiscretizedCollisionValidation;
pub use error::{ConfigError, Endpoint, PlanningError};
pub use graph_steering::GraphSteeringMethod;
pub use graph_validation::GraphPathValidation;
pub use obstacle::{BoxObstacle, Obstacle, SharedObstacle};
pub use validation::{Outcome, PathValidation, PathValidator, ValidationReport};
