//! Configuration-space primitives for manip (Layer 1).
//!
//! `manip_core` provides the vocabulary shared by the constraint graph and
//! the planning components built on it: configurations, time-parameterized
//! paths (atomic and composite), constraints with projection, and local
//! steering.
//!
//! # Core Concepts
//!
//! - [`Configuration`] - A point in configuration space
//! - [`Path`] - A motion over a closed time interval, evaluable and extractable
//! - [`PathVector`] - A composite path made of contiguous sub-paths
//! - [`ConstraintSet`] - A conjunction of [`Constraint`]s with projection
//! - [`SteeringMethod`] - Builds local paths between configurations
//!
//! # Example
//!
//! ```
//! use std::sync::Arc;
//!
//! use manip_core::prelude::*;
//!
//! let transfer = Arc::new(ConstraintSet::new("transfer").with(LockedJoint::new("grip", 1, 1.0)));
//! let steering = StraightSteering::with_constraints(transfer);
//!
//! let path = steering
//!     .compute(&Configuration::from([0.0, 1.0]), &Configuration::from([2.0, 1.0]))
//!     .unwrap();
//! assert_eq!(path.eval(1.0).unwrap(), Configuration::from([1.0, 1.0]));
//! ```
//!
//! # Architecture
//!
//! - **Layer 1** (`manip_core`): configuration-space primitives (this crate)
//! - **Layer 2** (`manip_graph`): constraint graph and state selection
//! - **Layer 3** (`manip_planning`): graph-aware path validation and steering

/// Robot configurations.
pub mod configuration;

/// Constraints and constraint sets.
pub mod constraint;

/// Error types.
pub mod error;

/// The path abstraction.
pub mod path;

/// Composite paths.
pub mod path_vector;

/// Local steering.
pub mod steering;

/// Straight-line paths.
pub mod straight_path;

/// Re-export all common types for easy access.
pub mod prelude {
    pub use crate::configuration::Configuration;
    pub use crate::constraint::{
        Constraint, ConstraintSet, FnConstraint, LockedJoint, SharedConstraint,
    };
    pub use crate::error::{PathError, ProjectionError};
    pub use crate::path::{BoxedPath, Path, TimeRange};
    pub use crate::path_vector::PathVector;
    pub use crate::steering::{SteeringMethod, StraightSteering};
    pub use crate::straight_path::StraightPath;
}

pub use configuration::Configuration;
pub use constraint::{Constraint, ConstraintSet};
pub use error::{PathError, ProjectionError};
pub use path::{BoxedPath, Path, TimeRange};
pub use path_vector::PathVector;
pub use steering::{SteeringMethod, StraightSteering};
pub use straight_path::StraightPath;
