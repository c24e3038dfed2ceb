//! Constraint-graph manipulation planning in Rust.
//!
//! A manipulation problem is split into discrete *states* (the object is
//! resting, the object is grasped) joined by *edges* (transit, grasp,
//! transfer). This crate provides the pieces a planner needs to move
//! through such a graph:
//!
//! - priority-ordered classification of configurations into states,
//! - steering that connects two configurations along a graph edge,
//! - path validation that keeps truncated paths on the same pair of states.
//!
//! # Example
//!
//! A gripper moves along `x`; coordinate `1` is the gripper opening, and an
//! object can only be grasped at `x = 1`.
//!
//! ```
//! use std::sync::Arc;
//!
//! use manip::prelude::*;
//!
//! let mut builder = ConstraintGraph::builder("pick").with_dimension(2);
//! let grasped = builder.add_state(
//!     "grasped",
//!     ConstraintSet::new("grasped").with(FnConstraint::new("closed", |q| q[1] == 1.0)),
//! );
//! let free = builder.add_state("free", ConstraintSet::new("free"));
//! builder.add_edge("transit", free, free, ConstraintSet::new("transit").with(LockedJoint::new("open", 1, 0.0)));
//! builder.add_edge("grasp", free, grasped, ConstraintSet::new("grasp").with(FnConstraint::new("at object", |q| q[0] == 1.0)));
//! let graph = builder.build().unwrap();
//!
//! // Closed gripper wins over the catch-all state.
//! assert_eq!(graph.get_state(&Configuration::from([1.0, 1.0])).unwrap().id(), grasped);
//!
//! let steering = GraphSteeringMethod::new(&graph);
//! let path = steering
//!     .compute(&Configuration::from([-1.0, 0.0]), &Configuration::from([3.0, 0.0]))
//!     .unwrap();
//!
//! let inner = DiscretizedCollisionValidation::new(&ValidationConfig::default()).unwrap();
//! let mut validation = GraphPathValidation::new(&graph, Box::new(inner));
//! validation.add_obstacle(Arc::new(BoxObstacle::new("crate", [2.0], [2.5])));
//!
//! let result = validation.validate(&*path, false).unwrap();
//! assert!(matches!(result.outcome, Outcome::Collision(_)));
//! assert!(result.valid_part.end().unwrap()[0] < 2.0);
//! ```

pub use manip_internal::*;

/// Re-export all common types for easy access.
pub mod prelude {
    pub use manip_internal::prelude::*;
}
