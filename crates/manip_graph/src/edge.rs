//! Edges of a constraint graph.
//!
//! An edge is a directed transition between two states. Besides its
//! endpoints it carries the constraints that hold along its paths, which
//! may be weaker than those of the states it connects, and the steering
//! primitive used to build those paths.

use core::fmt;
use std::sync::Arc;

use manip_core::configuration::Configuration;
use manip_core::constraint::ConstraintSet;
use manip_core::path::BoxedPath;
use manip_core::steering::SteeringMethod;

use crate::state::StateId;

/// Unique identifier for an edge in a constraint graph.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct EdgeId(pub(crate) usize);

impl EdgeId {
    /// Creates a new edge ID.
    #[must_use]
    pub fn new(id: usize) -> Self {
        Self(id)
    }

    /// Returns the raw ID value.
    #[must_use]
    pub fn index(&self) -> usize {
        self.0
    }
}

impl fmt::Display for EdgeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "edge_{}", self.0)
    }
}

/// A directed transition between two states.
pub struct Edge {
    id: EdgeId,
    name: String,
    from: StateId,
    to: StateId,
    path_constraints: Arc<ConstraintSet>,
    steering: Box<dyn SteeringMethod>,
}

impl Edge {
    /// Creates a new edge.
    pub fn new(
        id: EdgeId,
        name: impl Into<String>,
        from: StateId,
        to: StateId,
        path_constraints: Arc<ConstraintSet>,
        steering: Box<dyn SteeringMethod>,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            from,
            to,
            path_constraints,
            steering,
        }
    }

    /// Returns the edge's ID.
    #[must_use]
    pub fn id(&self) -> EdgeId {
        self.id
    }

    /// Returns the edge's name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the origin state.
    #[must_use]
    pub fn from(&self) -> StateId {
        self.from
    }

    /// Returns the destination state.
    #[must_use]
    pub fn to(&self) -> StateId {
        self.to
    }

    /// Returns the constraints that hold along this edge's paths.
    #[must_use]
    pub fn path_constraints(&self) -> &ConstraintSet {
        &self.path_constraints
    }

    /// Builds a path from `from` to `to` following this edge.
    ///
    /// Returns `None` if either configuration violates the edge's path
    /// constraints or if the steering primitive fails.
    #[must_use]
    pub fn build(&self, from: &Configuration, to: &Configuration) -> Option<BoxedPath> {
        if !self.path_constraints.is_satisfied(from) || !self.path_constraints.is_satisfied(to) {
            tracing::trace!(
                edge = %self.name,
                "endpoints violate the edge's path constraints"
            );
            return None;
        }
        self.steering.compute(from, to)
    }
}

impl fmt::Debug for Edge {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Edge")
            .field("id", &self.id)
            .field("name", &self.name)
            .field("from", &self.from)
            .field("to", &self.to)
            .field("path_constraints", &self.path_constraints.name())
            .finish()
    }
}
