//! States of a constraint graph.
//!
//! A state is a discrete label for the region of configuration space
//! satisfying its constraint set, e.g. "object grasped" or "object on
//! table".

use core::fmt;

use manip_core::configuration::Configuration;
use manip_core::constraint::ConstraintSet;

/// Unique identifier for a state in a constraint graph.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct StateId(pub(crate) usize);

impl StateId {
    /// Creates a new state ID.
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

impl fmt::Display for StateId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "state_{}", self.0)
    }
}

/// A named region of configuration space defined by a constraint set.
#[derive(Debug, Clone)]
pub struct State {
    id: StateId,
    name: String,
    constraints: ConstraintSet,
}

impl State {
    /// Creates a new state.
    pub fn new(id: StateId, name: impl Into<String>, constraints: ConstraintSet) -> Self {
        Self {
            id,
            name: name.into(),
            constraints,
        }
    }

    /// Returns the state's ID.
    #[must_use]
    pub fn id(&self) -> StateId {
        self.id
    }

    /// Returns the state's name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the constraints a configuration must satisfy to belong here.
    #[must_use]
    pub fn constraints(&self) -> &ConstraintSet {
        &self.constraints
    }

    /// Returns `true` if `q` satisfies this state's constraints.
    #[must_use]
    pub fn contains(&self, q: &Configuration) -> bool {
        self.constraints.is_satisfied(q)
    }
}
