//! Priority-ordered state selection.
//!
//! A configuration can satisfy the constraints of several states at once,
//! for instance an object that is both grasped and resting on a table.
//! The [`StateSelector`] resolves this by priority: candidates are checked
//! in order and the first one whose constraints hold wins.
//!
//! # Example
//!
//! ```
//! use manip_core::configuration::Configuration;
//! use manip_core::constraint::{ConstraintSet, FnConstraint};
//! use manip_graph::selector::StateSelector;
//! use manip_graph::state::{State, StateId};
//!
//! let selector = StateSelector::new(vec![
//!     State::new(
//!         StateId::new(0),
//!         "positive",
//!         ConstraintSet::new("positive").with(FnConstraint::new("x>0", |q| q[0] > 0.0)),
//!     ),
//!     State::new(StateId::new(1), "anywhere", ConstraintSet::new("anywhere")),
//! ]);
//!
//! assert_eq!(selector.get_state(&Configuration::from([5.0])).unwrap().name(), "positive");
//! assert_eq!(selector.get_state(&Configuration::from([-1.0])).unwrap().name(), "anywhere");
//! ```

use manip_core::configuration::Configuration;

use crate::error::GraphError;
use crate::state::{State, StateId};

/// Classifies configurations into states by priority.
///
/// The ordered sequence is fixed at construction. Classification depends
/// only on that order and on the states' constraints, never on previous
/// queries.
#[derive(Debug, Clone, Default)]
pub struct StateSelector {
    states: Vec<State>,
}

impl StateSelector {
    /// Creates a selector from states ordered by decreasing priority.
    #[must_use]
    pub fn new(states: Vec<State>) -> Self {
        Self { states }
    }

    /// Returns the highest-priority state whose constraints `q` satisfies.
    ///
    /// # Errors
    ///
    /// Returns [`GraphError::NoMatchingState`] if no candidate matches. A
    /// selector without a catch-all state is a setup problem; callers that
    /// need every configuration classified must provide one.
    pub fn get_state(&self, q: &Configuration) -> Result<&State, GraphError> {
        self.states
            .iter()
            .find(|state| state.contains(q))
            .ok_or_else(|| GraphError::NoMatchingState {
                configuration: q.clone(),
            })
    }

    /// Returns the candidate states, highest priority first.
    #[must_use]
    pub fn states(&self) -> &[State] {
        &self.states
    }

    /// Gets a state by ID.
    #[must_use]
    pub fn state(&self, id: StateId) -> Option<&State> {
        self.states.iter().find(|state| state.id() == id)
    }

    /// Returns the priority rank of a state (0 is highest).
    #[must_use]
    pub fn position(&self, id: StateId) -> Option<usize> {
        self.states.iter().position(|state| state.id() == id)
    }

    /// Returns the number of candidate states.
    #[must_use]
    pub fn len(&self) -> usize {
        self.states.len()
    }

    /// Returns `true` if there are no candidate states.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.states.is_empty()
    }
}
