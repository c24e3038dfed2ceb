//! Constraint graph structure and builder API.
//!
//! The [`ConstraintGraph`] holds the discrete structure of a manipulation
//! problem: states (owned by its [`StateSelector`], in priority order) and
//! the edges between them. It is assembled with a [`GraphBuilder`] and is
//! immutable once built.

use core::fmt;
use std::sync::Arc;

use hashbrown::{HashMap, HashSet};
use manip_core::configuration::Configuration;
use manip_core::constraint::ConstraintSet;
use manip_core::steering::{SteeringMethod, StraightSteering};

use crate::edge::{Edge, EdgeId};
use crate::error::GraphError;
use crate::selector::StateSelector;
use crate::state::{State, StateId};

/// The discrete structure of a manipulation problem.
///
/// # Example
///
/// ```
/// use manip_core::configuration::Configuration;
/// use manip_core::constraint::{ConstraintSet, FnConstraint, LockedJoint};
/// use manip_graph::graph::ConstraintGraph;
///
/// let mut builder = ConstraintGraph::builder("pick");
/// let free = builder.add_state(
///     "free",
///     ConstraintSet::new("free").with(FnConstraint::new("open", |q| q[1] == 0.0)),
/// );
/// let grasp = builder.add_state("grasp", ConstraintSet::new("grasp"));
/// builder.add_edge("transit", free, free, ConstraintSet::new("transit").with(LockedJoint::new("open", 1, 0.0)));
/// builder.add_edge("grasp", free, grasp, ConstraintSet::new("grasp"));
/// let graph = builder.build().unwrap();
///
/// let state = graph.get_state(&Configuration::from([0.3, 0.0])).unwrap();
/// assert_eq!(state.name(), "free");
/// assert_eq!(graph.get_edges(free, grasp).unwrap().len(), 1);
/// ```
#[derive(Debug)]
pub struct ConstraintGraph {
    name: String,
    dimension: Option<usize>,
    selector: StateSelector,
    edges: Vec<Edge>,
    /// Edges between each ordered pair of states, in insertion order.
    transitions: HashMap<(StateId, StateId), Vec<EdgeId>>,
}

impl ConstraintGraph {
    /// Starts building a new graph.
    pub fn builder(name: impl Into<String>) -> GraphBuilder {
        GraphBuilder::new(name)
    }

    /// Returns the graph's name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the configuration dimension, if one was declared.
    #[must_use]
    pub fn dimension(&self) -> Option<usize> {
        self.dimension
    }

    /// Returns the state selector.
    #[must_use]
    pub fn selector(&self) -> &StateSelector {
        &self.selector
    }

    /// Returns all states, highest priority first.
    #[must_use]
    pub fn states(&self) -> &[State] {
        self.selector.states()
    }

    /// Returns all edges in insertion order.
    #[must_use]
    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }

    /// Gets a state by ID.
    #[must_use]
    pub fn state(&self, id: StateId) -> Option<&State> {
        self.selector.state(id)
    }

    /// Gets an edge by ID.
    #[must_use]
    pub fn edge(&self, id: EdgeId) -> Option<&Edge> {
        self.edges.get(id.index())
    }

    /// Gets an edge by name.
    #[must_use]
    pub fn edge_by_name(&self, name: &str) -> Option<&Edge> {
        self.edges.iter().find(|edge| edge.name() == name)
    }

    /// Classifies a configuration into a state.
    ///
    /// # Errors
    ///
    /// Returns [`GraphError::DimensionMismatch`] if the graph declares a
    /// dimension and `q` has another one, or [`GraphError::NoMatchingState`]
    /// if no state matches.
    pub fn get_state(&self, q: &Configuration) -> Result<&State, GraphError> {
        if let Some(expected) = self.dimension
            && q.dim() != expected
        {
            return Err(GraphError::DimensionMismatch {
                expected,
                found: q.dim(),
            });
        }
        self.selector.get_state(q)
    }

    /// Returns the edges going from `from` to `to`, in insertion order.
    ///
    /// The list may be empty.
    ///
    /// # Errors
    ///
    /// Returns [`GraphError::UnknownState`] if either ID does not belong to
    /// this graph.
    pub fn get_edges(&self, from: StateId, to: StateId) -> Result<Vec<&Edge>, GraphError> {
        for id in [from, to] {
            if self.selector.state(id).is_none() {
                return Err(GraphError::UnknownState(id));
            }
        }
        Ok(self
            .transitions
            .get(&(from, to))
            .map(|ids| ids.iter().filter_map(|id| self.edge(*id)).collect())
            .unwrap_or_default())
    }
}

/// Builder for [`ConstraintGraph`].
///
/// States are prioritized in the order they are added: when a configuration
/// satisfies several states, the one added first is selected.
#[derive(Debug)]
pub struct GraphBuilder {
    name: String,
    dimension: Option<usize>,
    states: Vec<State>,
    edges: Vec<Edge>,
}

impl GraphBuilder {
    /// Creates an empty builder.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            dimension: None,
            states: Vec::new(),
            edges: Vec::new(),
        }
    }

    /// Declares the configuration dimension.
    ///
    /// Configurations of another dimension are then rejected by
    /// [`ConstraintGraph::get_state`] before any constraint is checked.
    #[must_use]
    pub fn with_dimension(mut self, dimension: usize) -> Self {
        self.dimension = Some(dimension);
        self
    }

    /// Adds a state with the lowest priority so far.
    pub fn add_state(&mut self, name: impl Into<String>, constraints: ConstraintSet) -> StateId {
        let id = StateId::new(self.states.len());
        self.states.push(State::new(id, name, constraints));
        id
    }

    /// Adds an edge whose paths are straight lines evaluated under
    /// `path_constraints`.
    pub fn add_edge(
        &mut self,
        name: impl Into<String>,
        from: StateId,
        to: StateId,
        path_constraints: ConstraintSet,
    ) -> EdgeId {
        let name = name.into();
        let constraints = Arc::new(path_constraints.with_edge(name.clone()));
        let steering = StraightSteering::with_constraints(Arc::clone(&constraints));
        self.push_edge(name, from, to, constraints, Box::new(steering))
    }

    /// Adds an edge with a custom steering primitive.
    ///
    /// `path_constraints` still gate [`Edge::build`]; the steering primitive
    /// is responsible for attaching constraints to the paths it produces.
    pub fn add_edge_with_steering(
        &mut self,
        name: impl Into<String>,
        from: StateId,
        to: StateId,
        path_constraints: ConstraintSet,
        steering: Box<dyn SteeringMethod>,
    ) -> EdgeId {
        let name = name.into();
        let constraints = Arc::new(path_constraints.with_edge(name.clone()));
        self.push_edge(name, from, to, constraints, steering)
    }

    fn push_edge(
        &mut self,
        name: String,
        from: StateId,
        to: StateId,
        constraints: Arc<ConstraintSet>,
        steering: Box<dyn SteeringMethod>,
    ) -> EdgeId {
        let id = EdgeId::new(self.edges.len());
        self.edges
            .push(Edge::new(id, name, from, to, constraints, steering));
        id
    }

    /// Validates the graph structure.
    ///
    /// All problems are collected rather than stopping at the first one.
    ///
    /// # Errors
    ///
    /// Returns every [`ValidationError`] found.
    pub fn validate(&self) -> Result<(), Vec<ValidationError>> {
        let mut errors = Vec::new();

        if self.states.is_empty() {
            errors.push(ValidationError::NoStates);
        }

        let mut state_names = HashSet::new();
        for state in &self.states {
            if !state_names.insert(state.name()) {
                errors.push(ValidationError::DuplicateStateName(state.name().to_owned()));
            }
        }

        let mut edge_names = HashSet::new();
        for edge in &self.edges {
            if !edge_names.insert(edge.name()) {
                errors.push(ValidationError::DuplicateEdgeName(edge.name().to_owned()));
            }
            if edge.from().index() >= self.states.len() {
                errors.push(ValidationError::InvalidEdgeSource {
                    edge: edge.id(),
                    state: edge.from(),
                });
            }
            if edge.to().index() >= self.states.len() {
                errors.push(ValidationError::InvalidEdgeTarget {
                    edge: edge.id(),
                    state: edge.to(),
                });
            }
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }

    /// Validates and freezes the graph.
    ///
    /// # Errors
    ///
    /// Returns every [`ValidationError`] found by
    /// [`validate`](GraphBuilder::validate).
    pub fn build(self) -> Result<ConstraintGraph, Vec<ValidationError>> {
        self.validate()?;

        let mut transitions: HashMap<(StateId, StateId), Vec<EdgeId>> = HashMap::new();
        for edge in &self.edges {
            transitions
                .entry((edge.from(), edge.to()))
                .or_default()
                .push(edge.id());
        }

        tracing::debug!(
            graph = %self.name,
            states = self.states.len(),
            edges = self.edges.len(),
            "constraint graph built"
        );

        Ok(ConstraintGraph {
            name: self.name,
            dimension: self.dimension,
            selector: StateSelector::new(self.states),
            edges: self.edges,
            transitions,
        })
    }
}

/// Structural errors detected when building a [`ConstraintGraph`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// The graph has no states.
    NoStates,
    /// Two states share a name.
    DuplicateStateName(String),
    /// Two edges share a name.
    DuplicateEdgeName(String),
    /// An edge's origin state doesn't exist.
    InvalidEdgeSource {
        /// The edge ID.
        edge: EdgeId,
        /// The invalid state ID.
        state: StateId,
    },
    /// An edge's destination state doesn't exist.
    InvalidEdgeTarget {
        /// The edge ID.
        edge: EdgeId,
        /// The invalid state ID.
        state: StateId,
    },
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ValidationError::NoStates => write!(f, "graph has no states"),
            ValidationError::DuplicateStateName(name) => {
                write!(f, "state name '{name}' is used more than once")
            }
            ValidationError::DuplicateEdgeName(name) => {
                write!(f, "edge name '{name}' is used more than once")
            }
            ValidationError::InvalidEdgeSource { edge, state } => {
                write!(f, "edge {edge} has invalid source state: {state}")
            }
            ValidationError::InvalidEdgeTarget { edge, state } => {
                write!(f, "edge {edge} has invalid target state: {state}")
            }
        }
    }
}

impl core::error::Error for ValidationError {}
