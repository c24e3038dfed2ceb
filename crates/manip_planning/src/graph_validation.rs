//! Path validation that keeps truncated paths consistent with the graph.
//!
//! A path built on an edge connects two states. When an inner validator
//! truncates it, the collision-free part may end in another state than the
//! original path (for instance when the truncation point leaves a grasp
//! region). [`GraphPathValidation`] reclassifies the endpoints of the valid
//! part and only keeps it when it still connects the same pair of states;
//! otherwise the valid part collapses to a single configuration.

use core::fmt;

use manip_core::configuration::Configuration;
use manip_core::constraint::ConstraintSet;
use manip_core::path::{BoxedPath, Path, TimeRange};
use manip_core::path_vector::PathVector;
use manip_graph::error::GraphError;
use manip_graph::graph::ConstraintGraph;
use manip_graph::state::{State, StateId};

use crate::error::{Endpoint, PlanningError};
use crate::obstacle::SharedObstacle;
use crate::validation::{Outcome, PathValidation, PathValidator};

/// A [`PathValidator`] that wraps another one and checks that truncated
/// paths stay on the same pair of states.
///
/// Composite paths ([`PathVector`]) are validated element by element, in
/// the requested direction, stopping at the first element that is not
/// fully valid.
///
/// # Example
///
/// ```
/// use std::sync::Arc;
///
/// use manip_core::prelude::*;
/// use manip_graph::graph::ConstraintGraph;
/// use manip_planning::prelude::*;
///
/// let mut builder = ConstraintGraph::builder("line");
/// let left = builder.add_state(
///     "left",
///     ConstraintSet::new("left").with(FnConstraint::new("x<0", |q| q[0] < 0.0)),
/// );
/// let right = builder.add_state("right", ConstraintSet::new("right"));
/// builder.add_edge("cross", left, right, ConstraintSet::new("cross"));
/// let graph = builder.build().unwrap();
///
/// let inner = DiscretizedCollisionValidation::new(&ValidationConfig::with_step(0.05)).unwrap();
/// let mut validation = GraphPathValidation::new(&graph, Box::new(inner));
/// validation.add_obstacle(Arc::new(BoxObstacle::new("post", [0.5], [0.6])));
///
/// // The collision-free part of this left-to-right path ends on the right,
/// // so it is kept.
/// let path = StraightPath::between(Configuration::from([-1.0]), Configuration::from([1.0])).unwrap();
/// let result = validation.validate(&path, false).unwrap();
/// assert!(matches!(result.outcome, Outcome::Collision(_)));
/// assert!(result.valid_part.end().unwrap()[0] > 0.0);
///
/// // This one is truncated before reaching the right side.
/// let path = StraightPath::between(Configuration::from([-1.0]), Configuration::from([0.7])).unwrap();
/// let mut validation = GraphPathValidation::new(&graph, Box::new(
///     DiscretizedCollisionValidation::new(&ValidationConfig::with_step(0.05)).unwrap(),
/// ));
/// validation.add_obstacle(Arc::new(BoxObstacle::new("wall", [-0.2], [0.6])));
/// let result = validation.validate(&path, false).unwrap();
/// assert!(matches!(result.outcome, Outcome::StateMismatch { .. }));
/// assert!(result.valid_part.time_range().is_degenerate());
/// ```
pub struct GraphPathValidation<'g> {
    graph: &'g ConstraintGraph,
    inner: Box<dyn PathValidator>,
}

impl<'g> GraphPathValidation<'g> {
    /// Wraps `inner` so that its results are checked against `graph`.
    pub fn new(graph: &'g ConstraintGraph, inner: Box<dyn PathValidator>) -> Self {
        Self { graph, inner }
    }

    /// Returns the graph paths are checked against.
    #[must_use]
    pub fn graph(&self) -> &'g ConstraintGraph {
        self.graph
    }

    /// Returns the wrapped validator.
    #[must_use]
    pub fn inner(&self) -> &dyn PathValidator {
        self.inner.as_ref()
    }

    fn validate_vector(
        &self,
        vector: &PathVector,
        reverse: bool,
    ) -> Result<PathValidation, PlanningError> {
        let elements = vector.paths();
        let ranks: Box<dyn Iterator<Item = usize>> = if reverse {
            Box::new((0..elements.len()).rev())
        } else {
            Box::new(0..elements.len())
        };

        for rank in ranks {
            let PathValidation {
                valid_part,
                outcome,
            } = self.validate(&*elements[rank], reverse)?;
            if outcome.is_valid() {
                continue;
            }

            let parts: Vec<BoxedPath> = if reverse {
                core::iter::once(valid_part)
                    .chain(elements[rank + 1..].iter().cloned())
                    .collect()
            } else {
                elements[..rank]
                    .iter()
                    .cloned()
                    .chain(core::iter::once(valid_part))
                    .collect()
            };
            let truncated = PathVector::from_paths(vector.output_size(), parts)?;
            return Ok(PathValidation::invalid(Box::new(truncated), outcome));
        }

        Ok(PathValidation::valid(vector.boxed_clone()))
    }

    /// Checks the inner validator's result against the graph.
    ///
    /// Only the end of the valid part may fail classification without
    /// error. In reverse mode the cut point is the valid part's start, so an
    /// unclassifiable cut is fatal there while it is recoverable forward.
    /// The reverse behaviour is kept as is but has not been checked against
    /// a real reverse planner.
    fn validate_single(
        &self,
        path: &dyn Path,
        reverse: bool,
    ) -> Result<PathValidation, PlanningError> {
        let PathValidation {
            valid_part,
            outcome,
        } = self.inner.validate(path, reverse)?;
        if outcome.is_valid() {
            return Ok(PathValidation::valid(valid_part));
        }

        let range = valid_part.time_range();
        let start = configuration_at(&*valid_part, range.start, Endpoint::ValidPartStart)?;
        let origin = self.graph.get_state(&start)?.id();

        let end = configuration_at(&*valid_part, range.end, Endpoint::ValidPartEnd)?;
        let destination = match self.graph.get_state(&end) {
            Ok(state) => state.id(),
            Err(error) => {
                let edge = path.constraints().and_then(ConstraintSet::edge).map(str::to_owned);
                self.warn_reclassification(edge.as_deref(), &error);
                return Ok(PathValidation::invalid(
                    degenerate(path, reverse)?,
                    Outcome::Reclassification {
                        edge,
                        error,
                        report: outcome.into_report(),
                    },
                ));
            }
        };

        let expected = self.endpoint_states(path)?;
        let found = (origin, destination);
        if found == expected {
            return Ok(PathValidation::invalid(valid_part, outcome));
        }

        tracing::debug!(
            expected_from = %expected.0,
            expected_to = %expected.1,
            found_from = %found.0,
            found_to = %found.1,
            "valid part connects other states than the path"
        );
        Ok(PathValidation::invalid(
            degenerate(path, reverse)?,
            Outcome::StateMismatch {
                expected,
                found,
                report: outcome.into_report(),
            },
        ))
    }

    /// States of the original path's endpoints.
    fn endpoint_states(&self, path: &dyn Path) -> Result<(StateId, StateId), PlanningError> {
        let range = path.time_range();
        let start = configuration_at(path, range.start, Endpoint::PathStart)?;
        let end = configuration_at(path, range.end, Endpoint::PathEnd)?;
        Ok((
            self.graph.get_state(&start)?.id(),
            self.graph.get_state(&end)?.id(),
        ))
    }

    fn warn_reclassification(&self, edge: Option<&str>, error: &GraphError) {
        let state = edge
            .and_then(|name| self.graph.edge_by_name(name))
            .and_then(|edge| self.graph.state(edge.from()))
            .map(State::name);
        tracing::warn!(
            edge = edge.unwrap_or("<unknown>"),
            state = state.unwrap_or("<unknown>"),
            %error,
            "end of valid part cannot be classified; the path constraints of this edge are \
             probably looser than the constraints of its states, use the same constraints \
             for both"
        );
    }
}

impl PathValidator for GraphPathValidation<'_> {
    fn validate(&self, path: &dyn Path, reverse: bool) -> Result<PathValidation, PlanningError> {
        match path.downcast_ref::<PathVector>() {
            Some(vector) => self.validate_vector(vector, reverse),
            None => self.validate_single(path, reverse),
        }
    }

    fn add_obstacle(&mut self, obstacle: SharedObstacle) {
        self.inner.add_obstacle(obstacle);
    }
}

impl fmt::Debug for GraphPathValidation<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GraphPathValidation")
            .field("graph", &self.graph.name())
            .field("inner", &self.inner)
            .finish()
    }
}

fn configuration_at(
    path: &dyn Path,
    t: f64,
    endpoint: Endpoint,
) -> Result<Configuration, PlanningError> {
    path.eval(t)
        .map_err(|source| PlanningError::Projection { endpoint, source })
}

/// The zero-length part of `path` at the end validation started from.
fn degenerate(path: &dyn Path, reverse: bool) -> Result<BoxedPath, PlanningError> {
    let range = path.time_range();
    let pin = if reverse { range.end } else { range.start };
    Ok(path.extract(TimeRange::point(pin))?)
}
