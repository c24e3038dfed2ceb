//! Steering along the edges of a constraint graph.

use core::fmt;

use manip_core::configuration::Configuration;
use manip_core::path::BoxedPath;
use manip_core::steering::SteeringMethod;
use manip_graph::edge::Edge;
use manip_graph::error::GraphError;
use manip_graph::graph::ConstraintGraph;

/// A [`SteeringMethod`] that connects two configurations through an edge of
/// the graph joining their states.
///
/// Candidate edges are tried as a stack: the last edge returned by
/// [`ConstraintGraph::get_edges`] is tried first, and the first edge that
/// builds a path wins.
#[derive(Clone, Copy)]
pub struct GraphSteeringMethod<'g> {
    graph: &'g ConstraintGraph,
}

impl<'g> GraphSteeringMethod<'g> {
    /// Creates a steering method over `graph`.
    #[must_use]
    pub fn new(graph: &'g ConstraintGraph) -> Self {
        Self { graph }
    }

    /// Returns the graph edges are taken from.
    #[must_use]
    pub fn graph(&self) -> &'g ConstraintGraph {
        self.graph
    }

    /// Returns the edges joining the states of `from` and `to`, in the
    /// order the graph lists them.
    ///
    /// # Errors
    ///
    /// Returns a [`GraphError`] if either configuration cannot be
    /// classified.
    pub fn candidate_edges(
        &self,
        from: &Configuration,
        to: &Configuration,
    ) -> Result<Vec<&'g Edge>, GraphError> {
        let origin = self.graph.get_state(from)?;
        let destination = self.graph.get_state(to)?;
        self.graph.get_edges(origin.id(), destination.id())
    }
}

impl SteeringMethod for GraphSteeringMethod<'_> {
    fn compute(&self, from: &Configuration, to: &Configuration) -> Option<BoxedPath> {
        let mut candidates = match self.candidate_edges(from, to) {
            Ok(edges) => edges,
            Err(error) => {
                tracing::error!(%error, "cannot find edges between configurations");
                return None;
            }
        };

        if candidates.is_empty() {
            tracing::debug!(%from, %to, "no edge found");
            return None;
        }

        while let Some(edge) = candidates.pop() {
            if let Some(path) = edge.build(from, to) {
                return Some(path);
            }
            tracing::trace!(edge = %edge.name(), "edge failed to build a path");
        }
        None
    }
}

impl fmt::Debug for GraphSteeringMethod<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GraphSteeringMethod")
            .field("graph", &self.graph.name())
            .finish()
    }
}
