//! Error types for constraint graph queries.

use manip_core::configuration::Configuration;

use crate::state::StateId;

/// Errors returned by state classification and edge queries.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum GraphError {
    /// No candidate state's constraints are satisfied by the configuration.
    #[error("no state matches configuration {configuration}")]
    NoMatchingState {
        /// The configuration that could not be classified.
        configuration: Configuration,
    },

    /// A state ID does not belong to the graph.
    #[error("unknown state: {0}")]
    UnknownState(StateId),

    /// The configuration's dimension differs from the graph's.
    #[error("configuration has dimension {found}, graph expects {expected}")]
    DimensionMismatch {
        /// The graph's configuration dimension.
        expected: usize,
        /// The configuration's dimension.
        found: usize,
    },
}
