//! Error types for graph-aware validation and configuration.

use core::fmt;

use manip_core::error::PathError;
use manip_graph::error::GraphError;

/// The configuration whose evaluation failed during graph-aware validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Endpoint {
    /// Start of the collision-free part returned by the inner validator.
    ValidPartStart,
    /// End of the collision-free part returned by the inner validator.
    ValidPartEnd,
    /// Start of the path being validated.
    PathStart,
    /// End of the path being validated.
    PathEnd,
}

impl fmt::Display for Endpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Endpoint::ValidPartStart => write!(f, "initial configuration of the valid part"),
            Endpoint::ValidPartEnd => write!(f, "end configuration of the valid part"),
            Endpoint::PathStart => write!(f, "initial configuration of the path to be validated"),
            Endpoint::PathEnd => write!(f, "end configuration of the path to be validated"),
        }
    }
}

/// Fatal errors raised while validating a path against a constraint graph.
///
/// These indicate a contradiction in the problem setup (a path that cannot
/// be evaluated where it must be, a configuration outside every state) and
/// are not part of the normal collision/truncation flow, which is reported
/// through [`Outcome`](crate::validation::Outcome).
#[derive(Debug, thiserror::Error)]
pub enum PlanningError {
    /// A path endpoint could not be evaluated.
    #[error("{endpoint} cannot be projected: {source}")]
    Projection {
        /// Which endpoint failed.
        endpoint: Endpoint,
        /// The underlying evaluation error.
        source: PathError,
    },

    /// A configuration required to lie in a state could not be classified.
    #[error("state classification failed: {0}")]
    Classification(#[from] GraphError),

    /// A path could not be extracted or assembled.
    #[error("path error: {0}")]
    Path(#[from] PathError),

    /// The sampling step is too small for the length of the path.
    #[error("cannot sample a path of length {length} every {step}")]
    TooManySamples {
        /// Length of the path's time range.
        length: f64,
        /// The configured sampling step.
        step: f64,
    },
}

impl PlanningError {
    /// Returns the failing endpoint for projection errors.
    #[must_use]
    pub fn endpoint(&self) -> Option<Endpoint> {
        match self {
            PlanningError::Projection { endpoint, .. } => Some(*endpoint),
            _ => None,
        }
    }
}

/// Errors that can occur when loading a [`ValidationConfig`](crate::config::ValidationConfig).
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// The configuration could not be parsed.
    #[error("invalid configuration: {0}")]
    Parse(#[from] serde_json::Error),

    /// The sampling step is not a positive finite number.
    #[error("validation step must be positive and finite, got {0}")]
    InvalidStep(f64),
}
