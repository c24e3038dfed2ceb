//! Error types for paths and constraint projection.

/// A configuration could not be projected onto a constraint.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
#[error("projection onto constraint '{constraint}' failed")]
pub struct ProjectionError {
    /// Name of the constraint that was left unsatisfied.
    pub constraint: String,
}

impl ProjectionError {
    /// Creates a projection error for the named constraint.
    pub fn new(constraint: impl Into<String>) -> Self {
        Self {
            constraint: constraint.into(),
        }
    }
}

/// Errors that can occur while evaluating or manipulating a path.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum PathError {
    /// The requested time lies outside the path's domain.
    #[error("time {time} is outside of path range [{start}, {end}]")]
    TimeOutOfRange {
        /// The requested time.
        time: f64,
        /// Start of the path's domain.
        start: f64,
        /// End of the path's domain.
        end: f64,
    },

    /// A sub-interval is reversed or not contained in the path's domain.
    #[error("invalid range [{start}, {end}]")]
    InvalidRange {
        /// Requested start.
        start: f64,
        /// Requested end.
        end: f64,
    },

    /// The configuration at the requested time does not satisfy the path's
    /// constraints.
    #[error(transparent)]
    Projection(#[from] ProjectionError),

    /// Configurations or paths of different dimensions were combined.
    #[error("dimension mismatch: expected {expected}, found {found}")]
    DimensionMismatch {
        /// Expected dimension.
        expected: usize,
        /// Dimension actually provided.
        found: usize,
    },

    /// The composite path has no elements.
    #[error("path is empty")]
    Empty,
}
