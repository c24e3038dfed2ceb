//! Path validation results and the validator trait.
//!
//! A validator checks a path and returns the longest part of it that is
//! valid, starting from the path's start (or ending at its end when
//! validating in reverse), together with an [`Outcome`] describing why the
//! rest was dropped.

use core::fmt;

use manip_core::error::PathError;
use manip_core::path::{BoxedPath, Path};
use manip_graph::error::GraphError;
use manip_graph::state::StateId;

use crate::error::PlanningError;
use crate::obstacle::SharedObstacle;

/// What an inner validator found at the point where a path stops being valid.
#[derive(Debug, Clone, PartialEq)]
pub enum ValidationReport {
    /// The configuration at `time` lies inside an obstacle.
    Collision {
        /// Name of the obstacle hit.
        obstacle: String,
        /// Path time of the first colliding sample.
        time: f64,
    },
    /// The path could not be evaluated at `time`.
    Projection {
        /// Path time of the failed evaluation.
        time: f64,
        /// The evaluation error.
        error: PathError,
    },
}

impl ValidationReport {
    /// Returns the path time at which the problem was found.
    #[must_use]
    pub fn time(&self) -> f64 {
        match self {
            ValidationReport::Collision { time, .. } | ValidationReport::Projection { time, .. } => {
                *time
            }
        }
    }
}

impl fmt::Display for ValidationReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ValidationReport::Collision { obstacle, time } => {
                write!(f, "collision with '{obstacle}' at t = {time}")
            }
            ValidationReport::Projection { time, error } => {
                write!(f, "evaluation failed at t = {time}: {error}")
            }
        }
    }
}

/// Why a path was not fully valid.
#[derive(Debug, Clone, PartialEq)]
pub enum Outcome {
    /// The whole path is valid.
    Valid,

    /// The path was truncated before an invalid configuration. The valid
    /// part is usable.
    Collision(ValidationReport),

    /// The truncated part connects a different pair of states than the
    /// original path. The valid part is degenerate.
    StateMismatch {
        /// States of the original path's endpoints.
        expected: (StateId, StateId),
        /// States of the truncated part's endpoints.
        found: (StateId, StateId),
        /// What the inner validator found.
        report: Option<ValidationReport>,
    },

    /// The end of the truncated part lies outside every state. The valid
    /// part is degenerate.
    Reclassification {
        /// The edge the path was built on, when known.
        edge: Option<String>,
        /// The classification error.
        error: GraphError,
        /// What the inner validator found.
        report: Option<ValidationReport>,
    },
}

impl Outcome {
    /// Returns `true` for [`Outcome::Valid`].
    #[must_use]
    pub fn is_valid(&self) -> bool {
        matches!(self, Outcome::Valid)
    }

    /// Returns the inner validator's report, if any.
    #[must_use]
    pub fn report(&self) -> Option<&ValidationReport> {
        match self {
            Outcome::Valid => None,
            Outcome::Collision(report) => Some(report),
            Outcome::StateMismatch { report, .. } | Outcome::Reclassification { report, .. } => {
                report.as_ref()
            }
        }
    }

    /// Consumes the outcome and returns the inner validator's report, if any.
    #[must_use]
    pub fn into_report(self) -> Option<ValidationReport> {
        match self {
            Outcome::Valid => None,
            Outcome::Collision(report) => Some(report),
            Outcome::StateMismatch { report, .. } | Outcome::Reclassification { report, .. } => {
                report
            }
        }
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Outcome::Valid => write!(f, "valid"),
            Outcome::Collision(report) => write!(f, "{report}"),
            Outcome::StateMismatch {
                expected, found, ..
            } => write!(
                f,
                "valid part goes from {} to {}, path goes from {} to {}",
                found.0, found.1, expected.0, expected.1
            ),
            Outcome::Reclassification { edge, error, .. } => match edge {
                Some(edge) => write!(f, "edge '{edge}' left every state: {error}"),
                None => write!(f, "valid part left every state: {error}"),
            },
        }
    }
}

/// The result of validating a path.
///
/// `valid_part` is always present; it is degenerate (zero length) when no
/// usable prefix exists.
#[derive(Debug, Clone)]
pub struct PathValidation {
    /// The longest valid part of the path.
    pub valid_part: BoxedPath,
    /// Why the rest of the path was dropped.
    pub outcome: Outcome,
}

impl PathValidation {
    /// A fully valid path.
    #[must_use]
    pub fn valid(path: BoxedPath) -> Self {
        Self {
            valid_part: path,
            outcome: Outcome::Valid,
        }
    }

    /// A path that is only valid up to `valid_part`.
    #[must_use]
    pub fn invalid(valid_part: BoxedPath, outcome: Outcome) -> Self {
        Self {
            valid_part,
            outcome,
        }
    }

    /// Returns `true` if the whole path is valid.
    #[must_use]
    pub fn is_valid(&self) -> bool {
        self.outcome.is_valid()
    }
}

/// Checks paths against obstacles or other validity criteria.
pub trait PathValidator: Send + Sync {
    /// Validates `path`.
    ///
    /// Forward validation keeps the longest valid part starting at the
    /// path's start; reverse validation keeps the longest valid part ending
    /// at the path's end.
    ///
    /// # Errors
    ///
    /// Returns a [`PlanningError`] when validation cannot be carried out.
    /// Invalid paths are not errors.
    fn validate(&self, path: &dyn Path, reverse: bool) -> Result<PathValidation, PlanningError>;

    /// Adds an obstacle to check paths against.
    fn add_obstacle(&mut self, obstacle: SharedObstacle);
}

impl fmt::Debug for dyn PathValidator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PathValidator").finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use manip_core::configuration::Configuration;

    #[test]
    fn report_accessors() {
        let report = ValidationReport::Collision {
            obstacle: "wall".into(),
            time: 0.5,
        };
        assert_eq!(report.time(), 0.5);
        assert_eq!(report.to_string(), "collision with 'wall' at t = 0.5");

        let outcome = Outcome::Collision(report.clone());
        assert!(!outcome.is_valid());
        assert_eq!(outcome.report(), Some(&report));
        assert_eq!(outcome.into_report(), Some(report));
    }

    #[test]
    fn valid_outcome_has_no_report() {
        assert!(Outcome::Valid.is_valid());
        assert_eq!(Outcome::Valid.report(), None);
    }

    #[test]
    fn outcome_display() {
        let outcome = Outcome::StateMismatch {
            expected: (StateId::new(0), StateId::new(0)),
            found: (StateId::new(0), StateId::new(1)),
            report: None,
        };
        assert_eq!(
            outcome.to_string(),
            "valid part goes from state_0 to state_1, path goes from state_0 to state_0"
        );

        let outcome = Outcome::Reclassification {
            edge: Some("transit".into()),
            error: GraphError::NoMatchingState {
                configuration: Configuration::from([1.0]),
            },
            report: None,
        };
        assert!(outcome.to_string().starts_with("edge 'transit' left every state"));
    }
}
