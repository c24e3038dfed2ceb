//! Local path synthesis.
//!
//! A [`SteeringMethod`] builds a path between two configurations without
//! looking at obstacles. Edges of a constraint graph own one, and the
//! graph-aware steering method in `manip_planning` implements the same trait
//! on top of them.

use core::fmt;
use std::sync::Arc;

use crate::configuration::Configuration;
use crate::constraint::ConstraintSet;
use crate::path::{BoxedPath, Path};
use crate::straight_path::StraightPath;

/// Builds local paths between configurations.
pub trait SteeringMethod: Send + Sync {
    /// Returns a path from `from` to `to`, or `None` if none could be built.
    ///
    /// Failing to connect two configurations is an ordinary planning
    /// outcome, not an error.
    fn compute(&self, from: &Configuration, to: &Configuration) -> Option<BoxedPath>;
}

impl fmt::Debug for dyn SteeringMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("SteeringMethod")
    }
}

/// Steering method producing [`StraightPath`]s.
///
/// With constraints attached, the produced paths are evaluated under them
/// and both endpoints must be projectable for a path to be returned.
#[derive(Debug, Clone, Default)]
pub struct StraightSteering {
    constraints: Option<Arc<ConstraintSet>>,
}

impl StraightSteering {
    /// Creates an unconstrained straight-line steering method.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a steering method whose paths are evaluated under
    /// `constraints`.
    #[must_use]
    pub fn with_constraints(constraints: Arc<ConstraintSet>) -> Self {
        Self {
            constraints: Some(constraints),
        }
    }

    /// Returns the constraints attached to produced paths.
    #[must_use]
    pub fn constraints(&self) -> Option<&ConstraintSet> {
        self.constraints.as_deref()
    }
}

impl SteeringMethod for StraightSteering {
    fn compute(&self, from: &Configuration, to: &Configuration) -> Option<BoxedPath> {
        let mut path = StraightPath::between(from.clone(), to.clone()).ok()?;
        if let Some(constraints) = &self.constraints {
            path = path.with_constraints(Arc::clone(constraints));
        }
        path.initial().ok()?;
        path.end().ok()?;
        Some(Box::new(path))
    }
}
