//! Constraints on configurations.
//!
//! A constraint is a feasibility predicate together with a projector that
//! moves a configuration onto the constraint manifold. States and edges of
//! a constraint graph are described by [`ConstraintSet`]s, and paths
//! evaluate their configurations through one.
//!
//! # Architecture
//!
//! - [`Constraint`] - Object-safe trait stored behind [`SharedConstraint`]
//! - [`LockedJoint`] - Pins one coordinate to a value
//! - [`FnConstraint`] - Closure predicate with an optional closure projector
//! - [`ConstraintSet`] - Ordered conjunction of constraints
//!
//! # Example
//!
//! ```
//! use manip_core::configuration::Configuration;
//! use manip_core::constraint::{ConstraintSet, FnConstraint, LockedJoint};
//!
//! let placement = ConstraintSet::new("placement")
//!     .with(LockedJoint::new("object_z", 1, 0.0))
//!     .with(FnConstraint::new("in_reach", |q| q[0].abs() <= 1.0));
//!
//! let mut q = Configuration::from([0.5, 0.3]);
//! placement.apply(&mut q).unwrap();
//! assert_eq!(q, Configuration::from([0.5, 0.0]));
//! ```

use core::fmt;
use std::sync::Arc;

use crate::configuration::Configuration;
use crate::error::ProjectionError;

/// Default tolerance used by [`LockedJoint`].
pub const DEFAULT_TOLERANCE: f64 = 1e-6;

/// Object-safe trait for constraints on configurations.
pub trait Constraint: Send + Sync {
    /// Returns the constraint's name, used in diagnostics.
    fn name(&self) -> &str;

    /// Returns `true` if `q` satisfies the constraint.
    fn is_satisfied(&self, q: &Configuration) -> bool;

    /// Moves `q` onto the constraint in place.
    ///
    /// The default implementation cannot move anything: it succeeds only if
    /// `q` already satisfies the constraint.
    ///
    /// # Errors
    ///
    /// Returns [`ProjectionError`] if `q` cannot be made to satisfy the
    /// constraint.
    fn project(&self, q: &mut Configuration) -> Result<(), ProjectionError> {
        if self.is_satisfied(q) {
            Ok(())
        } else {
            Err(ProjectionError::new(self.name()))
        }
    }
}

impl fmt::Debug for dyn Constraint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Constraint")
            .field("name", &self.name())
            .finish()
    }
}

/// Shared handle to a type-erased constraint.
pub type SharedConstraint = Arc<dyn Constraint>;

/// Locks one coordinate of the configuration to a fixed value.
///
/// Typical use is keeping an object's pose constant while the robot moves,
/// or keeping a gripper closed along a transfer path.
#[derive(Debug, Clone)]
pub struct LockedJoint {
    name: String,
    index: usize,
    value: f64,
    tolerance: f64,
}

impl LockedJoint {
    /// Creates a constraint locking coordinate `index` to `value`.
    pub fn new(name: impl Into<String>, index: usize, value: f64) -> Self {
        Self {
            name: name.into(),
            index,
            value,
            tolerance: DEFAULT_TOLERANCE,
        }
    }

    /// Sets the satisfaction tolerance.
    #[must_use]
    pub fn with_tolerance(mut self, tolerance: f64) -> Self {
        self.tolerance = tolerance;
        self
    }

    /// Returns the locked coordinate index.
    #[must_use]
    pub fn index(&self) -> usize {
        self.index
    }

    /// Returns the locked value.
    #[must_use]
    pub fn value(&self) -> f64 {
        self.value
    }
}

impl Constraint for LockedJoint {
    fn name(&self) -> &str {
        &self.name
    }

    fn is_satisfied(&self, q: &Configuration) -> bool {
        q.as_slice()
            .get(self.index)
            .is_some_and(|v| (v - self.value).abs() <= self.tolerance)
    }

    fn project(&self, q: &mut Configuration) -> Result<(), ProjectionError> {
        match q.as_mut_slice().get_mut(self.index) {
            Some(v) => {
                *v = self.value;
                Ok(())
            }
            None => Err(ProjectionError::new(&*self.name)),
        }
    }
}

type PredicateFn = dyn Fn(&Configuration) -> bool + Send + Sync;
type ProjectorFn = dyn Fn(&mut Configuration) -> bool + Send + Sync;

/// A constraint defined by closures.
///
/// Without a projector the constraint is a pure predicate. A projector
/// receives the configuration mutably and returns `false` when it could not
/// converge; the predicate is checked again afterwards either way.
pub struct FnConstraint {
    name: String,
    predicate: Box<PredicateFn>,
    projector: Option<Box<ProjectorFn>>,
}

impl FnConstraint {
    /// Creates a predicate-only constraint.
    pub fn new<P>(name: impl Into<String>, predicate: P) -> Self
    where
        P: Fn(&Configuration) -> bool + Send + Sync + 'static,
    {
        Self {
            name: name.into(),
            predicate: Box::new(predicate),
            projector: None,
        }
    }

    /// Attaches a projector.
    #[must_use]
    pub fn with_projector<F>(mut self, projector: F) -> Self
    where
        F: Fn(&mut Configuration) -> bool + Send + Sync + 'static,
    {
        self.projector = Some(Box::new(projector));
        self
    }
}

impl Constraint for FnConstraint {
    fn name(&self) -> &str {
        &self.name
    }

    fn is_satisfied(&self, q: &Configuration) -> bool {
        (self.predicate)(q)
    }

    fn project(&self, q: &mut Configuration) -> Result<(), ProjectionError> {
        let converged = match &self.projector {
            Some(projector) => projector(&mut *q),
            None => true,
        };
        if converged && self.is_satisfied(q) {
            Ok(())
        } else {
            Err(ProjectionError::new(&*self.name))
        }
    }
}

impl fmt::Debug for FnConstraint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FnConstraint")
            .field("name", &self.name)
            .field("has_projector", &self.projector.is_some())
            .finish()
    }
}

/// An ordered conjunction of constraints.
///
/// Constraint sets describe both the states of a constraint graph and the
/// constraints along an edge's paths. In the latter case the set is labelled
/// with the edge's name so that failures can be traced back to it.
#[derive(Debug, Clone, Default)]
pub struct ConstraintSet {
    name: String,
    constraints: Vec<SharedConstraint>,
    edge: Option<String>,
}

impl ConstraintSet {
    /// Creates an empty set, satisfied by every configuration.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            constraints: Vec::new(),
            edge: None,
        }
    }

    /// Appends a constraint.
    #[must_use]
    pub fn with<C: Constraint + 'static>(mut self, constraint: C) -> Self {
        self.constraints.push(Arc::new(constraint));
        self
    }

    /// Appends an already shared constraint.
    #[must_use]
    pub fn with_shared(mut self, constraint: SharedConstraint) -> Self {
        self.constraints.push(constraint);
        self
    }

    /// Labels the set with the edge whose paths it constrains.
    #[must_use]
    pub fn with_edge(mut self, edge: impl Into<String>) -> Self {
        self.edge = Some(edge.into());
        self
    }

    /// Returns the set's name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the edge label, if any.
    #[must_use]
    pub fn edge(&self) -> Option<&str> {
        self.edge.as_deref()
    }

    /// Returns the constraints in application order.
    #[must_use]
    pub fn constraints(&self) -> &[SharedConstraint] {
        &self.constraints
    }

    /// Returns `true` if the set has no constraints.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.constraints.is_empty()
    }

    /// Returns `true` if `q` satisfies every constraint.
    #[must_use]
    pub fn is_satisfied(&self, q: &Configuration) -> bool {
        self.constraints.iter().all(|c| c.is_satisfied(q))
    }

    /// Projects `q` with each constraint in turn, then checks that the
    /// result satisfies all of them.
    ///
    /// A later projector may undo an earlier one, hence the final check.
    ///
    /// # Errors
    ///
    /// Returns the first constraint that failed to project or that is
    /// unsatisfied after all projections.
    pub fn apply(&self, q: &mut Configuration) -> Result<(), ProjectionError> {
        for constraint in &self.constraints {
            constraint.project(q)?;
        }
        match self.constraints.iter().find(|c| !c.is_satisfied(q)) {
            Some(violated) => Err(ProjectionError::new(violated.name())),
            None => Ok(()),
        }
    }
}
