//! Straight-line paths.

use std::sync::Arc;

use crate::configuration::Configuration;
use crate::constraint::ConstraintSet;
use crate::error::PathError;
use crate::path::{BoxedPath, Path, TimeRange, check_extract_range};

/// Linear interpolation between two configurations, optionally projected
/// onto a constraint set at every evaluation.
///
/// The interpolation parameter is fixed at construction (`base`); extracting
/// a sub-path only narrows the evaluable domain, so the extracted path
/// reproduces the parent path's values exactly.
#[derive(Debug, Clone)]
pub struct StraightPath {
    from: Configuration,
    to: Configuration,
    base: TimeRange,
    range: TimeRange,
    constraints: Option<Arc<ConstraintSet>>,
}

impl StraightPath {
    /// Creates a path from `from` to `to` over `[0, length]`.
    ///
    /// # Errors
    ///
    /// Returns [`PathError::DimensionMismatch`] if the configurations differ
    /// in dimension, or [`PathError::InvalidRange`] if `length` is negative.
    pub fn new(from: Configuration, to: Configuration, length: f64) -> Result<Self, PathError> {
        if from.dim() != to.dim() {
            return Err(PathError::DimensionMismatch {
                expected: from.dim(),
                found: to.dim(),
            });
        }
        let base = TimeRange::new(0.0, length)?;
        Ok(Self {
            from,
            to,
            base,
            range: base,
            constraints: None,
        })
    }

    /// Creates a path whose length is the distance between the endpoints.
    ///
    /// # Errors
    ///
    /// See [`StraightPath::new`].
    pub fn between(from: Configuration, to: Configuration) -> Result<Self, PathError> {
        let length = from.distance(&to);
        Self::new(from, to, length)
    }

    /// Evaluates the path under `constraints`.
    #[must_use]
    pub fn with_constraints(mut self, constraints: Arc<ConstraintSet>) -> Self {
        self.constraints = Some(constraints);
        self
    }

    /// Returns the unprojected start configuration of the full segment.
    #[must_use]
    pub fn from_config(&self) -> &Configuration {
        &self.from
    }

    /// Returns the unprojected end configuration of the full segment.
    #[must_use]
    pub fn to_config(&self) -> &Configuration {
        &self.to
    }
}

impl Path for StraightPath {
    fn time_range(&self) -> TimeRange {
        self.range
    }

    fn output_size(&self) -> usize {
        self.from.dim()
    }

    fn eval(&self, t: f64) -> Result<Configuration, PathError> {
        if !self.range.contains(t) {
            return Err(PathError::TimeOutOfRange {
                time: t,
                start: self.range.start,
                end: self.range.end,
            });
        }
        let alpha = if self.base.is_degenerate() {
            0.0
        } else {
            (t - self.base.start) / self.base.length()
        };
        let mut q = self.from.interpolate(&self.to, alpha);
        if let Some(constraints) = &self.constraints {
            constraints.apply(&mut q)?;
        }
        Ok(q)
    }

    fn extract(&self, range: TimeRange) -> Result<BoxedPath, PathError> {
        check_extract_range(self.range, range)?;
        let mut sub = self.clone();
        sub.range = range;
        Ok(Box::new(sub))
    }

    fn boxed_clone(&self) -> BoxedPath {
        Box::new(self.clone())
    }

    fn constraints(&self) -> Option<&ConstraintSet> {
        self.constraints.as_deref()
    }
}
