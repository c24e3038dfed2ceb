//! Collision checking by sampling along a path.

use manip_core::configuration::Configuration;
use manip_core::path::{Path, TimeRange};

use crate::config::ValidationConfig;
use crate::error::{ConfigError, PlanningError};
use crate::obstacle::{Obstacle, SharedObstacle};
use crate::validation::{Outcome, PathValidation, PathValidator, ValidationReport};

/// A [`PathValidator`] that evaluates a path at regular time steps and
/// checks each sample against a set of obstacles.
///
/// Both endpoints of the path are always sampled. A sample that collides,
/// or at which the path cannot be evaluated, ends the valid part at the
/// previous sample.
///
/// # Example
///
/// ```
/// use std::sync::Arc;
///
/// use manip_core::configuration::Configuration;
/// use manip_core::path::Path;
/// use manip_core::straight_path::StraightPath;
/// use manip_planning::prelude::*;
///
/// let mut validator = DiscretizedCollisionValidation::new(&ValidationConfig::with_step(0.1)).unwrap();
/// validator.add_obstacle(Arc::new(BoxObstacle::new("wall", [0.5], [0.6])));
///
/// let path = StraightPath::between(Configuration::from([0.0]), Configuration::from([1.0])).unwrap();
/// let result = validator.validate(&path, false).unwrap();
///
/// assert!(!result.is_valid());
/// assert!(result.valid_part.length() < 0.5);
/// ```
#[derive(Debug, Clone)]
pub struct DiscretizedCollisionValidation {
    step: f64,
    obstacles: Vec<SharedObstacle>,
}

impl DiscretizedCollisionValidation {
    /// Creates a validator without obstacles.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidStep`] if the configured step is not
    /// usable.
    pub fn new(config: &ValidationConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self {
            step: config.step,
            obstacles: Vec::new(),
        })
    }

    /// Returns the sampling step.
    #[must_use]
    pub fn step(&self) -> f64 {
        self.step
    }

    /// Returns the obstacles checked so far.
    #[must_use]
    pub fn obstacles(&self) -> &[SharedObstacle] {
        &self.obstacles
    }

    fn first_collision(&self, q: &Configuration) -> Option<&dyn Obstacle> {
        self.obstacles
            .iter()
            .map(|obstacle| &**obstacle)
            .find(|obstacle| obstacle.collides(q))
    }

    /// Sample times covering `range`, in the order they must be checked.
    ///
    /// Times are produced lazily so that validation stops at the first
    /// invalid sample without computing the others.
    fn sample_times(
        &self,
        range: TimeRange,
        reverse: bool,
    ) -> Result<Box<dyn Iterator<Item = f64>>, PlanningError> {
        let length = range.length();
        let ratio = (length / self.step).ceil();
        // Beyond this the count no longer fits in a `usize`.
        if !ratio.is_finite() || ratio >= usize::MAX as f64 {
            return Err(PlanningError::TooManySamples {
                length,
                step: self.step,
            });
        }
        let steps = if length > 0.0 { ratio as usize } else { 0 };

        let time = move |i: usize| {
            if i == steps {
                range.end
            } else {
                range.start + length * i as f64 / steps as f64
            }
        };
        Ok(if reverse {
            Box::new((0..=steps).rev().map(time))
        } else {
            Box::new((0..=steps).map(time))
        })
    }

    fn check(&self, path: &dyn Path, t: f64) -> Option<ValidationReport> {
        match path.eval(t) {
            Ok(q) => self
                .first_collision(&q)
                .map(|obstacle| ValidationReport::Collision {
                    obstacle: obstacle.name().to_owned(),
                    time: t,
                }),
            Err(error) => Some(ValidationReport::Projection { time: t, error }),
        }
    }
}

impl PathValidator for DiscretizedCollisionValidation {
    fn validate(&self, path: &dyn Path, reverse: bool) -> Result<PathValidation, PlanningError> {
        let range = path.time_range();
        let mut last_valid = None;

        for t in self.sample_times(range, reverse)? {
            let Some(report) = self.check(path, t) else {
                last_valid = Some(t);
                continue;
            };

            let valid_range = match (reverse, last_valid) {
                (false, Some(last)) => TimeRange::new(range.start, last)?,
                (false, None) => TimeRange::point(range.start),
                (true, Some(last)) => TimeRange::new(last, range.end)?,
                (true, None) => TimeRange::point(range.end),
            };
            tracing::trace!(%report, reverse, "path is invalid");
            return Ok(PathValidation::invalid(
                path.extract(valid_range)?,
                Outcome::Collision(report),
            ));
        }

        Ok(PathValidation::valid(path.boxed_clone()))
    }

    fn add_obstacle(&mut self, obstacle: SharedObstacle) {
        self.obstacles.push(obstacle);
    }
}
