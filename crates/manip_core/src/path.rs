//! The path abstraction.
//!
//! A path is a continuous motion parameterized by time over a closed
//! interval. Evaluating a path may fail: paths built under constraints
//! project every configuration they produce, and projection does not always
//! converge.
//!
//! Paths are handled as [`BoxedPath`] trait objects. Composite paths are
//! [`PathVector`](crate::path_vector::PathVector)s; code that needs to treat
//! them specially recovers the concrete type with `downcast_ref` on
//! `dyn Path`.

use core::fmt;

use downcast_rs::{DowncastSync, impl_downcast};

use crate::configuration::Configuration;
use crate::constraint::ConstraintSet;
use crate::error::PathError;

/// A closed time interval `[start, end]`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TimeRange {
    /// Lower bound.
    pub start: f64,
    /// Upper bound.
    pub end: f64,
}

impl TimeRange {
    /// Creates the interval `[start, end]`.
    ///
    /// # Errors
    ///
    /// Returns [`PathError::InvalidRange`] if `start > end` or either bound
    /// is NaN.
    pub fn new(start: f64, end: f64) -> Result<Self, PathError> {
        if start <= end {
            Ok(Self { start, end })
        } else {
            Err(PathError::InvalidRange { start, end })
        }
    }

    /// Creates the zero-length interval `[t, t]`.
    #[must_use]
    pub fn point(t: f64) -> Self {
        Self { start: t, end: t }
    }

    /// Returns `end - start`.
    #[must_use]
    pub fn length(&self) -> f64 {
        self.end - self.start
    }

    /// Returns `true` if the interval has zero length.
    #[must_use]
    pub fn is_degenerate(&self) -> bool {
        self.start == self.end
    }

    /// Returns `true` if `t` lies in the interval.
    #[must_use]
    pub fn contains(&self, t: f64) -> bool {
        self.start <= t && t <= self.end
    }

    /// Returns `true` if `other` lies entirely in the interval.
    #[must_use]
    pub fn contains_range(&self, other: &TimeRange) -> bool {
        self.start <= other.start && other.end <= self.end
    }
}

impl fmt::Display for TimeRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}, {}]", self.start, self.end)
    }
}

/// A continuous, time-parameterized motion through configuration space.
pub trait Path: DowncastSync + fmt::Debug {
    /// Returns the path's domain.
    fn time_range(&self) -> TimeRange;

    /// Returns the dimension of the configurations this path produces.
    fn output_size(&self) -> usize;

    /// Evaluates the configuration at time `t`.
    ///
    /// # Errors
    ///
    /// Returns [`PathError::TimeOutOfRange`] if `t` is outside
    /// [`time_range`](Path::time_range), or [`PathError::Projection`] if the
    /// path's constraints cannot be satisfied at `t`.
    fn eval(&self, t: f64) -> Result<Configuration, PathError>;

    /// Extracts the sub-interval `range` as a new path.
    ///
    /// Zero-length ranges are allowed.
    ///
    /// # Errors
    ///
    /// Returns [`PathError::InvalidRange`] if `range` is not contained in the
    /// path's domain.
    fn extract(&self, range: TimeRange) -> Result<BoxedPath, PathError>;

    /// Returns a boxed copy of this path.
    fn boxed_clone(&self) -> BoxedPath;

    /// Returns the constraints the path is evaluated under, if any.
    fn constraints(&self) -> Option<&ConstraintSet> {
        None
    }

    /// Evaluates the configuration at the start of the domain.
    ///
    /// # Errors
    ///
    /// See [`eval`](Path::eval).
    fn initial(&self) -> Result<Configuration, PathError> {
        self.eval(self.time_range().start)
    }

    /// Evaluates the configuration at the end of the domain.
    ///
    /// # Errors
    ///
    /// See [`eval`](Path::eval).
    fn end(&self) -> Result<Configuration, PathError> {
        self.eval(self.time_range().end)
    }

    /// Returns the length of the domain.
    fn length(&self) -> f64 {
        self.time_range().length()
    }
}

impl_downcast!(sync Path);

/// Type alias for owned, type-erased paths.
pub type BoxedPath = Box<dyn Path>;

impl Clone for Box<dyn Path> {
    fn clone(&self) -> Self {
        self.boxed_clone()
    }
}

/// Checks that `range` can be extracted from a path with domain `domain`.
///
/// # Errors
///
/// Returns [`PathError::InvalidRange`] otherwise.
pub fn check_extract_range(domain: TimeRange, range: TimeRange) -> Result<(), PathError> {
    if range.start <= range.end && domain.contains_range(&range) {
        Ok(())
    } else {
        Err(PathError::InvalidRange {
            start: range.start,
            end: range.end,
        })
    }
}
