//! Robot configurations.
//!
//! A [`Configuration`] is a point in the robot's continuous configuration
//! space. Its dimension is fixed for a given problem; nothing here enforces
//! that globally, callers compare [`Configuration::dim`] where it matters.

use core::fmt;
use core::ops::{Index, IndexMut};

use serde::{Deserialize, Serialize};

/// A point in configuration space.
///
/// Equality is exact (bitwise on each coordinate). Membership in a state is
/// never decided by equality but by constraint satisfaction, see
/// [`ConstraintSet`](crate::constraint::ConstraintSet).
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Configuration(Vec<f64>);

impl Configuration {
    /// Creates a configuration from its coordinates.
    #[must_use]
    pub fn new(values: Vec<f64>) -> Self {
        Self(values)
    }

    /// Creates the origin of a `dim`-dimensional configuration space.
    #[must_use]
    pub fn zeros(dim: usize) -> Self {
        Self(vec![0.0; dim])
    }

    /// Returns the number of coordinates.
    #[must_use]
    pub fn dim(&self) -> usize {
        self.0.len()
    }

    /// Returns the coordinates as a slice.
    #[must_use]
    pub fn as_slice(&self) -> &[f64] {
        &self.0
    }

    /// Returns the coordinates as a mutable slice.
    pub fn as_mut_slice(&mut self) -> &mut [f64] {
        &mut self.0
    }

    /// Consumes the configuration and returns its coordinates.
    #[must_use]
    pub fn into_inner(self) -> Vec<f64> {
        self.0
    }

    /// Linear interpolation: `self + alpha * (other - self)`.
    ///
    /// Both configurations must have the same dimension; this is only
    /// checked in debug builds.
    #[must_use]
    pub fn interpolate(&self, other: &Configuration, alpha: f64) -> Configuration {
        debug_assert_eq!(self.dim(), other.dim(), "interpolating across dimensions");
        self.0
            .iter()
            .zip(&other.0)
            .map(|(a, b)| a + alpha * (b - a))
            .collect()
    }

    /// Euclidean distance to `other`, of the same dimension.
    #[must_use]
    pub fn distance(&self, other: &Configuration) -> f64 {
        debug_assert_eq!(self.dim(), other.dim(), "distance across dimensions");
        self.0
            .iter()
            .zip(&other.0)
            .map(|(a, b)| (b - a) * (b - a))
            .sum::<f64>()
            .sqrt()
    }
}

impl From<Vec<f64>> for Configuration {
    fn from(values: Vec<f64>) -> Self {
        Self(values)
    }
}

impl<const N: usize> From<[f64; N]> for Configuration {
    fn from(values: [f64; N]) -> Self {
        Self(values.to_vec())
    }
}

impl FromIterator<f64> for Configuration {
    fn from_iter<I: IntoIterator<Item = f64>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl Index<usize> for Configuration {
    type Output = f64;

    fn index(&self, index: usize) -> &f64 {
        &self.0[index]
    }
}

impl IndexMut<usize> for Configuration {
    fn index_mut(&mut self, index: usize) -> &mut f64 {
        &mut self.0[index]
    }
}

impl fmt::Display for Configuration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("[")?;
        for (i, value) in self.0.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{value}")?;
        }
        f.write_str("]")
    }
}
