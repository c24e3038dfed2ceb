//! Configuration-space obstacles.

use core::fmt;
use std::sync::Arc;

use manip_core::configuration::Configuration;

/// A region of configuration space that paths must avoid.
pub trait Obstacle: Send + Sync {
    /// Returns the obstacle's name, used in collision reports.
    fn name(&self) -> &str;

    /// Returns `true` if `q` lies inside the obstacle.
    fn collides(&self, q: &Configuration) -> bool;
}

impl fmt::Debug for dyn Obstacle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Obstacle")
            .field("name", &self.name())
            .finish_non_exhaustive()
    }
}

/// A shared obstacle handle.
pub type SharedObstacle = Arc<dyn Obstacle>;

/// An axis-aligned box over the leading coordinates of a configuration.
///
/// A box with bounds of dimension `k` only constrains the first `k`
/// coordinates; configurations with fewer coordinates never collide.
///
/// # Example
///
/// ```
/// use manip_core::configuration::Configuration;
/// use manip_planning::obstacle::{BoxObstacle, Obstacle};
///
/// let wall = BoxObstacle::new("wall", [1.0, -1.0], [1.5, 1.0]);
/// assert!(wall.collides(&Configuration::from([1.2, 0.0, 7.0])));
/// assert!(!wall.collides(&Configuration::from([0.5, 0.0, 7.0])));
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct BoxObstacle {
    name: String,
    lower: Vec<f64>,
    upper: Vec<f64>,
}

impl BoxObstacle {
    /// Creates a box from its lower and upper corners (inclusive).
    ///
    /// # Panics
    ///
    /// Panics if the corners differ in length.
    pub fn new(
        name: impl Into<String>,
        lower: impl Into<Vec<f64>>,
        upper: impl Into<Vec<f64>>,
    ) -> Self {
        let lower = lower.into();
        let upper = upper.into();
        assert_eq!(
            lower.len(),
            upper.len(),
            "box corners have different dimensions"
        );
        Self {
            name: name.into(),
            lower,
            upper,
        }
    }

    /// Returns the lower corner.
    #[must_use]
    pub fn lower(&self) -> &[f64] {
        &self.lower
    }

    /// Returns the upper corner.
    #[must_use]
    pub fn upper(&self) -> &[f64] {
        &self.upper
    }
}

impl Obstacle for BoxObstacle {
    fn name(&self) -> &str {
        &self.name
    }

    fn collides(&self, q: &Configuration) -> bool {
        q.dim() >= self.lower.len()
            && self
                .lower
                .iter()
                .zip(&self.upper)
                .zip(q.as_slice())
                .all(|((lo, hi), x)| (*lo..=*hi).contains(x))
    }
}
