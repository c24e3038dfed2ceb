//! Shared test utilities for `manip_planning` integration tests.
//!
//! This module provides graphs, validators, paths and steering primitives
//! used across multiple test files. Import via `mod test_utils;` in test
//! files.

#![allow(
    dead_code,
    missing_docs,
    reason = "shared test utilities, not all items used in every test binary"
)]

use std::sync::{Arc, Mutex};

use manip_core::configuration::Configuration;
use manip_core::constraint::{ConstraintSet, FnConstraint};
use manip_core::error::{PathError, ProjectionError};
use manip_core::path::{BoxedPath, Path, TimeRange};
use manip_core::steering::SteeringMethod;
use manip_core::straight_path::StraightPath;
use manip_graph::graph::ConstraintGraph;
use manip_graph::state::StateId;
use manip_planning::error::PlanningError;
use manip_planning::obstacle::{Obstacle, SharedObstacle};
use manip_planning::validation::{Outcome, PathValidation, PathValidator, ValidationReport};

// ═══════════════════════════════════════════════════════════════════════════════
// GRAPHS
// ═══════════════════════════════════════════════════════════════════════════════

/// A one-dimensional graph split at `x = 0`.
pub struct LineGraph {
    pub graph: ConstraintGraph,
    pub left: StateId,
    pub right: StateId,
}

/// States `left` (`x < 0`) and `right` (everything else), with edges
/// `left_loop`, `cross` and `right_loop`.
pub fn line_graph() -> LineGraph {
    let mut builder = ConstraintGraph::builder("line");
    let left = builder.add_state(
        "left",
        ConstraintSet::new("left").with(FnConstraint::new("x<0", |q| q[0] < 0.0)),
    );
    let right = builder.add_state("right", ConstraintSet::new("right"));
    builder.add_edge("left_loop", left, left, ConstraintSet::new("left_loop"));
    builder.add_edge("cross", left, right, ConstraintSet::new("cross"));
    builder.add_edge("right_loop", right, right, ConstraintSet::new("right_loop"));
    LineGraph {
        graph: builder.build().unwrap(),
        left,
        right,
    }
}

/// States `low` (`x < 0`) and `high` (`x > 1`) with an edge `jump` between
/// them. Configurations in `[0, 1]` belong to no state.
pub fn gap_graph() -> ConstraintGraph {
    let mut builder = ConstraintGraph::builder("gap");
    let low = builder.add_state(
        "low",
        ConstraintSet::new("low").with(FnConstraint::new("x<0", |q| q[0] < 0.0)),
    );
    let high = builder.add_state(
        "high",
        ConstraintSet::new("high").with(FnConstraint::new("x>1", |q| q[0] > 1.0)),
    );
    builder.add_edge("jump", low, high, ConstraintSet::new("jump"));
    builder.build().unwrap()
}

/// A graph with a single catch-all state and a self loop.
pub fn free_graph() -> ConstraintGraph {
    let mut builder = ConstraintGraph::builder("free");
    let free = builder.add_state("free", ConstraintSet::new("free"));
    builder.add_edge("move", free, free, ConstraintSet::new("move"));
    builder.build().unwrap()
}

/// Builds a path along the named edge of `graph`.
pub fn edge_path(graph: &ConstraintGraph, edge: &str, from: f64, to: f64) -> BoxedPath {
    graph
        .edge_by_name(edge)
        .unwrap()
        .build(&Configuration::from([from]), &Configuration::from([to]))
        .unwrap()
}

/// An unconstrained straight path on the real line.
pub fn segment(from: f64, to: f64) -> StraightPath {
    StraightPath::between(Configuration::from([from]), Configuration::from([to])).unwrap()
}

/// Returns the first coordinate of `path` at `t`.
pub fn x_at(path: &dyn Path, t: f64) -> f64 {
    path.eval(t).unwrap()[0]
}

// ═══════════════════════════════════════════════════════════════════════════════
// SCRIPTED VALIDATOR
// ═══════════════════════════════════════════════════════════════════════════════

/// A validator that truncates every path at a fixed fraction of its length,
/// without evaluating it.
///
/// Forward validation keeps `[start, start + fraction * length]`; reverse
/// validation keeps `[end - fraction * length, end]`. A fraction of `1.0`
/// or more accepts the whole path. Obstacle names are recorded.
pub struct ScriptedValidator {
    fraction: f64,
    obstacles: Arc<Mutex<Vec<String>>>,
}

impl ScriptedValidator {
    pub fn keeping(fraction: f64) -> Self {
        Self {
            fraction,
            obstacles: Arc::new(Mutex::new(Vec::new())),
        }
    }

    pub fn accepting() -> Self {
        Self::keeping(1.0)
    }

    /// Handle on the recorded obstacle names.
    pub fn obstacles(&self) -> Arc<Mutex<Vec<String>>> {
        Arc::clone(&self.obstacles)
    }
}

impl PathValidator for ScriptedValidator {
    fn validate(&self, path: &dyn Path, reverse: bool) -> Result<PathValidation, PlanningError> {
        if self.fraction >= 1.0 {
            return Ok(PathValidation::valid(path.boxed_clone()));
        }

        let range = path.time_range();
        let kept = range.length() * self.fraction;
        let (valid_range, time) = if reverse {
            let cut = range.end - kept;
            (TimeRange::new(cut, range.end)?, cut)
        } else {
            let cut = range.start + kept;
            (TimeRange::new(range.start, cut)?, cut)
        };
        Ok(PathValidation::invalid(
            path.extract(valid_range)?,
            Outcome::Collision(ValidationReport::Collision {
                obstacle: "scripted".into(),
                time,
            }),
        ))
    }

    fn add_obstacle(&mut self, obstacle: SharedObstacle) {
        self.obstacles
            .lock()
            .unwrap()
            .push(obstacle.name().to_owned());
    }
}

// ═══════════════════════════════════════════════════════════════════════════════
// FLAKY PATH
// ═══════════════════════════════════════════════════════════════════════════════

/// A path that cannot be evaluated at some given times.
#[derive(Debug, Clone)]
pub struct FlakyPath {
    inner: BoxedPath,
    failing: Vec<f64>,
}

impl FlakyPath {
    /// A straight path on the real line failing at each time in `failing`.
    pub fn new(from: f64, to: f64, failing: impl Into<Vec<f64>>) -> Self {
        Self {
            inner: Box::new(segment(from, to)),
            failing: failing.into(),
        }
    }
}

impl Path for FlakyPath {
    fn time_range(&self) -> TimeRange {
        self.inner.time_range()
    }

    fn output_size(&self) -> usize {
        self.inner.output_size()
    }

    fn eval(&self, t: f64) -> Result<Configuration, PathError> {
        if self.failing.iter().any(|failing| (failing - t).abs() < 1e-12) {
            return Err(ProjectionError::new("flaky").into());
        }
        self.inner.eval(t)
    }

    fn extract(&self, range: TimeRange) -> Result<BoxedPath, PathError> {
        Ok(Box::new(Self {
            inner: self.inner.extract(range)?,
            failing: self.failing.clone(),
        }))
    }

    fn boxed_clone(&self) -> BoxedPath {
        Box::new(self.clone())
    }
}

// ═══════════════════════════════════════════════════════════════════════════════
// RECORDING STEERING
// ═══════════════════════════════════════════════════════════════════════════════

/// A steering primitive that records its name each time it is asked for a
/// path, and either builds a straight path or fails.
#[derive(Debug)]
pub struct RecordingSteering {
    name: &'static str,
    succeeds: bool,
    log: Arc<Mutex<Vec<&'static str>>>,
}

impl RecordingSteering {
    pub fn new(name: &'static str, succeeds: bool, log: &Arc<Mutex<Vec<&'static str>>>) -> Self {
        Self {
            name,
            succeeds,
            log: Arc::clone(log),
        }
    }
}

impl SteeringMethod for RecordingSteering {
    fn compute(&self, from: &Configuration, to: &Configuration) -> Option<BoxedPath> {
        self.log.lock().unwrap().push(self.name);
        if !self.succeeds {
            return None;
        }
        let path = StraightPath::between(from.clone(), to.clone()).ok()?;
        Some(Box::new(path))
    }
}

/// A graph `a` (`x < 0`) → `b` (anything) whose edges use
/// [`RecordingSteering`] primitives, added in the given order.
pub fn recording_graph(
    edges: &[(&'static str, bool)],
    log: &Arc<Mutex<Vec<&'static str>>>,
) -> ConstraintGraph {
    let mut builder = ConstraintGraph::builder("recording");
    let a = builder.add_state(
        "a",
        ConstraintSet::new("a").with(FnConstraint::new("x<0", |q| q[0] < 0.0)),
    );
    let b = builder.add_state("b", ConstraintSet::new("b"));
    for &(name, succeeds) in edges {
        builder.add_edge_with_steering(
            name,
            a,
            b,
            ConstraintSet::new(name),
            Box::new(RecordingSteering::new(name, succeeds, log)),
        );
    }
    builder.build().unwrap()
}
