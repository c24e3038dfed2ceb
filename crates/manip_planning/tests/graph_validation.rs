//! Tests for graph-aware path validation.
//!
//! These tests verify:
//! - Truncated paths are kept only when they link the same pair of states
//! - Degenerate parts are pinned where validation started
//! - Recoverable and fatal failures are told apart
//! - Composite paths are validated element by element, in both directions

mod test_utils;

use std::sync::Arc;

use manip_core::configuration::Configuration;
use manip_core::path::{Path, TimeRange};
use manip_core::path_vector::PathVector;
use manip_graph::error::GraphError;
use manip_graph::graph::ConstraintGraph;
use manip_planning::config::ValidationConfig;
use manip_planning::discretized::DiscretizedCollisionValidation;
use manip_planning::error::{Endpoint, PlanningError};
use manip_planning::graph_validation::GraphPathValidation;
use manip_planning::obstacle::BoxObstacle;
use manip_planning::validation::{Outcome, PathValidator, ValidationReport};
use test_utils::{
    FlakyPath, ScriptedValidator, edge_path, free_graph, gap_graph, line_graph, segment, x_at,
};

fn discretized() -> DiscretizedCollisionValidation {
    DiscretizedCollisionValidation::new(&ValidationConfig::with_step(0.01)).unwrap()
}

// ─────────────────────────────────────────────────────────────────────────────
// Single Paths
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn valid_path_is_returned_whole() {
    let line = line_graph();
    let validation = GraphPathValidation::new(&line.graph, Box::new(ScriptedValidator::accepting()));
    let path = edge_path(&line.graph, "cross", -1.0, 1.0);

    let result = validation.validate(&*path, false).unwrap();

    assert_eq!(result.outcome, Outcome::Valid);
    assert_eq!(result.valid_part.time_range(), path.time_range());
    assert_eq!(x_at(&*result.valid_part, 0.0), -1.0);
    assert_eq!(x_at(&*result.valid_part, 2.0), 1.0);
}

#[test]
fn truncation_within_the_same_states_is_kept() {
    let line = line_graph();
    let validation = GraphPathValidation::new(&line.graph, Box::new(ScriptedValidator::keeping(0.75)));
    let path = edge_path(&line.graph, "cross", -1.0, 1.0);

    let result = validation.validate(&*path, false).unwrap();

    assert_eq!(
        result.outcome,
        Outcome::Collision(ValidationReport::Collision {
            obstacle: "scripted".into(),
            time: 1.5
        })
    );
    assert_eq!(result.valid_part.time_range(), TimeRange { start: 0.0, end: 1.5 });
    assert_eq!(
        line.graph.get_state(&result.valid_part.end().unwrap()).unwrap().id(),
        line.right
    );
}

#[test]
fn truncation_into_other_states_is_degenerate_at_start() {
    let line = line_graph();
    let validation = GraphPathValidation::new(&line.graph, Box::new(ScriptedValidator::keeping(0.25)));
    let path = edge_path(&line.graph, "cross", -1.0, 1.0);

    let result = validation.validate(&*path, false).unwrap();

    assert_eq!(
        result.outcome,
        Outcome::StateMismatch {
            expected: (line.left, line.right),
            found: (line.left, line.left),
            report: Some(ValidationReport::Collision {
                obstacle: "scripted".into(),
                time: 0.5
            }),
        }
    );
    assert_eq!(result.valid_part.time_range(), TimeRange::point(0.0));
    assert_eq!(x_at(&*result.valid_part, 0.0), -1.0);
}

#[test]
fn reverse_truncation_keeps_the_end() {
    let line = line_graph();
    let validation = GraphPathValidation::new(&line.graph, Box::new(ScriptedValidator::keeping(0.75)));
    let path = edge_path(&line.graph, "cross", -1.0, 1.0);

    let result = validation.validate(&*path, true).unwrap();

    assert!(matches!(result.outcome, Outcome::Collision(_)));
    assert_eq!(result.valid_part.time_range(), TimeRange { start: 0.5, end: 2.0 });
}

#[test]
fn reverse_mismatch_is_degenerate_at_end() {
    let line = line_graph();
    let validation = GraphPathValidation::new(&line.graph, Box::new(ScriptedValidator::keeping(0.25)));
    let path = edge_path(&line.graph, "cross", -1.0, 1.0);

    let result = validation.validate(&*path, true).unwrap();

    assert!(matches!(
        result.outcome,
        Outcome::StateMismatch { found, .. } if found == (line.right, line.right)
    ));
    assert_eq!(result.valid_part.time_range(), TimeRange::point(2.0));
    assert_eq!(x_at(&*result.valid_part, 2.0), 1.0);
}

#[test]
fn collision_free_part_from_a_real_validator() {
    let line = line_graph();
    let mut validation = GraphPathValidation::new(&line.graph, Box::new(discretized()));
    validation.add_obstacle(Arc::new(BoxObstacle::new("post", [0.5], [0.6])));
    let path = edge_path(&line.graph, "cross", -1.0, 1.0);

    let result = validation.validate(&*path, false).unwrap();

    let Outcome::Collision(ValidationReport::Collision { obstacle, .. }) = &result.outcome else {
        panic!("expected a collision, got {:?}", result.outcome);
    };
    assert_eq!(obstacle, "post");
    let end = x_at(&*result.valid_part, result.valid_part.time_range().end);
    assert!(end > 0.0 && end < 0.5);
}

// ─────────────────────────────────────────────────────────────────────────────
// Failure Classes
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn unclassifiable_end_is_recoverable() {
    let graph = gap_graph();
    let validation = GraphPathValidation::new(&graph, Box::new(ScriptedValidator::keeping(0.5)));
    let path = edge_path(&graph, "jump", -1.0, 2.0);

    let result = validation.validate(&*path, false).unwrap();

    assert_eq!(
        result.outcome,
        Outcome::Reclassification {
            edge: Some("jump".into()),
            error: GraphError::NoMatchingState {
                configuration: Configuration::from([0.5])
            },
            report: Some(ValidationReport::Collision {
                obstacle: "scripted".into(),
                time: 1.5
            }),
        }
    );
    assert_eq!(result.valid_part.time_range(), TimeRange::point(0.0));
}

#[test]
fn unlabelled_path_reclassification_has_no_edge() {
    let graph = gap_graph();
    let validation = GraphPathValidation::new(&graph, Box::new(ScriptedValidator::keeping(0.5)));

    let result = validation.validate(&segment(-1.0, 2.0), false).unwrap();

    assert!(matches!(result.outcome, Outcome::Reclassification { edge: None, .. }));
}

#[test]
fn unclassifiable_start_is_fatal() {
    let graph = gap_graph();
    let validation = GraphPathValidation::new(&graph, Box::new(ScriptedValidator::keeping(0.5)));
    let path = edge_path(&graph, "jump", -1.0, 2.0);

    let err = validation.validate(&*path, true).unwrap_err();

    assert!(matches!(
        err,
        PlanningError::Classification(GraphError::NoMatchingState { .. })
    ));
}

#[test]
fn unclassifiable_path_endpoint_is_fatal() {
    let graph = gap_graph();
    let validation = GraphPathValidation::new(&graph, Box::new(ScriptedValidator::keeping(0.25)));

    // The valid part ends at x = -0.625, in `low`; the path ends in the gap.
    let err = validation.validate(&segment(-1.0, 0.5), false).unwrap_err();

    assert!(matches!(err, PlanningError::Classification(_)));
}

#[test]
fn projection_failures_name_their_endpoint() {
    let line = line_graph();
    let cases = [
        // (failing times, fraction kept, reverse, expected endpoint)
        (vec![0.0], 0.5, false, Endpoint::ValidPartStart),
        (vec![1.0], 0.5, false, Endpoint::ValidPartEnd),
        (vec![0.0], 0.75, true, Endpoint::PathStart),
        (vec![2.0], 0.75, false, Endpoint::PathEnd),
    ];

    for (failing, fraction, reverse, expected) in cases {
        let validation =
            GraphPathValidation::new(&line.graph, Box::new(ScriptedValidator::keeping(fraction)));
        let path = FlakyPath::new(-1.0, 1.0, failing);

        let err = validation.validate(&path, reverse).unwrap_err();

        assert!(matches!(err, PlanningError::Projection { .. }));
        assert_eq!(err.endpoint(), Some(expected));
    }
}

#[test]
fn valid_paths_skip_endpoint_checks() {
    let line = line_graph();
    let validation = GraphPathValidation::new(&line.graph, Box::new(ScriptedValidator::accepting()));

    let result = validation
        .validate(&FlakyPath::new(-1.0, 1.0, [0.0, 2.0]), false)
        .unwrap();

    assert!(result.is_valid());
}

// ─────────────────────────────────────────────────────────────────────────────
// Composite Paths
// ─────────────────────────────────────────────────────────────────────────────

fn three_segments() -> PathVector {
    PathVector::from_paths(
        1,
        [
            Box::new(segment(-3.0, -2.0)) as Box<dyn Path>,
            Box::new(segment(-2.0, -1.0)),
            Box::new(segment(-1.0, -0.5)),
        ],
    )
    .unwrap()
}

fn post_validation(graph: &ConstraintGraph) -> GraphPathValidation<'_> {
    let mut validation = GraphPathValidation::new(graph, Box::new(discretized()));
    validation.add_obstacle(Arc::new(BoxObstacle::new("post", [-1.6], [-1.4])));
    validation
}

#[test]
fn composite_valid_path_is_copied() {
    let line = line_graph();
    let validation = GraphPathValidation::new(&line.graph, Box::new(discretized()));
    let vector = three_segments();

    let result = validation.validate(&vector, false).unwrap();

    assert!(result.is_valid());
    let copy = result.valid_part.downcast_ref::<PathVector>().unwrap();
    assert_eq!(copy.number_paths(), 3);
    assert_eq!(copy.time_range(), vector.time_range());
}

#[test]
fn composite_forward_keeps_prefix() {
    let line = line_graph();
    let validation = post_validation(&line.graph);
    let vector = three_segments();

    let result = validation.validate(&vector, false).unwrap();

    assert!(matches!(
        result.outcome,
        Outcome::Collision(ValidationReport::Collision { ref obstacle, .. }) if obstacle == "post"
    ));
    let prefix = result.valid_part.downcast_ref::<PathVector>().unwrap();
    assert_eq!(prefix.number_paths(), 2);
    assert_eq!(
        prefix.path_at_rank(0).unwrap().time_range(),
        vector.path_at_rank(0).unwrap().time_range()
    );
    assert_eq!(x_at(prefix, 0.0), -3.0);
    let end = x_at(prefix, prefix.time_range().end);
    assert!(end > -1.7 && end < -1.59, "prefix ends at {end}");
}

#[test]
fn composite_reverse_keeps_suffix() {
    let line = line_graph();
    let validation = post_validation(&line.graph);
    let vector = three_segments();

    let result = validation.validate(&vector, true).unwrap();

    assert!(matches!(result.outcome, Outcome::Collision(_)));
    let suffix = result.valid_part.downcast_ref::<PathVector>().unwrap();
    assert_eq!(suffix.number_paths(), 2);
    assert_eq!(
        suffix.path_at_rank(1).unwrap().time_range(),
        vector.path_at_rank(2).unwrap().time_range()
    );
    let start = x_at(suffix, 0.0);
    assert!(start > -1.41 && start < -1.3, "suffix starts at {start}");
    assert_eq!(x_at(suffix, suffix.time_range().end), -0.5);
}

#[test]
fn composite_failing_first_element_keeps_a_single_point() {
    let line = line_graph();
    let mut validation = GraphPathValidation::new(&line.graph, Box::new(discretized()));
    validation.add_obstacle(Arc::new(BoxObstacle::new("start", [-3.1], [-2.9])));

    let result = validation.validate(&three_segments(), false).unwrap();

    let prefix = result.valid_part.downcast_ref::<PathVector>().unwrap();
    assert_eq!(prefix.number_paths(), 1);
    assert!(prefix.time_range().is_degenerate());
}

// ─────────────────────────────────────────────────────────────────────────────
// Obstacles
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn add_obstacle_is_forwarded() {
    let graph = free_graph();
    let inner = ScriptedValidator::accepting();
    let recorded = inner.obstacles();
    let mut validation = GraphPathValidation::new(&graph, Box::new(inner));

    validation.add_obstacle(Arc::new(BoxObstacle::new("table", [0.0], [1.0])));
    validation.add_obstacle(Arc::new(BoxObstacle::new("shelf", [2.0], [3.0])));

    assert_eq!(*recorded.lock().unwrap(), vec!["table", "shelf"]);
}

#[test]
fn wrapped_obstacles_behave_like_direct_ones() {
    let graph = free_graph();
    let obstacle = Arc::new(BoxObstacle::new("table", [0.3], [0.4]));
    let path = segment(0.0, 1.0);

    let mut direct = discretized();
    direct.add_obstacle(obstacle.clone());
    let mut wrapped = GraphPathValidation::new(&graph, Box::new(discretized()));
    wrapped.add_obstacle(obstacle);

    for reverse in [false, true] {
        let expected = direct.validate(&path, reverse).unwrap();
        let actual = wrapped.validate(&path, reverse).unwrap();
        assert_eq!(actual.outcome, expected.outcome);
        assert_eq!(actual.valid_part.time_range(), expected.valid_part.time_range());
    }
}
