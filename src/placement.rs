//! Placement engine: vertical stacking and zone classification.
//!
//! Stacking is deliberately not a physics simulation. A shape being placed
//! rests on top of the highest neighbour whose unit footprint overlaps its
//! own and whose height is at or below the shape's current level plus half
//! a unit; with no qualifying neighbour it rests on the floor. The
//! half-unit tolerance keeps shapes at nearly the same level from climbing
//! onto each other while they pass.
//!
//! Zone membership is a pure function of x: the "To Do" floor spans
//! [-10, 10] and the "Done" floor (10, 30]. Positions outside both ranges
//! classify as neither, and callers leave the current status untouched.

#[cfg(test)]
#[path = "placement_test.rs"]
mod placement_test;

use crate::consts::{
    DONE_MAX_X, DONE_MIN_X, GROUND_Y, SAME_LEVEL_EPS, SHAPE_SIZE, TODO_MAX_X, TODO_MIN_X,
};
use crate::scene::{ShapeId, ShapeStore, TaskStatus};
use crate::space::Vec3;

/// Whether the unit footprints centred at `a` and `b` overlap in the XZ
/// plane.
#[must_use]
pub fn footprints_overlap(a: Vec3, b: Vec3) -> bool {
    (a.x - b.x).abs() < SHAPE_SIZE && (a.z - b.z).abs() < SHAPE_SIZE
}

/// Support height for the shape `target` if its footprint were at `at`.
///
/// Considers every other live shape whose footprint overlaps `at` and whose
/// height is at or below `at.y + SAME_LEVEL_EPS`; the result is the top of
/// the highest such neighbour, or [`GROUND_Y`] when none qualifies.
#[must_use]
pub fn resolve_support_height(target: ShapeId, at: Vec3, shapes: &ShapeStore) -> f64 {
    let mut support = GROUND_Y;
    for other in shapes.iter() {
        if other.id == target {
            continue;
        }
        if other.position.y > at.y + SAME_LEVEL_EPS {
            continue;
        }
        if !footprints_overlap(at, other.position) {
            continue;
        }
        let top = other.position.y + SHAPE_SIZE;
        if top > support {
            support = top;
        }
    }
    support
}

/// Zone status for an x position.
///
/// Returns `None` outside both floors; callers treat that as "leave the
/// current status unchanged" rather than as an error. x = 10 sits on both
/// boundaries and classifies as todo.
#[must_use]
pub fn classify_zone(x: f64) -> Option<TaskStatus> {
    if (TODO_MIN_X..=TODO_MAX_X).contains(&x) {
        Some(TaskStatus::Todo)
    } else if x > DONE_MIN_X && x <= DONE_MAX_X {
        Some(TaskStatus::Done)
    } else {
        None
    }
}
