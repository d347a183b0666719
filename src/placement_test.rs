#![allow(clippy::float_cmp)]

use super::*;
use crate::consts::{GROUND_Y, SHAPE_SIZE};
use crate::scene::ShapeKind;

fn store_with(positions: &[Vec3]) -> (ShapeStore, Vec<ShapeId>) {
    let mut store = ShapeStore::new();
    let ids = positions
        .iter()
        .map(|p| store.add(ShapeKind::Cube, *p, "#1475b5".to_string()))
        .collect();
    (store, ids)
}

fn at_ground(x: f64, z: f64) -> Vec3 {
    Vec3::new(x, GROUND_Y, z)
}

// =============================================================
// footprints_overlap
// =============================================================

#[test]
fn overlap_same_position() {
    assert!(footprints_overlap(at_ground(0.0, 0.0), at_ground(0.0, 0.0)));
}

#[test]
fn overlap_within_unit_on_both_axes() {
    assert!(footprints_overlap(at_ground(0.0, 0.0), at_ground(0.9, 0.9)));
}

#[test]
fn no_overlap_at_exactly_unit_distance() {
    assert!(!footprints_overlap(at_ground(0.0, 0.0), at_ground(SHAPE_SIZE, 0.0)));
    assert!(!footprints_overlap(at_ground(0.0, 0.0), at_ground(0.0, SHAPE_SIZE)));
}

#[test]
fn no_overlap_requires_both_axes() {
    // Close in x but far in z.
    assert!(!footprints_overlap(at_ground(0.0, 0.0), at_ground(0.2, 5.0)));
    // Close in z but far in x.
    assert!(!footprints_overlap(at_ground(0.0, 0.0), at_ground(5.0, 0.2)));
}

#[test]
fn overlap_ignores_height() {
    let low = Vec3::new(0.0, -0.999, 0.0);
    let high = Vec3::new(0.3, 50.0, 0.3);
    assert!(footprints_overlap(low, high));
}

// =============================================================
// resolve_support_height
// =============================================================

#[test]
fn empty_board_resolves_to_ground() {
    let (mut store, _) = store_with(&[]);
    let id = store.add(ShapeKind::Cube, at_ground(0.0, 0.0), "#1475b5".to_string());
    assert_eq!(resolve_support_height(id, at_ground(0.0, 0.0), &store), GROUND_Y);
}

#[test]
fn non_overlapping_shapes_resolve_independently() {
    let (store, ids) = store_with(&[at_ground(0.0, 0.0), at_ground(5.0, 5.0)]);
    assert_eq!(resolve_support_height(ids[0], at_ground(0.0, 0.0), &store), GROUND_Y);
    assert_eq!(resolve_support_height(ids[1], at_ground(5.0, 5.0), &store), GROUND_Y);
}

#[test]
fn rests_on_top_of_overlapping_neighbour() {
    let (mut store, ids) = store_with(&[at_ground(0.0, 0.0)]);
    let target = store.add(ShapeKind::Cube, at_ground(0.2, 0.2), "#1475b5".to_string());
    let y = resolve_support_height(target, at_ground(0.2, 0.2), &store);
    assert_eq!(y, GROUND_Y + SHAPE_SIZE);
    assert_eq!(store.get(ids[0]).unwrap().position.y, GROUND_Y); // neighbour untouched
}

#[test]
fn picks_highest_qualifying_neighbour() {
    let base = at_ground(0.0, 0.0);
    let stacked = Vec3::new(0.1, GROUND_Y + SHAPE_SIZE, 0.1);
    let (mut store, _) = store_with(&[base, stacked]);
    // Target already lifted to the stacked level, so both neighbours qualify.
    let at = Vec3::new(0.0, GROUND_Y + SHAPE_SIZE, 0.0);
    let target = store.add(ShapeKind::Cube, at, "#1475b5".to_string());
    let y = resolve_support_height(target, at, &store);
    assert_eq!(y, GROUND_Y + 2.0 * SHAPE_SIZE);
}

#[test]
fn tolerance_excludes_neighbours_well_above() {
    // A neighbour more than half a unit above the target never supports it.
    let high = Vec3::new(0.0, GROUND_Y + SHAPE_SIZE, 0.0);
    let (mut store, _) = store_with(&[high]);
    let target = store.add(ShapeKind::Cube, at_ground(0.0, 0.0), "#1475b5".to_string());
    let y = resolve_support_height(target, at_ground(0.0, 0.0), &store);
    assert_eq!(y, GROUND_Y);
}

#[test]
fn neighbour_at_tolerance_boundary_still_supports() {
    let near = Vec3::new(0.0, GROUND_Y + 0.5, 0.0);
    let (mut store, _) = store_with(&[near]);
    let target = store.add(ShapeKind::Cube, at_ground(0.0, 0.0), "#1475b5".to_string());
    let y = resolve_support_height(target, at_ground(0.0, 0.0), &store);
    assert_eq!(y, GROUND_Y + 0.5 + SHAPE_SIZE);
}

#[test]
fn target_never_supports_itself() {
    let (store, ids) = store_with(&[at_ground(0.0, 0.0)]);
    assert_eq!(resolve_support_height(ids[0], at_ground(0.0, 0.0), &store), GROUND_Y);
}

#[test]
fn far_neighbours_are_ignored() {
    let (mut store, _) = store_with(&[at_ground(10.0, 10.0)]);
    let target = store.add(ShapeKind::Cube, at_ground(0.0, 0.0), "#1475b5".to_string());
    assert_eq!(resolve_support_height(target, at_ground(0.0, 0.0), &store), GROUND_Y);
}

// =============================================================
// classify_zone
// =============================================================

#[test]
fn zone_todo_range() {
    assert_eq!(classify_zone(0.0), Some(TaskStatus::Todo));
    assert_eq!(classify_zone(-10.0), Some(TaskStatus::Todo));
    assert_eq!(classify_zone(9.999), Some(TaskStatus::Todo));
}

#[test]
fn zone_boundary_x10_is_todo() {
    assert_eq!(classify_zone(10.0), Some(TaskStatus::Todo));
}

#[test]
fn zone_just_past_boundary_is_done() {
    assert_eq!(classify_zone(10.0001), Some(TaskStatus::Done));
}

#[test]
fn zone_done_range() {
    assert_eq!(classify_zone(20.0), Some(TaskStatus::Done));
    assert_eq!(classify_zone(30.0), Some(TaskStatus::Done));
}

#[test]
fn zone_outside_both_is_none() {
    assert_eq!(classify_zone(-10.001), None);
    assert_eq!(classify_zone(30.001), None);
    assert_eq!(classify_zone(100.0), None);
}
