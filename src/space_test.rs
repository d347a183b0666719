#![allow(clippy::float_cmp)]

use super::*;

const EPSILON: f64 = 1e-10;

fn approx_eq(a: f64, b: f64) -> bool {
    (a - b).abs() < EPSILON
}

// --- Vec3 / Ndc / PixelPoint ---

#[test]
fn vec3_new() {
    let v = Vec3::new(1.0, 2.0, 3.0);
    assert_eq!(v.x, 1.0);
    assert_eq!(v.y, 2.0);
    assert_eq!(v.z, 3.0);
}

#[test]
fn vec3_equality() {
    assert_eq!(Vec3::new(1.0, 2.0, 3.0), Vec3::new(1.0, 2.0, 3.0));
    assert_ne!(Vec3::new(1.0, 2.0, 3.0), Vec3::new(1.0, 2.0, 4.0));
}

#[test]
fn ndc_new() {
    let n = Ndc::new(-0.5, 0.5);
    assert_eq!(n.x, -0.5);
    assert_eq!(n.y, 0.5);
}

#[test]
fn pixel_point_new() {
    let p = PixelPoint::new(320.0, 240.0);
    assert_eq!(p.x, 320.0);
    assert_eq!(p.y, 240.0);
}

// --- Viewport: pixels → NDC ---

#[test]
fn ndc_top_left_corner() {
    let vp = Viewport::new(800.0, 600.0);
    let ndc = vp.ndc_from_pixels(PixelPoint::new(0.0, 0.0));
    assert_eq!(ndc.x, -1.0);
    assert_eq!(ndc.y, 1.0);
}

#[test]
fn ndc_bottom_right_corner() {
    let vp = Viewport::new(800.0, 600.0);
    let ndc = vp.ndc_from_pixels(PixelPoint::new(800.0, 600.0));
    assert_eq!(ndc.x, 1.0);
    assert_eq!(ndc.y, -1.0);
}

#[test]
fn ndc_center() {
    let vp = Viewport::new(800.0, 600.0);
    let ndc = vp.ndc_from_pixels(PixelPoint::new(400.0, 300.0));
    assert_eq!(ndc.x, 0.0);
    assert_eq!(ndc.y, 0.0);
}

#[test]
fn ndc_y_axis_points_up() {
    let vp = Viewport::new(100.0, 100.0);
    let upper = vp.ndc_from_pixels(PixelPoint::new(50.0, 25.0));
    let lower = vp.ndc_from_pixels(PixelPoint::new(50.0, 75.0));
    assert!(upper.y > lower.y);
}

// --- Viewport: NDC → pixels ---

#[test]
fn pixels_from_ndc_center() {
    let vp = Viewport::new(800.0, 600.0);
    let px = vp.pixels_from_ndc(Ndc::new(0.0, 0.0));
    assert_eq!(px.x, 400.0);
    assert_eq!(px.y, 300.0);
}

#[test]
fn pixels_from_ndc_corners() {
    let vp = Viewport::new(800.0, 600.0);
    let top_left = vp.pixels_from_ndc(Ndc::new(-1.0, 1.0));
    assert_eq!(top_left.x, 0.0);
    assert_eq!(top_left.y, 0.0);
    let bottom_right = vp.pixels_from_ndc(Ndc::new(1.0, -1.0));
    assert_eq!(bottom_right.x, 800.0);
    assert_eq!(bottom_right.y, 600.0);
}

#[test]
fn pixel_ndc_round_trip() {
    let vp = Viewport::new(1280.0, 720.0);
    let original = PixelPoint::new(333.0, 127.0);
    let back = vp.pixels_from_ndc(vp.ndc_from_pixels(original));
    assert!(approx_eq(back.x, original.x));
    assert!(approx_eq(back.y, original.y));
}
