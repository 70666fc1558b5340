#![allow(clippy::clone_on_copy, clippy::float_cmp)]

use super::*;

// --- Points and vectors ---

#[test]
fn global_point_new() {
    let p = GlobalPoint::new(3.0, 4.0);
    assert_eq!(p.x, 3.0);
    assert_eq!(p.y, 4.0);
}

#[test]
fn local_point_new() {
    let p = LocalPoint::new(-1.5, 2.5);
    assert_eq!(p.x, -1.5);
    assert_eq!(p.y, 2.5);
}

#[test]
fn global_point_equality() {
    assert_eq!(GlobalPoint::new(1.0, 2.0), GlobalPoint::new(1.0, 2.0));
    assert_ne!(GlobalPoint::new(1.0, 2.0), GlobalPoint::new(1.0, 3.0));
}

#[test]
fn point_plus_vector() {
    let p = GlobalPoint::new(1.0, 2.0) + Vector::new(3.0, -1.0);
    assert_eq!(p, GlobalPoint::new(4.0, 1.0));
}

#[test]
fn point_minus_vector() {
    let p = GlobalPoint::new(1.0, 2.0) - Vector::new(3.0, -1.0);
    assert_eq!(p, GlobalPoint::new(-2.0, 3.0));
}

#[test]
fn point_minus_point_is_displacement() {
    let v = GlobalPoint::new(5.0, 7.0) - GlobalPoint::new(2.0, 10.0);
    assert_eq!(v, Vector::new(3.0, -3.0));
}

#[test]
fn vector_negation() {
    assert_eq!(-Vector::new(3.0, -4.0), Vector::new(-3.0, 4.0));
}

#[test]
fn vector_scale() {
    assert_eq!(Vector::new(3.0, -4.0) * 0.5, Vector::new(1.5, -2.0));
}

#[test]
fn add_then_subtract_round_trips() {
    let p = GlobalPoint::new(0.25, -9.75);
    let v = Vector::new(12.5, 3.125);
    assert_eq!(p + v - v, p);
}

#[test]
fn global_point_clone() {
    let p = GlobalPoint::new(1.0, 2.0);
    let q = p.clone();
    assert_eq!(p, q);
}

// --- BoundingRect ---

#[test]
fn bounding_rect_extents() {
    let b = BoundingRect::new(GlobalPoint::new(10.0, 20.0), 30.0, 40.0);
    assert_eq!(b.right(), 40.0);
    assert_eq!(b.bottom(), 60.0);
}

#[test]
fn bounding_rect_center() {
    let b = BoundingRect::new(GlobalPoint::new(10.0, 20.0), 30.0, 40.0);
    assert_eq!(b.center(), GlobalPoint::new(25.0, 40.0));
}

#[test]
fn bounding_rect_contains_interior() {
    let b = BoundingRect::new(GlobalPoint::new(0.0, 0.0), 10.0, 10.0);
    assert!(b.contains(GlobalPoint::new(5.0, 5.0)));
}

#[test]
fn bounding_rect_contains_boundaries_inclusive() {
    let b = BoundingRect::new(GlobalPoint::new(0.0, 0.0), 10.0, 10.0);
    assert!(b.contains(GlobalPoint::new(0.0, 0.0)));
    assert!(b.contains(GlobalPoint::new(10.0, 10.0)));
    assert!(b.contains(GlobalPoint::new(0.0, 10.0)));
    assert!(b.contains(GlobalPoint::new(10.0, 0.0)));
}

#[test]
fn bounding_rect_excludes_outside() {
    let b = BoundingRect::new(GlobalPoint::new(0.0, 0.0), 10.0, 10.0);
    assert!(!b.contains(GlobalPoint::new(10.01, 5.0)));
    assert!(!b.contains(GlobalPoint::new(-0.01, 5.0)));
    assert!(!b.contains(GlobalPoint::new(5.0, 10.01)));
}

#[test]
fn bounding_rect_degenerate_contains_only_its_line() {
    let b = BoundingRect::new(GlobalPoint::new(2.0, 3.0), 0.0, 5.0);
    assert!(b.contains(GlobalPoint::new(2.0, 4.0)));
    assert!(!b.contains(GlobalPoint::new(2.1, 4.0)));
}

// --- Serde ---

#[test]
fn global_point_serializes_as_xy() {
    let p = GlobalPoint::new(1.5, -2.0);
    let v = serde_json::to_value(p).unwrap();
    assert_eq!(v, serde_json::json!({ "x": 1.5, "y": -2.0 }));
}

#[test]
fn global_point_deserializes() {
    let p: GlobalPoint = serde_json::from_value(serde_json::json!({ "x": 3.0, "y": 4.0 })).unwrap();
    assert_eq!(p, GlobalPoint::new(3.0, 4.0));
}
