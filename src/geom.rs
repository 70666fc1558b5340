//! Geometry value types shared by every shape: points in global and local
//! space, displacement vectors, and axis-aligned bounding boxes.
//!
//! Global and local coordinates are deliberately separate types so a
//! viewport-pixel position can never be fed into world-space math without
//! going through a [`crate::camera::Camera`] conversion.

#[cfg(test)]
#[path = "geom_test.rs"]
mod geom_test;

use std::ops::{Add, Mul, Neg, Sub};

use serde::{Deserialize, Serialize};

/// A point in world ("global") coordinates, pan/zoom-independent.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GlobalPoint {
    pub x: f64,
    pub y: f64,
}

impl GlobalPoint {
    #[must_use]
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// A point in viewport ("local") pixel coordinates, valid only for the
/// pan/zoom state it was produced under.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LocalPoint {
    pub x: f64,
    pub y: f64,
}

impl LocalPoint {
    #[must_use]
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// A displacement in world units.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Vector {
    pub dx: f64,
    pub dy: f64,
}

impl Vector {
    #[must_use]
    pub fn new(dx: f64, dy: f64) -> Self {
        Self { dx, dy }
    }
}

impl Add<Vector> for GlobalPoint {
    type Output = GlobalPoint;

    fn add(self, v: Vector) -> GlobalPoint {
        GlobalPoint::new(self.x + v.dx, self.y + v.dy)
    }
}

impl Sub<Vector> for GlobalPoint {
    type Output = GlobalPoint;

    fn sub(self, v: Vector) -> GlobalPoint {
        GlobalPoint::new(self.x - v.dx, self.y - v.dy)
    }
}

/// The displacement from `rhs` to `self`.
impl Sub for GlobalPoint {
    type Output = Vector;

    fn sub(self, rhs: GlobalPoint) -> Vector {
        Vector::new(self.x - rhs.x, self.y - rhs.y)
    }
}

impl Neg for Vector {
    type Output = Vector;

    fn neg(self) -> Vector {
        Vector::new(-self.dx, -self.dy)
    }
}

impl Mul<f64> for Vector {
    type Output = Vector;

    fn mul(self, k: f64) -> Vector {
        Vector::new(self.dx * k, self.dy * k)
    }
}

/// An axis-aligned box in global space, anchored at its top-left corner.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoundingRect {
    pub origin: GlobalPoint,
    pub w: f64,
    pub h: f64,
}

impl BoundingRect {
    #[must_use]
    pub fn new(origin: GlobalPoint, w: f64, h: f64) -> Self {
        Self { origin, w, h }
    }

    /// The x coordinate of the right edge.
    #[must_use]
    pub fn right(&self) -> f64 {
        self.origin.x + self.w
    }

    /// The y coordinate of the bottom edge.
    #[must_use]
    pub fn bottom(&self) -> f64 {
        self.origin.y + self.h
    }

    #[must_use]
    pub fn center(&self) -> GlobalPoint {
        self.origin + Vector::new(self.w / 2.0, self.h / 2.0)
    }

    /// Whether `point` lies inside the box. Boundaries are inclusive.
    #[must_use]
    pub fn contains(&self, point: GlobalPoint) -> bool {
        self.origin.x <= point.x
            && point.x <= self.right()
            && self.origin.y <= point.y
            && point.y <= self.bottom()
    }
}
