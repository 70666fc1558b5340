//! The shape capability interface and state common to every shape kind.
//!
//! A shape owns an anchor point in global space (`ref_point`, the top-left
//! corner for rectangles), optional styling, and a unique identity. The
//! [`Shape`] trait is the full capability set the editor dispatches on;
//! concrete kinds live in their own modules ([`crate::rect`]).
//!
//! External collaborators — redraw scheduling and collision-aware delta
//! resolution — are injected per call through [`SceneHooks`] rather than
//! reached through any ambient state.

#[cfg(test)]
#[path = "shape_test.rs"]
mod shape_test;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::camera::{Camera, Viewport};
use crate::geom::{BoundingRect, GlobalPoint, LocalPoint, Vector};

/// Unique identifier for a shape.
pub type ShapeId = Uuid;

/// State common to every shape: identity, world-space anchor, styling.
#[derive(Debug, Clone)]
pub struct ShapeCore {
    /// Unique identifier, generated at creation when not supplied.
    pub id: ShapeId,
    /// The shape's anchor in global space (top-left for rectangles).
    pub ref_point: GlobalPoint,
    /// Fill color as a CSS color string, if styled.
    pub fill_colour: Option<String>,
    /// Stroke color as a CSS color string, if styled.
    pub stroke_colour: Option<String>,
}

impl ShapeCore {
    /// Create common state anchored at `ref_point` with a fresh id and no
    /// styling.
    #[must_use]
    pub fn new(ref_point: GlobalPoint) -> Self {
        Self {
            id: Uuid::new_v4(),
            ref_point,
            fill_colour: None,
            stroke_colour: None,
        }
    }
}

/// Serialized base fields shared by every shape kind.
///
/// Field names are part of the storage/sync contract; concrete shapes
/// extend this by building a new merged record of their own, never by
/// handing out a mutated copy of someone else's.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BaseRecord {
    pub id: ShapeId,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fill_colour: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stroke_colour: Option<String>,
    pub ref_point: GlobalPoint,
}

/// One of the four corner drag handles, numbered counter-clockwise from
/// the top-left. Dragging a handle holds the opposite corner fixed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResizeHandle {
    TopLeft,
    BottomLeft,
    BottomRight,
    TopRight,
}

/// A handle id outside `0..=3` was passed by the caller.
#[derive(Debug, PartialEq, Eq, thiserror::Error)]
#[error("invalid resize handle id: {0}")]
pub struct InvalidHandle(pub u8);

impl TryFrom<u8> for ResizeHandle {
    type Error = InvalidHandle;

    fn try_from(id: u8) -> Result<Self, InvalidHandle> {
        match id {
            0 => Ok(Self::TopLeft),
            1 => Ok(Self::BottomLeft),
            2 => Ok(Self::BottomRight),
            3 => Ok(Self::TopRight),
            other => Err(InvalidHandle(other)),
        }
    }
}

impl ResizeHandle {
    /// The wire id of this handle.
    #[must_use]
    pub fn id(self) -> u8 {
        match self {
            Self::TopLeft => 0,
            Self::BottomLeft => 1,
            Self::BottomRight => 2,
            Self::TopRight => 3,
        }
    }
}

/// External collaborators consulted by mutating shape operations.
///
/// The host editor implements this once and passes it into each call; the
/// engine holds no reference to it between calls.
pub trait SceneHooks {
    /// Resolve a requested displacement against the rest of the scene
    /// (collision avoidance, obstacle clamping). The returned vector is
    /// applied verbatim.
    fn resolve_delta(&self, requested: Vector, shape: &dyn Shape) -> Vector;

    /// Request a redraw. `force = false` is a local-only redraw; the
    /// meaning of `force = true` is owned entirely by the host.
    fn invalidate(&self, force: bool);
}

/// Capability set implemented by every editable shape.
///
/// All operations are synchronous and run to completion; a sequence of
/// calls composes sequentially with no internal batching. Callers needing
/// a cancelable gesture snapshot the shape's geometry themselves before
/// the gesture begins.
pub trait Shape {
    /// The common state backing this shape.
    fn core(&self) -> &ShapeCore;

    /// Mutable access to the common state.
    fn core_mut(&mut self) -> &mut ShapeCore;

    /// The axis-aligned bounding box in global space.
    fn bounding_box(&self) -> BoundingRect;

    /// The shape's corner coordinates as a fresh vector on every call.
    fn points(&self) -> Vec<GlobalPoint>;

    /// Whether `point` lies inside the shape. Boundaries are inclusive.
    fn contains(&self, point: GlobalPoint) -> bool;

    /// The shape's center in global space.
    fn center(&self) -> GlobalPoint;

    /// Move the shape so its center lands on `center`. Setting the center
    /// to [`Shape::center`] is a no-op.
    fn set_center(&mut self, center: GlobalPoint);

    /// Resize by dragging `handle` to `point` (in local space), holding
    /// the opposite corner fixed. Does not request a redraw; the caller
    /// drives per-frame redraws during a drag.
    fn resize(&mut self, handle: ResizeHandle, point: LocalPoint, camera: &Camera);

    /// Align the shape's center to the grid, routing the displacement
    /// through [`SceneHooks::resolve_delta`], then request a non-forced
    /// redraw.
    fn snap_to_grid(&mut self, grid_size: f64, scene: &dyn SceneHooks);

    /// Snap position and dimensions directly to grid cells (no delta
    /// resolution), then request a non-forced redraw.
    fn resize_to_grid(&mut self, grid_size: f64, scene: &dyn SceneHooks);

    /// Whether this shape opts out of visibility culling entirely.
    fn culling_exempt(&self) -> bool {
        false
    }

    /// Whether any part of the shape is visible in the viewport. The base
    /// determination is the culling opt-out; geometric shapes OR their own
    /// overlap test on top of it.
    fn visible_in_canvas(&self, _viewport: Viewport, _camera: &Camera) -> bool {
        self.culling_exempt()
    }

    /// The serialized base fields, built fresh on every call.
    fn base_record(&self) -> BaseRecord {
        let core = self.core();
        BaseRecord {
            id: core.id,
            fill_colour: core.fill_colour.clone(),
            stroke_colour: core.stroke_colour.clone(),
            ref_point: core.ref_point,
        }
    }
}
