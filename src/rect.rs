//! Axis-aligned rectangle shape: corner extraction, containment,
//! visibility culling, handle resizing, and grid alignment.

#[cfg(test)]
#[path = "rect_test.rs"]
mod rect_test;

use serde::{Deserialize, Serialize};
use tracing::trace;

use crate::camera::{Camera, Viewport};
use crate::geom::{BoundingRect, GlobalPoint, LocalPoint, Vector};
use crate::grid;
use crate::shape::{BaseRecord, ResizeHandle, SceneHooks, Shape, ShapeCore, ShapeId};

/// An axis-aligned rectangle anchored at its top-left corner.
///
/// `w` and `h` are in world units and stay non-negative after every public
/// operation ([`Shape::resize`] re-anchors instead of going negative).
/// A zero width or height is a valid degenerate state, not an error.
#[derive(Debug, Clone)]
pub struct Rect {
    core: ShapeCore,
    w: f64,
    h: f64,
}

/// Serialized form of a [`Rect`]: the base fields plus dimensions.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RectRecord {
    #[serde(flatten)]
    pub base: BaseRecord,
    pub width: f64,
    pub height: f64,
}

impl Rect {
    /// Create a rectangle with a fresh id and no styling.
    #[must_use]
    pub fn new(ref_point: GlobalPoint, w: f64, h: f64) -> Self {
        debug_assert!(w >= 0.0 && h >= 0.0, "rectangle dimensions must be non-negative");
        Self { core: ShapeCore::new(ref_point), w, h }
    }

    /// Set the fill color.
    #[must_use]
    pub fn with_fill(mut self, colour: impl Into<String>) -> Self {
        self.core.fill_colour = Some(colour.into());
        self
    }

    /// Set the stroke color.
    #[must_use]
    pub fn with_stroke(mut self, colour: impl Into<String>) -> Self {
        self.core.stroke_colour = Some(colour.into());
        self
    }

    /// Use a caller-supplied id instead of the generated one.
    #[must_use]
    pub fn with_id(mut self, id: ShapeId) -> Self {
        self.core.id = id;
        self
    }

    #[must_use]
    pub fn id(&self) -> ShapeId {
        self.core.id
    }

    #[must_use]
    pub fn ref_point(&self) -> GlobalPoint {
        self.core.ref_point
    }

    #[must_use]
    pub fn width(&self) -> f64 {
        self.w
    }

    #[must_use]
    pub fn height(&self) -> f64 {
        self.h
    }

    /// The serialized rectangle: base fields merged with `width`/`height`
    /// into a new record, built fresh on every call.
    #[must_use]
    pub fn record(&self) -> RectRecord {
        RectRecord { base: self.base_record(), width: self.w, height: self.h }
    }
}

impl Shape for Rect {
    fn core(&self) -> &ShapeCore {
        &self.core
    }

    fn core_mut(&mut self) -> &mut ShapeCore {
        &mut self.core
    }

    fn bounding_box(&self) -> BoundingRect {
        BoundingRect::new(self.core.ref_point, self.w, self.h)
    }

    #[allow(clippy::float_cmp)] // degenerate means exactly zero extent
    fn points(&self) -> Vec<GlobalPoint> {
        let rp = self.core.ref_point;
        if self.w == 0.0 || self.h == 0.0 {
            return vec![rp];
        }
        // Counter-clockwise from the anchor. Polygon consumers depend on
        // this exact coordinate order.
        vec![
            rp,
            rp + Vector::new(0.0, self.h),
            rp + Vector::new(self.w, self.h),
            rp + Vector::new(self.w, 0.0),
        ]
    }

    fn contains(&self, point: GlobalPoint) -> bool {
        self.bounding_box().contains(point)
    }

    fn center(&self) -> GlobalPoint {
        self.core.ref_point + Vector::new(self.w / 2.0, self.h / 2.0)
    }

    fn set_center(&mut self, center: GlobalPoint) {
        self.core.ref_point = center - Vector::new(self.w / 2.0, self.h / 2.0);
    }

    fn resize(&mut self, handle: ResizeHandle, point: LocalPoint, camera: &Camera) {
        let z = camera.zoom;
        let rp = self.core.ref_point;
        // Each arm measures the new extents in local pixels against the
        // edges held fixed by this handle, then moves the anchor
        // components that travel with it.
        match handle {
            ResizeHandle::TopLeft => {
                self.w = camera.global_to_local_x(rp.x) + self.w * z - point.x;
                self.h = camera.global_to_local_y(rp.y) + self.h * z - point.y;
                self.core.ref_point = camera.local_to_global(point);
            }
            ResizeHandle::BottomLeft => {
                self.w = camera.global_to_local_x(rp.x) + self.w * z - point.x;
                self.h = point.y - camera.global_to_local_y(rp.y);
                self.core.ref_point = GlobalPoint::new(camera.local_to_global_x(point.x), rp.y);
            }
            ResizeHandle::BottomRight => {
                self.w = point.x - camera.global_to_local_x(rp.x);
                self.h = point.y - camera.global_to_local_y(rp.y);
            }
            ResizeHandle::TopRight => {
                self.w = point.x - camera.global_to_local_x(rp.x);
                self.h = camera.global_to_local_y(rp.y) + self.h * z - point.y;
                self.core.ref_point = GlobalPoint::new(rp.x, camera.local_to_global_y(point.y));
            }
        }

        // The extents above are screen-space magnitudes; stored size is
        // world scale.
        self.w /= z;
        self.h /= z;

        // Dragging past the opposite edge flips the sign; shift the anchor
        // by the (negative) extent so w >= 0 and h >= 0 hold on exit.
        if self.w < 0.0 {
            self.core.ref_point = self.core.ref_point + Vector::new(self.w, 0.0);
            self.w = self.w.abs();
        }
        if self.h < 0.0 {
            self.core.ref_point = self.core.ref_point + Vector::new(0.0, self.h);
            self.h = self.h.abs();
        }

        trace!(
            id = %self.core.id,
            handle = handle.id(),
            w = self.w,
            h = self.h,
            "resized rectangle"
        );
    }

    fn snap_to_grid(&mut self, grid_size: f64, scene: &dyn SceneHooks) {
        let center = self.center();
        let target_x = grid::snap_center_axis(center.x, self.w, grid_size);
        let target_y = grid::snap_center_axis(center.y, self.h, grid_size);

        let requested = Vector::new(
            target_x - self.core.ref_point.x,
            target_y - self.core.ref_point.y,
        );
        // The scene may clamp the displacement (obstacle avoidance); its
        // answer is applied verbatim.
        let delta = scene.resolve_delta(requested, &*self);
        self.core.ref_point = self.core.ref_point + delta;

        trace!(id = %self.core.id, dx = delta.dx, dy = delta.dy, "snapped to grid");
        scene.invalidate(false);
    }

    fn resize_to_grid(&mut self, grid_size: f64, scene: &dyn SceneHooks) {
        self.core.ref_point = GlobalPoint::new(
            grid::snap_coord(self.core.ref_point.x, grid_size),
            grid::snap_coord(self.core.ref_point.y, grid_size),
        );
        self.w = grid::snap_length(self.w, grid_size);
        self.h = grid::snap_length(self.h, grid_size);

        trace!(id = %self.core.id, w = self.w, h = self.h, "resized to grid");
        scene.invalidate(false);
    }

    fn visible_in_canvas(&self, viewport: Viewport, camera: &Camera) -> bool {
        // Cheap opt-out first, then the geometric overlap test against
        // [0, width] x [0, height] in local space.
        if self.culling_exempt() {
            return true;
        }
        let rp = self.core.ref_point;
        !(camera.global_to_local_x(rp.x) > viewport.width
            || camera.global_to_local_y(rp.y) > viewport.height
            || camera.global_to_local_x(rp.x + self.w) < 0.0
            || camera.global_to_local_y(rp.y + self.h) < 0.0)
    }
}
