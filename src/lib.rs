//! Shape geometry and coordinate transforms for the collaborative canvas.
//!
//! This crate owns the mapping between world ("global") coordinates and
//! viewport ("local") coordinates under pan and zoom, and the geometric
//! behavior of editable shapes: bounding boxes, point containment,
//! visibility culling, corner-handle resizing, and grid snapping. It does
//! not render, persist, or synchronize anything — the host editor feeds
//! pointer positions in, reads geometry out, and owns redraw scheduling
//! through the [`shape::SceneHooks`] collaborator.
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`camera`] | Pan/zoom camera and global↔local coordinate conversions |
//! | [`geom`] | Point, vector, and bounding-box value types |
//! | [`shape`] | The [`shape::Shape`] capability trait, common state, wire records |
//! | [`rect`] | Axis-aligned rectangle shape with handle resizing |
//! | [`grid`] | Grid-snapping math (parity-aware centering, cell rounding) |

pub mod camera;
pub mod geom;
pub mod grid;
pub mod rect;
pub mod shape;
