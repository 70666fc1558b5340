//! Grid-snapping math: cell rounding and parity-aware center alignment.
//!
//! Grid size is owned by the host's view-state and passed in per call.
//! All functions assume `gs > 0`.

#[cfg(test)]
#[path = "grid_test.rs"]
mod grid_test;

/// Round with ties toward positive infinity.
///
/// Grid coordinates follow the canvas convention of rounding `.5` up on
/// both sides of zero; `f64::round` breaks ties away from zero instead.
#[must_use]
pub fn round_half_up(v: f64) -> f64 {
    (v + 0.5).floor()
}

/// The multiple of `gs` nearest to `v`.
#[must_use]
pub fn snap_coord(v: f64, gs: f64) -> f64 {
    round_half_up(v / gs) * gs
}

/// `dim` rounded to whole grid cells, never below one cell.
#[must_use]
pub fn snap_length(dim: f64, gs: f64) -> f64 {
    (round_half_up(dim / gs) * gs).max(gs)
}

/// The origin coordinate that grid-aligns a shape's center on one axis,
/// given the shape's extent `dim` on that axis.
///
/// A dimension spanning an even number of cells has its center on a grid
/// line; an odd number of cells puts it on a cell midpoint. Each branch
/// picks the nearest valid alignment for its case.
#[must_use]
#[allow(clippy::float_cmp)] // exact-multiple parity test, not a tolerance check
pub fn snap_center_axis(center: f64, dim: f64, gs: f64) -> f64 {
    if (dim / gs) % 2.0 == 0.0 {
        round_half_up(center / gs) * gs - dim / 2.0
    } else {
        (round_half_up((center + gs / 2.0) / gs) - 0.5) * gs - dim / 2.0
    }
}
