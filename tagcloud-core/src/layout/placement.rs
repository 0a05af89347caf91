// Candidate construction and compaction for a single tag.
//
// - anchor_candidate: hang a rectangle outward from a spiral point
// - compact: pull an accepted rectangle toward the center in unit steps
//
// Both work against the grid of already placed rectangles; the rectangle
// being placed is never in the grid yet.

use log::trace;

use super::spatial_grid::SpatialGrid;
use crate::geometry::{PointF, RectF, SizeF};

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
enum Axis {
    X,
    Y,
}

impl Axis {
    fn of(self, p: PointF) -> f64 {
        match self {
            Axis::X => p.x,
            Axis::Y => p.y,
        }
    }
}

/// Rectangle anchored at `point`, extending away from `center` on both axes.
///
/// Per axis: past the center the point is the near (min) edge, otherwise it
/// is the far (max) edge.
pub fn anchor_candidate(point: PointF, size: SizeF, center: PointF) -> RectF {
    let x = if point.x > center.x { point.x } else { point.x - size.w };
    let y = if point.y > center.y { point.y } else { point.y - size.h };
    RectF { x, y, w: size.w, h: size.h }
}

/// Unit step along `axis` toward the center, if it neither overshoots nor collides.
///
/// Overshoot means the moved rectangle's center reaches or crosses the
/// center line it started on one side of.
fn try_step(rect: &RectF, axis: Axis, center: PointF, grid: &SpatialGrid) -> Option<RectF> {
    let from = axis.of(rect.center());
    let target = axis.of(center);
    let delta = if from > target { -1.0 } else { 1.0 };

    let moved = match axis {
        Axis::X => rect.offset(delta, 0.0),
        Axis::Y => rect.offset(0.0, delta),
    };

    let to = axis.of(moved.center());
    let overshoots = if from > target { to <= target } else { to >= target };
    if overshoots || grid.overlaps_any(&moved) {
        return None;
    }
    Some(moved)
}

/// Alternate X and Y unit steps until a full pass moves nothing.
///
/// The result is a local fixed point: no single-axis step toward the center
/// is both non-overshooting and collision-free.
pub fn compact(mut rect: RectF, center: PointF, grid: &SpatialGrid) -> RectF {
    let start = rect;
    loop {
        let moved_x = try_step(&rect, Axis::X, center, grid).map(|r| rect = r).is_some();
        let moved_y = try_step(&rect, Axis::Y, center, grid).map(|r| rect = r).is_some();
        if !moved_x && !moved_y {
            break;
        }
    }
    trace!(
        "compacted ({}, {}) -> ({}, {})",
        start.x, start.y, rect.x, rect.y
    );
    rect
}
