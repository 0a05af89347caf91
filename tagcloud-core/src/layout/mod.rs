// Circular cloud layout.
//
// Places tags one at a time inside the circle of radius min(center.x, center.y):
// - First tag: centered exactly on the layout center
// - Later tags: walk the spiral from its start, hang a candidate outward
//   from the first free point that yields a non-overlapping, in-circle
//   rectangle, then compact it toward the center
// - Placed rectangles are append-only and kept in placement order
//
// Submodules:
// - spatial_grid: candidate lookup for overlap and containment checks
// - placement: anchoring and compaction of a single rectangle
//
// Containment is checked on the four corners only.

use log::debug;
use serde::Deserialize;

use crate::error::{LayoutError, PlacementFailure};
use crate::geometry::{PointF, PointI, RectF, SizeF};
use crate::spiral::{SpiralConfig, SpiralSource};

mod placement;
mod spatial_grid;

use placement::{anchor_candidate, compact};
use spatial_grid::SpatialGrid;

/// Outcome of one placement call that passed argument validation.
pub type Placement = Result<RectF, PlacementFailure>;

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct LayoutConfig {
    /// Cell edge of the spatial grid. Roughly the size of a typical tag.
    pub grid_cell_size: f64,
    /// Spiral used when the layout is built from a JSON request.
    pub spiral: SpiralConfig,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            grid_cell_size: 32.0,
            spiral: SpiralConfig::default(),
        }
    }
}

#[derive(Debug, Clone)]
pub struct CircularCloudLayout<S> {
    center: PointI,
    radius: f64,
    spiral: S,
    placed: SpatialGrid,
}

impl<S: SpiralSource> CircularCloudLayout<S> {
    pub fn new(center: PointI, spiral: S) -> Result<Self, LayoutError> {
        Self::with_config(center, spiral, &LayoutConfig::default())
    }

    pub fn with_config(center: PointI, spiral: S, cfg: &LayoutConfig) -> Result<Self, LayoutError> {
        if center.x < 1 {
            return Err(LayoutError::CenterXNotPositive(center));
        }
        if center.y < 1 {
            return Err(LayoutError::CenterYNotPositive(center));
        }
        Ok(Self {
            center,
            radius: center.x.min(center.y) as f64,
            spiral,
            placed: SpatialGrid::new(cfg.grid_cell_size),
        })
    }

    pub fn center(&self) -> PointI {
        self.center
    }

    pub fn radius(&self) -> f64 {
        self.radius
    }

    /// Placed rectangles in placement order.
    pub fn rectangles(&self) -> &[RectF] {
        self.placed.rects()
    }

    pub fn len(&self) -> usize {
        self.placed.len()
    }

    pub fn is_empty(&self) -> bool {
        self.placed.is_empty()
    }

    /// Union of all placed rectangles, `None` before the first placement.
    pub fn bounds(&self) -> Option<RectF> {
        let (first, rest) = self.rectangles().split_first()?;
        Some(rest.iter().fold(*first, |acc, r| acc.union(r)))
    }

    /// Place the next tag.
    ///
    /// The outer error is a caller bug (non-positive size). The inner
    /// `Placement` is `Err` when the cloud has no room for this size; the
    /// layout is left unchanged in that case.
    pub fn put_next_rectangle(&mut self, size: SizeF) -> Result<Placement, LayoutError> {
        if !size.is_positive() {
            return Err(LayoutError::InvalidSize(size));
        }

        let found = if self.placed.is_empty() {
            self.place_in_center(size)
        } else {
            self.find_spiral_slot(size)
        };

        let Some(rect) = found else {
            debug!("no room for {}x{} after {} tags", size.w, size.h, self.len());
            return Ok(Err(PlacementFailure { size }));
        };

        debug!("placed tag #{} at ({}, {}) size {}x{}", self.len(), rect.x, rect.y, rect.w, rect.h);
        self.placed.insert(rect);
        Ok(Ok(rect))
    }

    /// Place a batch of tags in order, one `Placement` per size.
    ///
    /// Stops at the first invalid size; tags placed before it stay placed.
    pub fn place_all<I>(&mut self, sizes: I) -> Result<Vec<Placement>, LayoutError>
    where
        I: IntoIterator<Item = SizeF>,
    {
        sizes
            .into_iter()
            .map(|size| self.put_next_rectangle(size))
            .collect()
    }

    fn center_f(&self) -> PointF {
        self.center.into()
    }

    fn place_in_center(&self, size: SizeF) -> Option<RectF> {
        let rect = RectF::centered_on(self.center_f(), size);
        (!rect.out_of_circle(self.center_f(), self.radius)).then_some(rect)
    }

    fn find_spiral_slot(&self, size: SizeF) -> Option<RectF> {
        let center = self.center_f();
        let candidate = self
            .spiral
            .points(self.center)
            .filter(|&p| !self.placed.contains_point(p))
            .map(|p| anchor_candidate(p, size, center))
            .find(|r| !r.out_of_circle(center, self.radius) && !self.placed.overlaps_any(r))?;
        Some(compact(candidate, center, &self.placed))
    }
}
