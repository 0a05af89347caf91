// Spatial hash grid over the placed rectangles.
//
// Rectangles live in an append-only Vec in placement order; cells only hold
// indices into it. Cell hits are candidates, every answer is confirmed with
// the exact geometry predicate, so results match a linear scan.

use std::collections::HashMap;

use crate::geometry::{PointF, RectF};

#[derive(Debug, Clone)]
pub struct SpatialGrid {
    /// Edge length of each square cell.
    cell_size: f64,
    rects: Vec<RectF>,
    cells: HashMap<(i64, i64), Vec<usize>>,
}

impl SpatialGrid {
    /// Non-positive or non-finite cell sizes fall back to 1.0.
    pub fn new(cell_size: f64) -> Self {
        let cell_size = if cell_size.is_finite() && cell_size > 0.0 { cell_size } else { 1.0 };
        Self {
            cell_size,
            rects: Vec::new(),
            cells: HashMap::new(),
        }
    }

    fn cell_of(&self, x: f64, y: f64) -> (i64, i64) {
        ((x / self.cell_size).floor() as i64, (y / self.cell_size).floor() as i64)
    }

    /// Cells touched by a rectangle, edges inclusive.
    fn cell_range(&self, rect: &RectF) -> impl Iterator<Item = (i64, i64)> + use<> {
        let (min_x, min_y) = self.cell_of(rect.left(), rect.top());
        let (max_x, max_y) = self.cell_of(rect.right(), rect.bottom());
        (min_x..=max_x).flat_map(move |cx| (min_y..=max_y).map(move |cy| (cx, cy)))
    }

    pub fn insert(&mut self, rect: RectF) {
        let index = self.rects.len();
        self.rects.push(rect);
        for cell in self.cell_range(&rect) {
            self.cells.entry(cell).or_default().push(index);
        }
    }

    /// All rectangles in insertion order.
    pub fn rects(&self) -> &[RectF] {
        &self.rects
    }

    pub fn len(&self) -> usize {
        self.rects.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rects.is_empty()
    }

    /// Indices of rectangles sharing a cell with `rect`, sorted and deduplicated.
    /// May include false positives.
    #[cfg(test)]
    pub fn query(&self, rect: &RectF) -> Vec<usize> {
        let mut result: Vec<usize> = self
            .cell_range(rect)
            .filter_map(|cell| self.cells.get(&cell))
            .flatten()
            .copied()
            .collect();
        result.sort_unstable();
        result.dedup();
        result
    }

    pub fn overlaps_any(&self, rect: &RectF) -> bool {
        self.cell_range(rect)
            .filter_map(|cell| self.cells.get(&cell))
            .flatten()
            .any(|&i| self.rects[i].intersects(rect))
    }

    /// True when `p` lies inside any stored rectangle.
    pub fn contains_point(&self, p: PointF) -> bool {
        self.cells
            .get(&self.cell_of(p.x, p.y))
            .is_some_and(|indices| indices.iter().any(|&i| self.rects[i].contains(p)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rect(x: f64, y: f64, w: f64, h: f64) -> RectF {
        RectF { x, y, w, h }
    }

    #[test]
    fn test_insert_and_query() {
        let mut grid = SpatialGrid::new(100.0);
        grid.insert(rect(0.0, 0.0, 50.0, 50.0));
        grid.insert(rect(200.0, 200.0, 50.0, 50.0));

        let nearby = grid.query(&rect(10.0, 10.0, 20.0, 20.0));
        assert_eq!(nearby, vec![0]);
        assert_eq!(grid.rects()[1], rect(200.0, 200.0, 50.0, 50.0));
        assert_eq!(grid.len(), 2);
    }

    #[test]
    fn test_overlaps_any() {
        let mut grid = SpatialGrid::new(100.0);
        grid.insert(rect(0.0, 0.0, 50.0, 50.0));

        assert!(grid.overlaps_any(&rect(25.0, 25.0, 50.0, 50.0)));
        assert!(!grid.overlaps_any(&rect(100.0, 100.0, 50.0, 50.0)));
        // Touching along an edge that sits on a cell boundary.
        assert!(!grid.overlaps_any(&rect(50.0, 0.0, 50.0, 50.0)));
    }

    #[test]
    fn test_spanning_rect_is_found_from_every_cell() {
        let mut grid = SpatialGrid::new(10.0);
        grid.insert(rect(-15.0, -15.0, 40.0, 5.0));
        assert!(grid.contains_point(PointF::new(-14.0, -12.0)));
        assert!(grid.contains_point(PointF::new(24.0, -11.0)));
        assert!(!grid.contains_point(PointF::new(25.0, -11.0)));
        assert!(grid.overlaps_any(&rect(20.0, -20.0, 1.0, 6.0)));
    }

    #[test]
    fn test_invalid_cell_size_falls_back() {
        let mut grid = SpatialGrid::new(0.0);
        grid.insert(rect(0.0, 0.0, 2.0, 2.0));
        assert!(grid.contains_point(PointF::new(1.0, 1.0)));
        assert!(SpatialGrid::new(f64::NAN).is_empty());
    }
}
