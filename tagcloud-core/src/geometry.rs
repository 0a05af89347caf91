// Geometry primitives for the cloud layout.
//
// Plain value types plus the three predicates the layout relies on:
// - point-in-rectangle containment (half-open: left/top inclusive)
// - rectangle intersection (strict: shared edges do not intersect)
// - corner distance against a circle
//
// All predicates are exact except the circle check, which tolerates
// CIRCLE_EPSILON of floating-point error.

use serde::{Deserialize, Serialize};

/// Slack allowed when comparing a corner distance against the radius.
pub const CIRCLE_EPSILON: f64 = 1e-9;

#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PointI {
    pub x: i32,
    pub y: i32,
}

#[derive(Debug, Copy, Clone, PartialEq, Serialize, Deserialize)]
pub struct PointF {
    pub x: f64,
    pub y: f64,
}

impl PointF {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    pub fn distance_to(&self, other: PointF) -> f64 {
        (self.x - other.x).hypot(self.y - other.y)
    }
}

impl From<PointI> for PointF {
    fn from(p: PointI) -> Self {
        Self { x: p.x as f64, y: p.y as f64 }
    }
}

#[derive(Debug, Copy, Clone, PartialEq, Serialize, Deserialize)]
pub struct SizeF {
    pub w: f64,
    pub h: f64,
}

impl SizeF {
    pub fn new(w: f64, h: f64) -> Self {
        Self { w, h }
    }

    /// Both dimensions strictly positive. NaN fails.
    pub fn is_positive(&self) -> bool {
        self.w > 0.0 && self.h > 0.0
    }
}

/// Axis-aligned rectangle: top-left corner plus size.
#[derive(Debug, Copy, Clone, PartialEq, Serialize, Deserialize)]
pub struct RectF {
    pub x: f64,
    pub y: f64,
    pub w: f64,
    pub h: f64,
}

impl RectF {
    pub fn new(origin: PointF, size: SizeF) -> Self {
        Self { x: origin.x, y: origin.y, w: size.w, h: size.h }
    }

    /// Rectangle of `size` whose center is exactly `center`.
    pub fn centered_on(center: PointF, size: SizeF) -> Self {
        Self {
            x: center.x - size.w / 2.0,
            y: center.y - size.h / 2.0,
            w: size.w,
            h: size.h,
        }
    }

    pub fn left(&self) -> f64 { self.x }
    pub fn top(&self) -> f64 { self.y }
    pub fn right(&self) -> f64 { self.x + self.w }
    pub fn bottom(&self) -> f64 { self.y + self.h }

    pub fn size(&self) -> SizeF {
        SizeF { w: self.w, h: self.h }
    }

    pub fn center(&self) -> PointF {
        PointF { x: self.x + self.w / 2.0, y: self.y + self.h / 2.0 }
    }

    /// Corners in order: top-left, top-right, bottom-left, bottom-right.
    pub fn corners(&self) -> [PointF; 4] {
        [
            PointF::new(self.left(), self.top()),
            PointF::new(self.right(), self.top()),
            PointF::new(self.left(), self.bottom()),
            PointF::new(self.right(), self.bottom()),
        ]
    }

    pub fn offset(&self, dx: f64, dy: f64) -> RectF {
        RectF { x: self.x + dx, y: self.y + dy, ..*self }
    }

    pub fn contains(&self, p: PointF) -> bool {
        self.left() <= p.x && p.x < self.right() && self.top() <= p.y && p.y < self.bottom()
    }

    pub fn intersects(&self, other: &RectF) -> bool {
        other.left() < self.right()
            && self.left() < other.right()
            && other.top() < self.bottom()
            && self.top() < other.bottom()
    }

    /// True when any corner lies farther than `radius` from `center`.
    pub fn out_of_circle(&self, center: PointF, radius: f64) -> bool {
        self.corners()
            .iter()
            .any(|corner| corner.distance_to(center) > radius + CIRCLE_EPSILON)
    }

    pub fn union(&self, other: &RectF) -> RectF {
        let x0 = self.left().min(other.left());
        let y0 = self.top().min(other.top());
        let x1 = self.right().max(other.right());
        let y1 = self.bottom().max(other.bottom());
        RectF { x: x0, y: y0, w: x1 - x0, h: y1 - y0 }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rect(x: f64, y: f64, w: f64, h: f64) -> RectF {
        RectF { x, y, w, h }
    }

    #[test]
    fn test_contains_is_half_open() {
        let r = rect(0.0, 0.0, 2.0, 2.0);
        assert!(r.contains(PointF::new(0.0, 0.0)));
        assert!(r.contains(PointF::new(1.5, 1.999)));
        assert!(!r.contains(PointF::new(2.0, 1.0)));
        assert!(!r.contains(PointF::new(1.0, 2.0)));
        assert!(!r.contains(PointF::new(-0.1, 1.0)));
    }

    #[test]
    fn test_touching_edges_do_not_intersect() {
        let a = rect(0.0, 0.0, 2.0, 2.0);
        assert!(!a.intersects(&rect(2.0, 0.0, 2.0, 2.0)));
        assert!(!a.intersects(&rect(0.0, 2.0, 2.0, 2.0)));
        assert!(!a.intersects(&rect(2.0, 2.0, 1.0, 1.0)));
        assert!(a.intersects(&rect(1.9, 1.9, 2.0, 2.0)));
        assert!(a.intersects(&rect(0.5, 0.5, 1.0, 1.0)));
    }

    #[test]
    fn test_out_of_circle_uses_corners() {
        let center = PointF::new(5.0, 5.0);
        assert!(!rect(4.0, 4.0, 2.0, 2.0).out_of_circle(center, 5.0));
        // Corner (8, 9) is exactly 5 away.
        assert!(!rect(5.0, 5.0, 3.0, 4.0).out_of_circle(center, 5.0));
        assert!(rect(5.0, 5.0, 3.0, 4.1).out_of_circle(center, 5.0));
        assert!(!rect(1.0, 2.0, 8.0, 6.0).out_of_circle(center, 5.0));
        assert!(rect(0.0, 5.0, 1.0, 1.0).out_of_circle(center, 5.0));
    }

    #[test]
    fn test_centered_on() {
        let r = RectF::centered_on(PointF::new(5.0, 5.0), SizeF::new(2.0, 3.0));
        assert_eq!(r, rect(4.0, 3.5, 2.0, 3.0));
        assert_eq!(r.center(), PointF::new(5.0, 5.0));
    }

    #[test]
    fn test_union_and_offset() {
        let a = rect(0.0, 0.0, 1.0, 1.0);
        let b = rect(3.0, -2.0, 1.0, 1.0);
        assert_eq!(a.union(&b), rect(0.0, -2.0, 4.0, 3.0));
        assert_eq!(a.offset(-1.0, 2.0), rect(-1.0, 2.0, 1.0, 1.0));
    }

    #[test]
    fn test_size_positivity() {
        assert!(SizeF::new(1.0, 0.5).is_positive());
        assert!(!SizeF::new(0.0, 1.0).is_positive());
        assert!(!SizeF::new(1.0, -1.0).is_positive());
        assert!(!SizeF::new(f64::NAN, 1.0).is_positive());
    }
}
