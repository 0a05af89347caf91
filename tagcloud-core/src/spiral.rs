// Spiral point sources.
//
// A layout asks its source for candidate anchors around the center once per
// placement call. Sources must:
// - yield points in non-decreasing distance from the center
// - be deterministic, so every enumeration yields the same sequence
// - be finite, otherwise a saturated cloud never stops searching

use std::f64::consts::PI;

use serde::Deserialize;

use crate::geometry::{PointF, PointI};

/// Produces the ordered candidate anchors for a given center.
pub trait SpiralSource {
    fn points(&self, center: PointI) -> impl Iterator<Item = PointF> + '_;
}

impl<S: SpiralSource + ?Sized> SpiralSource for &S {
    fn points(&self, center: PointI) -> impl Iterator<Item = PointF> + '_ {
        (**self).points(center)
    }
}

/// A fixed list of anchors, replayed as-is on every enumeration.
/// The center is ignored; ordering is the caller's responsibility.
impl SpiralSource for Vec<PointF> {
    fn points(&self, _center: PointI) -> impl Iterator<Item = PointF> + '_ {
        self.iter().copied()
    }
}

/// Archimedean spiral `r = a * theta`, walked with roughly constant arc length.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ArchimedeanSpiral {
    /// Distance between successive arms.
    arm_spacing: f64,
    /// Upper bound on the angle advanced per point, in radians.
    angle_step: f64,
    /// Stop once the radius exceeds this. `None` means `min(center.x, center.y)`.
    max_radius: Option<f64>,
}

impl Default for ArchimedeanSpiral {
    fn default() -> Self {
        Self {
            arm_spacing: 1.0,
            angle_step: 0.1,
            max_radius: None,
        }
    }
}

impl ArchimedeanSpiral {
    pub fn new() -> Self {
        Self::default()
    }

    /// Non-positive or non-finite values keep the current spacing.
    pub fn with_arm_spacing(mut self, arm_spacing: f64) -> Self {
        if arm_spacing.is_finite() && arm_spacing > 0.0 {
            self.arm_spacing = arm_spacing;
        }
        self
    }

    /// Non-positive or non-finite values keep the current step.
    pub fn with_angle_step(mut self, angle_step: f64) -> Self {
        if angle_step.is_finite() && angle_step > 0.0 {
            self.angle_step = angle_step;
        }
        self
    }

    /// Non-finite values keep the current bound; the walk must end.
    pub fn with_max_radius(mut self, max_radius: f64) -> Self {
        if max_radius.is_finite() {
            self.max_radius = Some(max_radius);
        }
        self
    }

    fn limit_for(&self, center: PointI) -> f64 {
        self.max_radius
            .unwrap_or_else(|| center.x.min(center.y) as f64)
    }
}

impl SpiralSource for ArchimedeanSpiral {
    fn points(&self, center: PointI) -> impl Iterator<Item = PointF> + '_ {
        ArchimedeanPoints {
            center: center.into(),
            a: self.arm_spacing / (2.0 * PI),
            arm_spacing: self.arm_spacing,
            angle_step: self.angle_step,
            limit: self.limit_for(center),
            theta: 0.0,
        }
    }
}

struct ArchimedeanPoints {
    center: PointF,
    a: f64,
    arm_spacing: f64,
    angle_step: f64,
    limit: f64,
    theta: f64,
}

impl Iterator for ArchimedeanPoints {
    type Item = PointF;

    fn next(&mut self) -> Option<PointF> {
        let r = self.a * self.theta;
        if r > self.limit || !r.is_finite() {
            return None;
        }
        let point = PointF {
            x: self.center.x + r * self.theta.cos(),
            y: self.center.y + r * self.theta.sin(),
        };
        // Smaller angular steps further out keep neighbouring points ~arm_spacing apart.
        self.theta += (self.arm_spacing / r.max(1.0)).min(self.angle_step);
        Some(point)
    }
}

/// Serializable spiral settings, used by the JSON surface.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(default)]
pub struct SpiralConfig {
    pub arm_spacing: f64,
    pub angle_step: f64,
    pub max_radius: Option<f64>,
}

impl Default for SpiralConfig {
    fn default() -> Self {
        let d = ArchimedeanSpiral::default();
        Self {
            arm_spacing: d.arm_spacing,
            angle_step: d.angle_step,
            max_radius: d.max_radius,
        }
    }
}

impl SpiralConfig {
    pub fn build(&self) -> ArchimedeanSpiral {
        let spiral = ArchimedeanSpiral::new()
            .with_arm_spacing(self.arm_spacing)
            .with_angle_step(self.angle_step);
        match self.max_radius {
            Some(r) => spiral.with_max_radius(r),
            None => spiral,
        }
    }
}
